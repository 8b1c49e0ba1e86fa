//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// An open-ended question submitted for analysis (Value Object)
///
/// Construction rejects blank input, so a `Query` that exists is always
/// safe to hand to the agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query {
    content: String,
}

impl Query {
    /// Try to create a new query, rejecting empty or whitespace-only text
    pub fn parse(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidQuery)
        } else {
            Ok(Self { content })
        }
    }

    /// Validate an untyped request field (`{"query": ...}`)
    ///
    /// Anything other than a non-blank JSON string is an input error.
    pub fn from_json_field(value: Option<&serde_json::Value>) -> Result<Self, DomainError> {
        match value.and_then(|v| v.as_str()) {
            Some(s) => Self::parse(s),
            None => Err(DomainError::InvalidQuery),
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::parse(s)
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_creation() {
        let q = Query::parse("Should I learn Rust?").unwrap();
        assert_eq!(q.content(), "Should I learn Rust?");
    }

    #[test]
    fn test_blank_query_rejected() {
        assert_eq!(Query::parse(""), Err(DomainError::InvalidQuery));
        assert_eq!(Query::parse("  \n\t "), Err(DomainError::InvalidQuery));
    }

    #[test]
    fn test_query_keeps_surrounding_whitespace() {
        let q = Query::parse("  hello ").unwrap();
        assert_eq!(q.content(), "  hello ");
    }

    #[test]
    fn test_from_json_field() {
        let body = json!({"query": "Buy or rent?"});
        assert!(Query::from_json_field(body.get("query")).is_ok());

        let missing = json!({});
        assert!(Query::from_json_field(missing.get("query")).is_err());

        let number = json!({"query": 42});
        assert!(Query::from_json_field(number.get("query")).is_err());

        let null = json!({"query": null});
        assert!(Query::from_json_field(null.get("query")).is_err());
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Query>(r#""   ""#).is_err());
        let q: Query = serde_json::from_str(r#""ok""#).unwrap();
        assert_eq!(q.content(), "ok");
    }
}
