//! Model value object representing an upstream chat-completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model identifiers understood by the completion gateway (Value Object)
///
/// Agents name the model they run on; the gateway forwards the identifier
/// verbatim in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Fast model used by the first-phase analysts and follow-up suggestions
    Gemini25Flash,
    /// Stronger model used by the checkers and the synthesizer
    Gemini25Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "google/gemini-2.5-flash",
            Model::Gemini25Pro => "google/gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 2.5 Flash)
    fn default() -> Self {
        Model::Gemini25Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "google/gemini-2.5-flash" => Model::Gemini25Flash,
            "google/gemini-2.5-pro" => Model::Gemini25Pro,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Gemini25Flash, Model::Gemini25Pro] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "openai/gpt-5-mini".parse().unwrap();
        assert_eq!(model, Model::Custom("openai/gpt-5-mini".to_string()));
        assert_eq!(model.to_string(), "openai/gpt-5-mini");
    }

    #[test]
    fn test_model_serializes_as_plain_string() {
        let json = serde_json::to_string(&Model::Gemini25Pro).unwrap();
        assert_eq!(json, r#""google/gemini-2.5-pro""#);
    }
}
