//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The submitted query is missing, not a string, or blank.
    #[error("Query is required")]
    InvalidQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_query_message_matches_wire_error() {
        assert_eq!(DomainError::InvalidQuery.to_string(), "Query is required");
    }
}
