//! Unified error types for the domain layer
//!
//! Provides a common error type for domain operations, enabling consistent
//! error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Used in `FromStr` implementations when the input string doesn't
    /// match any known variant, e.g. an unknown strategy tag read back
    /// from storage by a caller that wants strict parsing.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("spare count cannot be negative");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: spare count cannot be negative"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown strategy tag: foo");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("foo"));
    }
}
