//! Record validation and response decoding errors.

use thiserror::Error;

/// Errors raised when a value violates a record's schema.
///
/// Constraint variants are produced synchronously by setters, builders and
/// [`Record::from_mapping`](crate::Record::from_mapping). They indicate
/// malformed data supplied by the caller (or the server) and are never
/// retryable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was null or missing.
    #[error("value for `{field}` must not be null")]
    Required {
        /// The local name of the field.
        field: &'static str,
    },

    /// A string field is shorter than its declared minimum length.
    #[error("length of `{field}` must be greater than or equal to {min}")]
    TooShort {
        /// The local name of the field.
        field: &'static str,
        /// The declared minimum length.
        min: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// A string field is longer than its declared maximum length.
    #[error("length of `{field}` must be less than or equal to {max}")]
    TooLong {
        /// The local name of the field.
        field: &'static str,
        /// The declared maximum length.
        max: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// A numeric field is below its declared lower bound.
    #[error("`{field}` must be greater than or equal to {minimum}")]
    BelowMinimum {
        /// The local name of the field.
        field: &'static str,
        /// The declared lower bound.
        minimum: i64,
    },

    /// An enum field holds a value outside its allowed set.
    #[error("invalid value `{value}` for `{field}`, must be one of {allowed:?}")]
    NotAllowed {
        /// The local name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Every value the field accepts.
        allowed: &'static [&'static str],
    },

    /// A value has the wrong JSON type for its field.
    #[error("`{field}` must be {expected}")]
    InvalidType {
        /// The local name of the field.
        field: &'static str,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },

    /// The named field is not declared by the record.
    #[error("`{record}` has no field named `{field}`")]
    UnknownField {
        /// The record type name.
        record: &'static str,
        /// The field name that was looked up.
        field: String,
    },

    /// A record was expected but the payload is not a JSON object.
    #[error("expected a JSON object for `{record}`")]
    ExpectedObject {
        /// The record type name.
        record: &'static str,
    },

    /// JSON parsing or decoding failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response content doesn't match the expected format.
    #[error("Unexpected content type: expected {expected}, got {actual}")]
    ContentTypeMismatch {
        /// The expected content type.
        expected: String,
        /// The actual content received.
        actual: String,
    },

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}

impl ValidationError {
    /// Returns `true` if this error reports a schema constraint violation
    /// rather than a decoding failure.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Required { .. }
                | Self::TooShort { .. }
                | Self::TooLong { .. }
                | Self::BelowMinimum { .. }
                | Self::NotAllowed { .. }
                | Self::InvalidType { .. }
        )
    }

    /// Returns the local field name the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::NotAllowed { field, .. }
            | Self::InvalidType { field, .. } => Some(field),
            Self::UnknownField { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_display() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "value for `name` must not be null");
        assert!(err.is_constraint_violation());
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_not_allowed_lists_allowed_values() {
        let err = ValidationError::NotAllowed {
            field: "state",
            value: "PAUSED".to_string(),
            allowed: &["RUNNING", "STOPPED"],
        };
        let display = err.to_string();
        assert!(display.contains("PAUSED"));
        assert!(display.contains("\"RUNNING\""));
        assert!(display.contains("\"STOPPED\""));
    }

    #[test]
    fn test_length_bounds_display() {
        let short = ValidationError::TooShort {
            field: "name",
            min: 1,
            actual: 0,
        };
        assert!(short.to_string().contains("greater than or equal to 1"));

        let long = ValidationError::TooLong {
            field: "name",
            max: 10,
            actual: 11,
        };
        assert!(long.to_string().contains("less than or equal to 10"));
    }

    #[test]
    fn test_json_parse_is_not_constraint_violation() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(!err.is_constraint_violation());
        assert_eq!(err.field(), None);
    }
}
