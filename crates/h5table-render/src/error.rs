//! Error types for format token parsing.

use thiserror::Error;

/// Errors that can occur when parsing a numeric format token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatSpecError {
    /// The token contains a character the grammar does not allow at that position.
    #[error("invalid format token '{token}': unexpected '{found}' at position {position}")]
    UnexpectedChar {
        token: String,
        found: char,
        position: usize,
    },

    /// A numeric field (width or precision) does not fit in `usize`.
    #[error("invalid format token '{token}': {field} is too large")]
    Overflow { token: String, field: &'static str },

    /// A `.` was not followed by any precision digits.
    #[error("invalid format token '{token}': missing precision after '.'")]
    MissingPrecision { token: String },

    /// The option is part of the general grammar but not supported for floats here.
    #[error("invalid format token '{token}': '{option}' is not supported")]
    Unsupported { token: String, option: char },
}

impl FormatSpecError {
    /// The offending token.
    pub fn token(&self) -> &str {
        match self {
            FormatSpecError::UnexpectedChar { token, .. }
            | FormatSpecError::Overflow { token, .. }
            | FormatSpecError::MissingPrecision { token }
            | FormatSpecError::Unsupported { token, .. } => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormatSpecError::UnexpectedChar {
            token: "10.3q".to_string(),
            found: 'q',
            position: 4,
        };
        assert!(err.to_string().contains("10.3q"));
        assert!(err.to_string().contains("'q'"));
        assert_eq!(err.token(), "10.3q");
    }

    #[test]
    fn test_unsupported_display() {
        let err = FormatSpecError::Unsupported {
            token: ",.2f".to_string(),
            option: ',',
        };
        assert!(err.to_string().contains("not supported"));
    }
}
