//! Guard error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Every
//! variant keeps the bare message and the offending parameter name apart so
//! callers can inspect them without parsing the rendered text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Guard result type.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Name rendered into default messages when the caller gave none.
pub const UNKNOWN_ARGUMENT: &str = "unknown argument";

/// Message carried by every [`GuardError::NullArgument`].
pub const NULL_MESSAGE: &str = "Value cannot be null.";

/// Failure raised by a guard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// The value, or a required predicate/message producer, was absent.
    #[error("Value cannot be null. (Parameter '{name}')")]
    NullArgument { name: String },

    /// A text-like value was present but empty.
    #[error("{message} (Parameter '{name}')")]
    EmptyArgument { name: String, message: String },

    /// A caller-supplied condition flagged the value.
    #[error("{message}{}", param_suffix(.name))]
    InvalidArgument {
        name: Option<String>,
        value: Option<String>,
        message: String,
    },

    /// The value fell outside an inclusive range, or a range predicate flagged it.
    #[error("{message}{}", param_suffix(.name))]
    OutOfRange {
        name: Option<String>,
        value: Option<String>,
        message: String,
    },
}

fn param_suffix(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" (Parameter '{}')", name),
        None => String::new(),
    }
}

/// Discriminant of a [`GuardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardErrorKind {
    NullArgument,
    EmptyArgument,
    InvalidArgument,
    OutOfRange,
}

impl GuardErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardErrorKind::NullArgument => "null_argument",
            GuardErrorKind::EmptyArgument => "empty_argument",
            GuardErrorKind::InvalidArgument => "invalid_argument",
            GuardErrorKind::OutOfRange => "out_of_range",
        }
    }
}

impl std::fmt::Display for GuardErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GuardError {
    pub fn kind(&self) -> GuardErrorKind {
        match self {
            GuardError::NullArgument { .. } => GuardErrorKind::NullArgument,
            GuardError::EmptyArgument { .. } => GuardErrorKind::EmptyArgument,
            GuardError::InvalidArgument { .. } => GuardErrorKind::InvalidArgument,
            GuardError::OutOfRange { .. } => GuardErrorKind::OutOfRange,
        }
    }

    /// Name of the rejected parameter, if the caller supplied one.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            GuardError::NullArgument { name } | GuardError::EmptyArgument { name, .. } => {
                Some(name)
            }
            GuardError::InvalidArgument { name, .. } | GuardError::OutOfRange { name, .. } => {
                name.as_deref()
            }
        }
    }

    /// The message without the parameter suffix.
    pub fn message(&self) -> &str {
        match self {
            GuardError::NullArgument { .. } => NULL_MESSAGE,
            GuardError::EmptyArgument { message, .. }
            | GuardError::InvalidArgument { message, .. }
            | GuardError::OutOfRange { message, .. } => message,
        }
    }

    /// Rendered offending value, for the variants that record one.
    pub fn actual_value(&self) -> Option<&str> {
        match self {
            GuardError::InvalidArgument { value, .. } | GuardError::OutOfRange { value, .. } => {
                value.as_deref()
            }
            _ => None,
        }
    }
}

// Convenience constructors
impl GuardError {
    pub fn null_argument(name: impl Into<String>) -> Self {
        Self::NullArgument { name: name.into() }
    }

    pub fn empty_argument(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!("The argument {} is empty.", name);
        Self::EmptyArgument { name, message }
    }

    pub fn invalid_argument(
        name: Option<&str>,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name: name.map(str::to_owned),
            value,
            message: message.into(),
        }
    }

    pub fn out_of_range(
        name: Option<&str>,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            name: name.map(str::to_owned),
            value,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_argument_display() {
        let err = GuardError::null_argument("config");
        assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'config')");
        assert_eq!(err.message(), NULL_MESSAGE);
        assert_eq!(err.param_name(), Some("config"));
        assert_eq!(err.kind(), GuardErrorKind::NullArgument);
    }

    #[test]
    fn test_empty_argument_message() {
        let err = GuardError::empty_argument("path");
        assert_eq!(err.message(), "The argument path is empty.");
        assert_eq!(
            err.to_string(),
            "The argument path is empty. (Parameter 'path')"
        );
        assert!(err.actual_value().is_none());
    }

    #[test]
    fn test_invalid_argument_without_name_has_no_suffix() {
        let err = GuardError::invalid_argument(None, Some("3".to_string()), "bad");
        assert_eq!(err.to_string(), "bad");
        assert_eq!(err.param_name(), None);
        assert_eq!(err.actual_value(), Some("3"));
    }

    #[test]
    fn test_out_of_range_with_name() {
        let err = GuardError::out_of_range(Some("port"), Some("0".to_string()), "too low");
        assert_eq!(err.to_string(), "too low (Parameter 'port')");
        assert_eq!(err.kind(), GuardErrorKind::OutOfRange);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&GuardErrorKind::OutOfRange).unwrap();
        assert_eq!(json, "\"out_of_range\"");

        let kind: GuardErrorKind = serde_json::from_str("\"null_argument\"").unwrap();
        assert_eq!(kind, GuardErrorKind::NullArgument);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}
