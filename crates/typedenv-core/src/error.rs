//! Error type shared by all accessors.

use std::fmt;

use thiserror::Error;

/// Target type of a coercion, used in error and warning messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
    Json,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Json => "JSON",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the typed accessors when no default was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("Missing environment variable: {key}")]
    MissingVariable { key: String },

    #[error("Invalid {kind} value for environment variable {key}: \"{raw}\"{}", detail_suffix(.detail))]
    InvalidFormat {
        key: String,
        raw: String,
        kind: ValueKind,
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

impl EnvError {
    pub fn missing(key: impl Into<String>) -> Self {
        EnvError::MissingVariable { key: key.into() }
    }

    pub fn invalid(
        key: impl Into<String>,
        raw: impl Into<String>,
        kind: ValueKind,
        detail: Option<String>,
    ) -> Self {
        EnvError::InvalidFormat {
            key: key.into(),
            raw: raw.into(),
            kind,
            detail,
        }
    }

    /// Key the failing lookup was made for.
    pub fn key(&self) -> &str {
        match self {
            EnvError::MissingVariable { key } | EnvError::InvalidFormat { key, .. } => key,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, EnvError::MissingVariable { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, EnvError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = EnvError::missing("DATABASE_URL");
        assert_eq!(err.to_string(), "Missing environment variable: DATABASE_URL");
        assert!(err.is_missing());
        assert_eq!(err.key(), "DATABASE_URL");
    }

    #[test]
    fn test_invalid_message_without_detail() {
        let err = EnvError::invalid("DEBUG", "maybe", ValueKind::Boolean, None);
        assert_eq!(
            err.to_string(),
            "Invalid boolean value for environment variable DEBUG: \"maybe\""
        );
        assert!(err.is_invalid());
    }

    #[test]
    fn test_invalid_message_with_detail() {
        let err = EnvError::invalid(
            "USER_CONFIG",
            "not-json",
            ValueKind::Json,
            Some("expected ident at line 1 column 2".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Invalid JSON value for environment variable USER_CONFIG: \"not-json\": expected ident at line 1 column 2"
        );
        assert_eq!(err.key(), "USER_CONFIG");
    }
}
