//! Typed access to environment variables.
//!
//! Values are read from a [`ReadEnv`] store and coerced to strings, integers,
//! booleans or JSON. Each accessor takes a key and an optional default:
//!
//! | Situation | With default | Without default |
//! |-----------|--------------|-----------------|
//! | present, well-formed | value | value |
//! | present, malformed | default + warning | [`EnvError::InvalidFormat`] |
//! | absent | default | [`EnvError::MissingVariable`] |
//!
//! The free functions below read the process environment and report warnings
//! through `tracing`. Use [`EnvAccessor::new`] to inject a store or sink.
//!
//! Loading `.env` files is out of scope; populate the environment before use.

pub mod accessor;
pub mod coerce;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod store;

pub use accessor::EnvAccessor;
pub use config::ObservabilityConfig;
pub use diagnostics::{CoercionWarning, RecordingSink, TracingSink, WarningSink};
pub use error::{EnvError, ValueKind};
pub use store::{MapEnv, ReadEnv, SystemEnv};

use serde::de::DeserializeOwned;

/// [`EnvAccessor::parse_string`] against the process environment.
pub fn parse_string(key: &str, default: Option<String>) -> Result<String, EnvError> {
    EnvAccessor::system().parse_string(key, default)
}

/// [`EnvAccessor::parse_int`] against the process environment.
pub fn parse_int(key: &str, default: Option<i64>) -> Result<i64, EnvError> {
    EnvAccessor::system().parse_int(key, default)
}

/// [`EnvAccessor::parse_bool`] against the process environment.
pub fn parse_bool(key: &str, default: Option<bool>) -> Result<bool, EnvError> {
    EnvAccessor::system().parse_bool(key, default)
}

/// [`EnvAccessor::parse_json`] against the process environment.
pub fn parse_json<T: DeserializeOwned>(key: &str, default: Option<T>) -> Result<T, EnvError> {
    EnvAccessor::system().parse_json(key, default)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only absent keys here: the process environment is shared across tests.
    const UNSET: &str = "TYPEDENV_TEST_SURELY_UNSET_4F1C";

    #[test]
    fn test_free_functions_read_process_env() {
        assert!(parse_string(UNSET, None).unwrap_err().is_missing());
        assert_eq!(parse_int(UNSET, Some(5000)).unwrap(), 5000);
        assert!(parse_bool(UNSET, Some(true)).unwrap());
        let v: serde_json::Value = parse_json(UNSET, Some(serde_json::json!([1, 2]))).unwrap();
        assert_eq!(v, serde_json::json!([1, 2]));
    }

    #[test]
    fn test_path_is_readable_as_string() {
        if std::env::var("PATH").is_ok() {
            assert!(parse_string("PATH", None).is_ok());
        }
    }
}
