//! Configuration structs, loaded through the typed accessors.

use super::env_keys::observability as obv_keys;
use crate::accessor::EnvAccessor;
use crate::diagnostics::WarningSink;
use crate::store::ReadEnv;

pub const DEFAULT_LOG_LEVEL: &str = "typedenv=info";

/// Observability config: quiet, log_level, log_json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl ObservabilityConfig {
    /// Every field has a default, so this never fails; malformed values are
    /// reported through the accessor's sink.
    pub fn from_env<E: ReadEnv, S: WarningSink>(env: &EnvAccessor<E, S>) -> Self {
        let defaults = Self::default();
        let log_level = env
            .parse_string(obv_keys::TYPEDENV_LOG_LEVEL, Some(defaults.log_level))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        // Set but empty means "use the default directive".
        let log_level = if log_level.trim().is_empty() {
            DEFAULT_LOG_LEVEL.to_string()
        } else {
            log_level
        };
        Self {
            quiet: env
                .parse_bool(obv_keys::TYPEDENV_QUIET, Some(defaults.quiet))
                .unwrap_or(defaults.quiet),
            log_level,
            log_json: env
                .parse_bool(obv_keys::TYPEDENV_LOG_JSON, Some(defaults.log_json))
                .unwrap_or(defaults.log_json),
        }
    }

    /// Filter directive to install when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> String {
        if self.quiet {
            "typedenv=warn,typedenv_core=warn".to_string()
        } else {
            self.log_level.clone()
        }
    }
}
