//! Tracing init for the CLI.
//!
//! Uses `ObservabilityConfig` for TYPEDENV_QUIET, TYPEDENV_LOG_LEVEL and
//! TYPEDENV_LOG_JSON. Logs go to stderr; stdout carries only values.

use tracing_subscriber::{prelude::*, EnvFilter};
use typedenv_core::{
    CoercionWarning, EnvAccessor, ObservabilityConfig, ReadEnv, RecordingSink, SystemEnv,
    TracingSink, WarningSink,
};

/// Initialize tracing. Call at process startup.
///
/// Warnings for malformed TYPEDENV_* values are held until the subscriber
/// is installed, then re-emitted.
pub fn init_tracing() {
    let (cfg, pending) = read_config(SystemEnv);
    let level = cfg.filter_directive();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };

    replay(&pending, &TracingSink);
}

/// Reads the config, recording warnings instead of emitting them.
fn read_config<E: ReadEnv>(env: E) -> (ObservabilityConfig, Vec<CoercionWarning>) {
    let accessor = EnvAccessor::new(env, RecordingSink::new());
    let cfg = ObservabilityConfig::from_env(&accessor);
    (cfg, accessor.sink().take())
}

fn replay<S: WarningSink>(warnings: &[CoercionWarning], sink: &S) {
    for warning in warnings {
        sink.warn(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedenv_core::MapEnv;

    #[test]
    fn test_read_config_defers_warnings() {
        let env = MapEnv::new()
            .with("TYPEDENV_LOG_JSON", "sometimes")
            .with("TYPEDENV_QUIET", "maybe");
        let (cfg, pending) = read_config(env);
        assert!(!cfg.log_json);
        assert!(!cfg.quiet);
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().any(|w| w.key == "TYPEDENV_LOG_JSON" && w.raw == "sometimes"));
        assert!(pending.iter().any(|w| w.key == "TYPEDENV_QUIET" && w.raw == "maybe"));
    }

    #[test]
    fn test_read_config_clean_env_has_no_warnings() {
        let (_, pending) = read_config(MapEnv::new().with("TYPEDENV_LOG_JSON", "1"));
        assert!(pending.is_empty());
    }

    #[test]
    fn test_replay_forwards_every_recorded_warning() {
        let (_, pending) = read_config(MapEnv::new().with("TYPEDENV_QUIET", "maybe"));
        let target = RecordingSink::new();
        replay(&pending, &target);
        assert_eq!(target.warnings(), pending);
    }
}
