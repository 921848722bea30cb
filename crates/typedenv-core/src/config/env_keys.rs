//! Environment variable key constants read by typedenv itself.

/// Observability and logging
pub mod observability {
    /// Only WARN and above are logged when truthy.
    pub const TYPEDENV_QUIET: &str = "TYPEDENV_QUIET";

    /// `EnvFilter` directive, e.g. `typedenv=debug`. `RUST_LOG` takes precedence.
    pub const TYPEDENV_LOG_LEVEL: &str = "TYPEDENV_LOG_LEVEL";

    pub const TYPEDENV_LOG_JSON: &str = "TYPEDENV_LOG_JSON";
}
