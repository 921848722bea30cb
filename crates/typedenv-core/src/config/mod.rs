//! typedenv's own configuration layer
//!
//! - `env_keys`: key constants
//! - `schema`: `ObservabilityConfig`, read through [`crate::EnvAccessor`]

pub mod env_keys;
pub mod schema;

pub use schema::ObservabilityConfig;
