//! Read-only environment store.
//!
//! Accessors never touch `std::env` directly; they read through [`ReadEnv`]
//! so tests can run against a [`MapEnv`] without mutating process state.

use std::collections::HashMap;
use std::env::{self, VarError};

/// Key/value lookup the accessors read from.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site when
/// sharing an accessor across threads.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

/// In-memory store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ReadEnv for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Present value as a string, or `None` when the key is absent.
///
/// Non-Unicode values count as present and are converted lossily.
pub(crate) fn lookup<E: ReadEnv + ?Sized>(env: &E, key: &str) -> Option<String> {
    match env.var(key) {
        Ok(v) => Some(v),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(os.to_string_lossy().into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_system_env_delegation() {
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("PORT", "8080").with("EMPTY", "");
        assert_eq!(env.len(), 2);
        assert_eq!(lookup(&env, "PORT").as_deref(), Some("8080"));
        assert_eq!(lookup(&env, "EMPTY").as_deref(), Some(""));
        assert_eq!(lookup(&env, "NOPE"), None);
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("B"), Ok("2".to_string()));
        assert_eq!(env.var("C"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_non_unicode_counts_as_present() {
        struct BadEnv;
        impl ReadEnv for BadEnv {
            fn var(&self, _key: &str) -> Result<String, VarError> {
                Err(VarError::NotUnicode(OsString::from("abc")))
            }
        }
        assert_eq!(lookup(&BadEnv, "ANY").as_deref(), Some("abc"));
    }
}
