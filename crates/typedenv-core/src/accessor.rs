//! Typed environment accessor.
//!
//! Every accessor runs the same resolution sequence:
//!
//! 1. look the key up in the store;
//! 2. present and well-formed → coerced value;
//! 3. present but malformed → default plus a warning, or `InvalidFormat`;
//! 4. absent → default silently, or `MissingVariable`.
//!
//! The accessors differ only in their coercion rule. For integers the empty
//! string counts as absent; for booleans it is a valid `false`; for strings
//! it is returned as-is.

use serde::de::DeserializeOwned;

use crate::coerce;
use crate::diagnostics::{CoercionWarning, TracingSink, WarningSink};
use crate::error::{EnvError, ValueKind};
use crate::store::{lookup, ReadEnv, SystemEnv};

/// Outcome of applying a coercion rule to one lookup.
enum Coerced<T> {
    Value(T),
    Absent,
    Malformed { raw: String, detail: Option<String> },
}

/// Reads typed values from an environment store, reporting fallbacks to a
/// warning sink.
///
/// Holds no mutable state: repeated calls with an unchanged store return the
/// same result and emit the same warnings each time.
#[derive(Debug, Clone, Default)]
pub struct EnvAccessor<E = SystemEnv, S = TracingSink> {
    env: E,
    sink: S,
}

impl EnvAccessor<SystemEnv, TracingSink> {
    /// Process environment, warnings through `tracing`.
    pub fn system() -> Self {
        Self::new(SystemEnv, TracingSink)
    }
}

impl<E: ReadEnv, S: WarningSink> EnvAccessor<E, S> {
    pub fn new(env: E, sink: S) -> Self {
        Self { env, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Any present value, including `""`, is returned verbatim.
    pub fn parse_string(&self, key: &str, default: Option<String>) -> Result<String, EnvError> {
        self.resolve(key, ValueKind::String, default, coerce_string)
    }

    /// Lenient base-10 integer; see [`coerce::scan_int`].
    pub fn parse_int(&self, key: &str, default: Option<i64>) -> Result<i64, EnvError> {
        self.resolve(key, ValueKind::Integer, default, coerce_int)
    }

    /// `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`/`""`, any case.
    pub fn parse_bool(&self, key: &str, default: Option<bool>) -> Result<bool, EnvError> {
        self.resolve(key, ValueKind::Boolean, default, coerce_bool)
    }

    /// Parses the value as a JSON document into `T`.
    ///
    /// No schema is enforced beyond what deserializing into `T` requires; use
    /// `serde_json::Value` to accept any well-formed document. The default is
    /// returned as-is on both fallback paths.
    pub fn parse_json<T: DeserializeOwned>(
        &self,
        key: &str,
        default: Option<T>,
    ) -> Result<T, EnvError> {
        self.resolve(key, ValueKind::Json, default, coerce_json::<T>)
    }

    /// `Ok(None)` when absent instead of `MissingVariable`.
    pub fn optional_string(&self, key: &str) -> Result<Option<String>, EnvError> {
        self.resolve_optional(key, ValueKind::String, coerce_string)
    }

    pub fn optional_int(&self, key: &str) -> Result<Option<i64>, EnvError> {
        self.resolve_optional(key, ValueKind::Integer, coerce_int)
    }

    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, EnvError> {
        self.resolve_optional(key, ValueKind::Boolean, coerce_bool)
    }

    pub fn optional_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, EnvError> {
        self.resolve_optional(key, ValueKind::Json, coerce_json::<T>)
    }

    fn coerce_key<T>(&self, key: &str, rule: fn(Option<String>) -> Coerced<T>) -> Coerced<T> {
        rule(lookup(&self.env, key))
    }

    fn resolve<T>(
        &self,
        key: &str,
        kind: ValueKind,
        default: Option<T>,
        rule: fn(Option<String>) -> Coerced<T>,
    ) -> Result<T, EnvError> {
        match self.coerce_key(key, rule) {
            Coerced::Value(v) => Ok(v),
            Coerced::Absent => default.ok_or_else(|| EnvError::missing(key)),
            Coerced::Malformed { raw, detail } => match default {
                Some(d) => {
                    self.sink.warn(&CoercionWarning {
                        key: key.to_string(),
                        raw,
                        kind,
                        detail,
                    });
                    Ok(d)
                }
                None => Err(EnvError::invalid(key, raw, kind, detail)),
            },
        }
    }

    fn resolve_optional<T>(
        &self,
        key: &str,
        kind: ValueKind,
        rule: fn(Option<String>) -> Coerced<T>,
    ) -> Result<Option<T>, EnvError> {
        match self.coerce_key(key, rule) {
            Coerced::Value(v) => Ok(Some(v)),
            Coerced::Absent => Ok(None),
            Coerced::Malformed { raw, detail } => Err(EnvError::invalid(key, raw, kind, detail)),
        }
    }
}

fn coerce_string(raw: Option<String>) -> Coerced<String> {
    match raw {
        Some(s) => Coerced::Value(s),
        None => Coerced::Absent,
    }
}

fn coerce_int(raw: Option<String>) -> Coerced<i64> {
    match raw {
        None => Coerced::Absent,
        Some(s) if s.is_empty() => Coerced::Absent,
        Some(s) => match coerce::scan_int(&s) {
            Ok(n) => Coerced::Value(n),
            Err(detail) => Coerced::Malformed {
                raw: s,
                detail: Some(detail),
            },
        },
    }
}

fn coerce_bool(raw: Option<String>) -> Coerced<bool> {
    match raw {
        None => Coerced::Absent,
        Some(s) => match coerce::parse_bool(&s) {
            Some(b) => Coerced::Value(b),
            None => Coerced::Malformed {
                raw: s,
                detail: None,
            },
        },
    }
}

fn coerce_json<T: DeserializeOwned>(raw: Option<String>) -> Coerced<T> {
    match raw {
        None => Coerced::Absent,
        Some(s) => match coerce::parse_json::<T>(&s) {
            Ok(v) => Coerced::Value(v),
            Err(e) => Coerced::Malformed {
                raw: s,
                detail: Some(e.to_string()),
            },
        },
    }
}
