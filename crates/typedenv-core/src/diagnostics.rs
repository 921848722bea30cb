//! Warning side channel for malformed values that fell back to a default.

use std::fmt;
use std::sync::Mutex;

use crate::error::ValueKind;

/// A malformed value that was replaced by the caller's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    pub key: String,
    pub raw: String,
    pub kind: ValueKind,
    /// Underlying parse error, when the coercion produced one.
    pub detail: Option<String>,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} value for environment variable {}: \"{}\"",
            self.kind, self.key, self.raw
        )?;
        if let Some(ref detail) = self.detail {
            write!(f, " ({})", detail)?;
        }
        f.write_str(", using default value")
    }
}

/// Receives warnings emitted by the accessors.
pub trait WarningSink {
    fn warn(&self, warning: &CoercionWarning);
}

impl<T: WarningSink + ?Sized> WarningSink for &T {
    fn warn(&self, warning: &CoercionWarning) {
        (**self).warn(warning)
    }
}

/// Production sink: forwards every warning to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: &CoercionWarning) {
        tracing::warn!(
            key = %warning.key,
            value = %warning.raw,
            kind = %warning.kind,
            detail = warning.detail.as_deref().unwrap_or(""),
            "{}",
            warning
        );
    }
}

/// Collects warnings in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: Mutex<Vec<CoercionWarning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn warnings(&self) -> Vec<CoercionWarning> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drains the recorded warnings.
    pub fn take(&self) -> Vec<CoercionWarning> {
        match self.warnings.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.warnings().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, warning: &CoercionWarning) {
        let mut guard = match self.warnings.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(warning.clone());
    }
}
