//! Error types.
//!
//! - [`ConfigError`]: a cache was asked for with parameters it cannot honor
//!   (a zero capacity).
//! - [`InvariantError`]: `check_invariants` found the key mapping and the
//!   policy bookkeeping out of step. This indicates a bug in the crate, not
//!   a caller mistake.
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let err = Cache::<u64, u64>::try_new(PolicyKind::Lru, 0).unwrap_err();
//! assert!(err.to_string().contains("capacity"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Invalid construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Internal bookkeeping disagreed with the key mapping.
///
/// Carries a description of the check that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache invariant violated: {}", self.0)
    }
}

impl std::error::Error for InvariantError {}
