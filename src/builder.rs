//! Cache builder.
//!
//! [`Cache::new`](crate::Cache::new) covers the common case. The builder adds
//! an eviction listener and defaults the policy to LRU.
//!
//! ## Example
//!
//! ```rust
//! use boundcache::{CacheBuilder, PolicyKind};
//!
//! let cache = CacheBuilder::new(3)
//!     .policy(PolicyKind::Mru)
//!     .try_build()
//!     .unwrap();
//! cache.put(1u32, "one".to_string());
//! assert_eq!(cache.get(&1), Some("one".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::cache::Cache;
use crate::error::ConfigError;
use crate::listener::{EvictionCause, EvictionListener, FnListener};
use crate::policy::PolicyKind;

/// Builder for [`Cache`] instances.
pub struct CacheBuilder<K, V> {
    capacity: usize,
    kind: PolicyKind,
    listener: Option<Box<dyn EvictionListener<K, V>>>,
}

impl<K, V> CacheBuilder<K, V> {
    /// Starts a builder for a cache holding at most `capacity` entries.
    ///
    /// The capacity is validated by [`try_build`](Self::try_build).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            kind: PolicyKind::Lru,
            listener: None,
        }
    }

    /// Sets the replacement policy. Defaults to [`PolicyKind::Lru`].
    pub fn policy(mut self, kind: PolicyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Registers a closure called for every entry leaving the cache.
    ///
    /// Replaces any listener set earlier.
    pub fn eviction_listener<F>(mut self, f: F) -> Self
    where
        F: Fn(&K, V, EvictionCause) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(FnListener(f)));
        self
    }

    /// Registers a listener implementing [`EvictionListener`] directly.
    pub fn eviction_listener_impl<L>(mut self, listener: L) -> Self
    where
        L: EvictionListener<K, V> + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }
}

impl<K, V> CacheBuilder<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    /// Builds the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build(self) -> Result<Cache<K, V>, ConfigError> {
        Cache::with_listener(self.kind, self.capacity, self.listener)
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero.
    pub fn build(self) -> Cache<K, V> {
        match self.try_build() {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, V> fmt::Debug for CacheBuilder<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBuilder")
            .field("capacity", &self.capacity)
            .field("policy", &self.kind)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
