//! Eviction listener: a callback run whenever an entry leaves the cache.
//!
//! # Example
//! ```
//! use boundcache::CacheBuilder;
//! use boundcache::listener::EvictionCause;
//! use boundcache::PolicyKind;
//! use std::sync::{Arc, Mutex};
//!
//! let log: Arc<Mutex<Vec<(u64, EvictionCause)>>> = Arc::new(Mutex::new(Vec::new()));
//! let log2 = Arc::clone(&log);
//!
//! let cache = CacheBuilder::new(2)
//!     .policy(PolicyKind::Fifo)
//!     .eviction_listener(move |key: &u64, _value: u64, cause| {
//!         log2.lock().unwrap().push((*key, cause));
//!     })
//!     .build();
//!
//! cache.put(1, 10);
//! cache.put(2, 20);
//! cache.put(3, 30);
//!
//! assert_eq!(*log.lock().unwrap(), vec![(1, EvictionCause::Capacity)]);
//! ```

/// Why an entry was removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvictionCause {
    /// A new key needed room and the policy picked this entry.
    Capacity,
    /// Dropped by [`Cache::clear`](crate::Cache::clear).
    Cleared,
}

/// Receives each removed entry.
///
/// The cache calls the listener after releasing its lock, so a listener may
/// call back into the same cache. Notifications from concurrent callers may
/// arrive in any order relative to each other.
pub trait EvictionListener<K, V>: Send + Sync {
    fn on_evict(&self, key: &K, value: V, cause: EvictionCause);
}

/// An [`EvictionListener`] backed by a closure.
///
/// Created via [`CacheBuilder::eviction_listener`](crate::CacheBuilder::eviction_listener).
pub struct FnListener<F>(pub F);

impl<K, V, F> EvictionListener<K, V> for FnListener<F>
where
    F: Fn(&K, V, EvictionCause) + Send + Sync + 'static,
{
    fn on_evict(&self, key: &K, value: V, cause: EvictionCause) {
        (self.0)(key, value, cause)
    }
}
