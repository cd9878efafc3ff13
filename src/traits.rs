//! # Cache traits
//!
//! Two seams:
//!
//! ```text
//!   ┌───────────────────────────────┐        ┌───────────────────────────────┐
//!   │      BoundedCache<K, V>       │        │      EvictionPolicy<K>        │
//!   │                               │        │                               │
//!   │  put(&, K, V) → Option<V>     │ uses   │  on_insert(&mut, &K)          │
//!   │  get(&, &K) → Option<V>       │ ─────► │  on_access(&mut, &K)          │
//!   │  contains / len / capacity    │        │  select_victim(&mut) → K      │
//!   └───────────────────────────────┘        │  peek_victim(&) → &K          │
//!                                            └───────────────────────────────┘
//! ```
//!
//! [`BoundedCache`] is what callers program against. It takes `&self`:
//! implementations do their own locking.
//!
//! [`EvictionPolicy`] is what the cache core drives. A policy sees keys only,
//! never values, and owns whatever ordering or frequency state it needs to
//! pick a victim.
//!
//! ## Policy contract
//!
//! | Call            | When the core makes it                                  |
//! |-----------------|---------------------------------------------------------|
//! | `on_insert`     | a key not in the mapping was just stored                |
//! | `on_access`     | a `get` hit, or a `put` that replaced an existing value |
//! | `select_victim` | a new key is about to be stored and the cache is full   |
//!
//! `select_victim` both chooses the victim and forgets it: once it returns,
//! the policy holds no state for that key. The core then removes the key
//! from its mapping, so the two key sets stay equal.

use crate::error::InvariantError;

/// Victim selection over a set of keys.
///
/// # Example
///
/// ```
/// use boundcache::policy::lru::LruPolicy;
/// use boundcache::traits::EvictionPolicy;
///
/// let mut lru = LruPolicy::with_capacity(2);
/// lru.on_insert(&"a");
/// lru.on_insert(&"b");
/// lru.on_access(&"a");
///
/// assert_eq!(lru.select_victim(), Some("b"));
/// assert!(!lru.contains(&"b"));
/// ```
pub trait EvictionPolicy<K> {
    /// Starts tracking a key that was just added to the cache.
    fn on_insert(&mut self, key: &K);

    /// Records a read hit or a value replacement for a tracked key.
    fn on_access(&mut self, key: &K);

    /// Picks the next victim and drops all state held for it.
    ///
    /// Returns `None` only when no key is tracked.
    fn select_victim(&mut self) -> Option<K>;

    /// The key [`select_victim`](Self::select_victim) would return next.
    fn peek_victim(&self) -> Option<&K>;

    fn contains(&self, key: &K) -> bool;

    /// Number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Checks the policy's internal structures against each other.
    fn check_invariants(&self) -> Result<(), InvariantError>;
}

/// Thread-safe bounded key-value cache.
///
/// # Example
///
/// ```
/// use boundcache::prelude::*;
///
/// fn warm<C: BoundedCache<u64, String>>(cache: &C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         cache.put(*key, value.to_string());
///     }
/// }
///
/// let cache = Cache::new(PolicyKind::Fifo, 2);
/// warm(&cache, &[(1, "one"), (2, "two"), (3, "three")]);
/// assert_eq!(cache.len(), 2);
/// assert!(!cache.contains(&1));
/// ```
pub trait BoundedCache<K, V> {
    /// Stores `value` under `key`, evicting one entry first if the key is new
    /// and the cache is full. Returns the replaced value, if any.
    fn put(&self, key: K, value: V) -> Option<V>;

    /// Returns a copy of the value for `key`, recording the access.
    fn get(&self, key: &K) -> Option<V>;

    /// Checks presence without recording an access.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;
}
