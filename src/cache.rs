//! Bounded, thread-safe cache.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Cache<K, V>                                                             │
//! │                                                                         │
//! │   kind, capacity (immutable)        listener: Option<Box<dyn ...>>      │
//! │                                                                         │
//! │   inner: parking_lot::Mutex<CacheCore<K, V>>                            │
//! │   ┌─────────────────────────────────────────────────────────────────┐   │
//! │   │  map: FxHashMap<K, V>              policy: Policy<K>            │   │
//! │   │  ┌──────┬───────┐                  ┌────────────────────────┐   │   │
//! │   │  │ key  │ value │  same key set    │ FIFO / LIFO / LRU /    │   │   │
//! │   │  │ "a"  │  v1   │ ◄──────────────► │ MRU / LFU bookkeeping  │   │   │
//! │   │  │ "b"  │  v2   │                  └────────────────────────┘   │   │
//! │   │  └──────┴───────┘                                               │   │
//! │   └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Put Flow
//!
//! ```text
//!   put(key, value):
//!     lock
//!       key present?  ── yes ──► replace value, policy.on_access(key)
//!           │ no
//!           ▼
//!       len == capacity? ── yes ──► victim = policy.select_victim()
//!           │                        map.remove(victim)
//!           ▼
//!       map.insert(key, value), policy.on_insert(key)
//!     unlock
//!     victim? ──► DISCARD event + listener
//! ```
//!
//! ## Thread Safety
//!
//! One `parking_lot::Mutex` guards the map and the policy together, so
//! every `put`/`get` is a single critical section and calls are
//! linearizable. `get` takes the same exclusive lock because LRU, MRU and
//! LFU update their bookkeeping on reads. The eviction log event and the
//! listener run after the lock is released.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Arc::new(Cache::new(PolicyKind::Lru, 64));
//! let handles: Vec<_> = (0..4u64)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 cache.put(t * 1_000 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 64);
//! ```

use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{ConfigError, InvariantError};
use crate::listener::{EvictionCause, EvictionListener};
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::policy::{Policy, PolicyKind};
use crate::traits::{BoundedCache, EvictionPolicy};

/// Result of a `put` against the core.
struct PutOutcome<K, V> {
    replaced: Option<V>,
    evicted: Option<(K, V)>,
}

/// Mapping plus policy state. Only ever touched with the cache lock held.
struct CacheCore<K, V> {
    map: FxHashMap<K, V>,
    policy: Policy<K>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
}

impl<K, V> CacheCore<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn new(kind: PolicyKind, capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            policy: Policy::new(kind, capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
        }
    }

    fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        if let Some(slot) = self.map.get_mut(&key) {
            let replaced = std::mem::replace(slot, value);
            self.policy.on_access(&key);
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            self.debug_check_sizes();
            return PutOutcome {
                replaced: Some(replaced),
                evicted: None,
            };
        }

        let evicted = self.evict_if_full();
        self.policy.on_insert(&key);
        self.map.insert(key, value);
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.debug_check_sizes();
        PutOutcome {
            replaced: None,
            evicted,
        }
    }

    /// Makes room for one new key.
    fn evict_if_full(&mut self) -> Option<(K, V)> {
        while self.map.len() >= self.capacity {
            let Some(victim) = self.policy.select_victim() else {
                debug_assert!(false, "cache is full but the policy tracks no keys");
                return None;
            };
            match self.map.remove(&victim) {
                Some(value) => {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_eviction();
                    return Some((victim, value));
                },
                None => debug_assert!(false, "policy chose a key missing from the map"),
            }
        }
        None
    }

    fn get(&mut self, key: &K) -> Option<V> {
        match self.map.get(key) {
            Some(value) => {
                let value = value.clone();
                self.policy.on_access(key);
                #[cfg(feature = "metrics")]
                self.metrics.record_get_hit();
                Some(value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                None
            },
        }
    }

    fn clear(&mut self) -> Vec<(K, V)> {
        self.policy.clear();
        let drained = self.map.drain().collect();
        self.debug_check_sizes();
        drained
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.policy.check_invariants()?;
        if self.map.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.map.len(),
                self.capacity
            )));
        }
        if self.map.len() != self.policy.len() {
            return Err(InvariantError::new(format!(
                "map holds {} keys but policy tracks {}",
                self.map.len(),
                self.policy.len()
            )));
        }
        if self.map.keys().any(|key| !self.policy.contains(key)) {
            return Err(InvariantError::new("mapped key missing from policy state"));
        }
        Ok(())
    }

    #[inline]
    fn debug_check_sizes(&self) {
        debug_assert_eq!(
            self.map.len(),
            self.policy.len(),
            "map and policy tracked different key counts"
        );
        debug_assert!(self.map.len() <= self.capacity, "capacity exceeded");
    }
}

/// Bounded key-value cache with a construction-time replacement policy.
///
/// At most `capacity` entries are held. Storing a new key into a full cache
/// first evicts exactly one entry, chosen by the policy; each eviction emits
/// a `DISCARD` debug event on the `boundcache::evict` tracing target and is
/// passed to the eviction listener, if one was configured.
///
/// # Type Parameters
///
/// - `K`: `Clone + Eq + Hash + Debug` (`Debug` for the eviction event)
/// - `V`: `Clone`; [`get`](Self::get) returns a clone. Wrap large values in
///   `Arc` to make that cheap.
///
/// # Example
///
/// ```
/// use boundcache::{Cache, PolicyKind};
///
/// let cache = Cache::new(PolicyKind::Lru, 2);
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.put("a", 10), Some(1));
/// cache.put("c", 3);
///
/// assert_eq!(cache.len(), 2);
/// assert_eq!(cache.get(&"b"), None);
/// ```
pub struct Cache<K, V> {
    inner: Mutex<CacheCore<K, V>>,
    kind: PolicyKind,
    capacity: usize,
    listener: Option<Box<dyn EvictionListener<K, V>>>,
}

impl<K, V> Cache<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use boundcache::{Cache, PolicyKind};
    ///
    /// let cache = Cache::<String, u32>::try_new(PolicyKind::Lfu, 100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(Cache::<String, u32>::try_new(PolicyKind::Lfu, 0).is_err());
    /// ```
    pub fn try_new(kind: PolicyKind, capacity: usize) -> Result<Self, ConfigError> {
        Self::with_listener(kind, capacity, None)
    }

    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for a
    /// fallible constructor.
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        match Self::try_new(kind, capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    pub(crate) fn with_listener(
        kind: PolicyKind,
        capacity: usize,
        listener: Option<Box<dyn EvictionListener<K, V>>>,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than 0"));
        }
        trace!(capacity, policy = %kind, "cache created");
        Ok(Self {
            inner: Mutex::new(CacheCore::new(kind, capacity)),
            kind,
            capacity,
            listener,
        })
    }

    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// - Existing key: the value is replaced in place and the policy records
    ///   a touch. Never evicts.
    /// - New key, cache full: the policy's victim is evicted first.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let outcome = self.inner.lock().put(key, value);
        if let Some((victim, value)) = outcome.evicted {
            self.notify(victim, value, EvictionCause::Capacity);
        }
        outcome.replaced
    }

    /// [`put`](Self::put) for callers holding optional arguments: a `None`
    /// key or value leaves the cache untouched.
    ///
    /// ```
    /// use boundcache::{Cache, PolicyKind};
    ///
    /// let cache = Cache::new(PolicyKind::Fifo, 2);
    /// cache.put_opt(None, Some(1));
    /// cache.put_opt(Some("a"), None);
    /// assert!(cache.is_empty());
    /// ```
    pub fn put_opt(&self, key: Option<K>, value: Option<V>) -> Option<V> {
        let (Some(key), Some(value)) = (key, value) else {
            return None;
        };
        self.put(key, value)
    }

    /// Returns a clone of the value for `key`, recording the access with
    /// the policy.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key)
    }

    /// [`get`](Self::get) for an optional key; `None` returns `None`.
    pub fn get_opt(&self, key: Option<&K>) -> Option<V> {
        key.and_then(|key| self.get(key))
    }

    /// Reads a value without recording an access.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.inner.lock().map.get(key).cloned()
    }

    /// Replaces the value of an existing key without touching policy state.
    ///
    /// Unlike [`put`](Self::put) this never inserts, never evicts, and
    /// leaves recency and frequency as they were. Returns the old value, or
    /// `None` (dropping `value`) if `key` is absent.
    ///
    /// ```
    /// use boundcache::{Cache, PolicyKind};
    ///
    /// let cache = Cache::new(PolicyKind::Lfu, 4);
    /// cache.put("a", 1);
    /// assert_eq!(cache.update(&"a", 2), Some(1));
    /// assert_eq!(cache.frequency(&"a"), Some(1));
    /// assert_eq!(cache.update(&"b", 3), None);
    /// assert!(!cache.contains(&"b"));
    /// ```
    pub fn update(&self, key: &K, value: V) -> Option<V> {
        let mut core = self.inner.lock();
        core.map
            .get_mut(key)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Like [`get`](Self::get), also returning the key's access count after
    /// this access. The count is 0 for a miss and for non-LFU caches.
    pub fn get_with_frequency(&self, key: &K) -> (Option<V>, u64) {
        let mut core = self.inner.lock();
        let value = core.get(key);
        let count = core.policy.frequency(key).unwrap_or(0);
        (value, count)
    }

    /// LFU access count for `key`; `None` if absent or not an LFU cache.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.lock().policy.frequency(key)
    }

    /// The key the next capacity eviction would remove.
    pub fn peek_victim(&self) -> Option<K> {
        self.inner.lock().policy.peek_victim().cloned()
    }

    /// Checks presence without recording an access.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.kind
    }

    /// Drops every entry. Each one is passed to the eviction listener with
    /// [`EvictionCause::Cleared`].
    pub fn clear(&self) {
        let drained = self.inner.lock().clear();
        if let Some(listener) = &self.listener {
            for (key, value) in drained {
                listener.on_evict(&key, value, EvictionCause::Cleared);
            }
        }
    }

    /// Verifies that the key mapping and the policy state agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        let core = self.inner.lock();
        core.metrics.snapshot(core.map.len(), self.capacity)
    }

    fn notify(&self, key: K, value: V, cause: EvictionCause) {
        debug!(target: "boundcache::evict", key = ?key, policy = %self.kind, "DISCARD");
        if let Some(listener) = &self.listener {
            listener.on_evict(&key, value, cause);
        }
    }
}

impl<K, V> BoundedCache<K, V> for Cache<K, V>
where
    K: Clone + Eq + Hash + fmt::Debug,
    V: Clone,
{
    #[inline]
    fn put(&self, key: K, value: V) -> Option<V> {
        Cache::put(self, key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<V> {
        Cache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.kind)
            .field("capacity", &self.capacity)
            .field("len", &self.inner.lock().map.len())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
