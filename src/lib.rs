//! boundcache: a bounded, thread-safe key-value cache with pluggable
//! replacement policies.
//!
//! A [`Cache`] holds at most `capacity` entries. When a new key arrives at
//! a full cache, exactly one entry is evicted, chosen by the policy fixed at
//! construction:
//!
//! | [`PolicyKind`] | Evicts                                           |
//! |----------------|--------------------------------------------------|
//! | `Fifo`         | the oldest inserted key                          |
//! | `Lifo`         | the most recently inserted key                   |
//! | `Lru`          | the least recently used key                      |
//! | `Mru`          | the most recently used key                       |
//! | `Lfu`          | the least frequently used key, oldest on ties    |
//!
//! Each eviction emits a `DISCARD` event on the `boundcache::evict` tracing
//! target and reaches the optional [`EvictionListener`](listener::EvictionListener).
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Cache::new(PolicyKind::Lfu, 2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//! assert!(!cache.contains(&"b"));
//! ```

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod listener;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use builder::CacheBuilder;
pub use cache::Cache;
pub use error::{ConfigError, InvariantError};
pub use listener::EvictionCause;
pub use policy::PolicyKind;
