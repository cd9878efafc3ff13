//! MRU (Most Recently Used) replacement.
//!
//! Same recency track as LRU, opposite end: the victim is the key touched
//! last. That suits cyclic scans where the key just read is the one needed
//! furthest in the future.
//!
//! ```text
//!        least recent                      most recent
//!   [A]   ◄──►   [C]   ◄──►   [B]
//!                              ▲ victim (just read)
//! ```
//!
//! The key being inserted is never its own victim: the core selects the
//! victim before storing the new key.
//!
//! ## Example
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Cache::new(PolicyKind::Mru, 2);
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.get(&"B");
//! cache.put("C", 3);
//!
//! assert_eq!(cache.get(&"B"), None);
//! assert_eq!(cache.get(&"A"), Some(1));
//! assert_eq!(cache.get(&"C"), Some(3));
//! ```

use std::hash::Hash;

use crate::ds::OrderIndex;
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Most-recently-touched victim selection.
#[derive(Debug)]
pub struct MruPolicy<K> {
    recency: OrderIndex<K>,
}

impl<K> MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: OrderIndex::with_capacity(capacity),
        }
    }
}

impl<K> EvictionPolicy<K> for MruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.recency.push_newest(key);
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        self.recency.touch(key);
    }

    #[inline]
    fn select_victim(&mut self) -> Option<K> {
        self.recency.pop_newest()
    }

    fn peek_victim(&self) -> Option<&K> {
        self.recency.newest()
    }

    fn contains(&self, key: &K) -> bool {
        self.recency.contains(key)
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.recency.check_invariants()
    }
}
