//! LRU (Least Recently Used) replacement.
//!
//! Keeps keys in touch order. Insertions, read hits and value replacements
//! all move a key to the most-recent end; the victim is the key at the
//! least-recent end.
//!
//! ```text
//!        least recent                      most recent
//!   ┌──────────────────────────────────────────────────┐
//!   │   [B]   ◄──►   [C]   ◄──►   [A]                  │
//!   └──────────────────────────────────────────────────┘
//!     ▲ victim                      ▲ get(A) moved it here
//! ```
//!
//! Both ends and any interior node are reachable in O(1): the recency track
//! is an arena-backed doubly linked list with a `key → SlotId` index.
//!
//! ## Example
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Cache::new(PolicyKind::Lru, 2);
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.get(&"A");
//! cache.put("C", 3);
//!
//! assert_eq!(cache.get(&"B"), None);
//! assert_eq!(cache.get(&"A"), Some(1));
//! ```

use std::hash::Hash;

use crate::ds::OrderIndex;
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Least-recently-touched victim selection.
#[derive(Debug)]
pub struct LruPolicy<K> {
    recency: OrderIndex<K>,
}

impl<K> LruPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recency: OrderIndex::with_capacity(capacity),
        }
    }

    /// Tracked keys from least to most recently touched.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.recency.iter()
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
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
        self.recency.pop_oldest()
    }

    fn peek_victim(&self) -> Option<&K> {
        self.recency.oldest()
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
