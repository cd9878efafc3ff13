//! FIFO (First In, First Out) replacement.
//!
//! Evicts the key that has been in the cache longest. Reads and value
//! replacements do not move a key; only its first insertion counts.
//!
//! ```text
//!   insert A, B, C          get(A)               insert D (full)
//!   oldest ──► newest       order unchanged      A is evicted
//!   [A] [B] [C]             [A] [B] [C]          [B] [C] [D]
//!    ▲
//!    victim
//! ```
//!
//! ## Example
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Cache::new(PolicyKind::Fifo, 2);
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.get(&"A");
//! cache.put("C", 3);
//!
//! assert_eq!(cache.get(&"A"), None);
//! assert_eq!(cache.get(&"B"), Some(2));
//! ```

use std::hash::Hash;

use crate::ds::OrderIndex;
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Insertion-order victim selection.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: OrderIndex<K>,
}

impl<K> FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: OrderIndex::with_capacity(capacity),
        }
    }

    /// Tracked keys, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

impl<K> EvictionPolicy<K> for FifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.order.push_newest(key);
    }

    #[inline]
    fn on_access(&mut self, _key: &K) {}

    #[inline]
    fn select_victim(&mut self) -> Option<K> {
        self.order.pop_oldest()
    }

    fn peek_victim(&self) -> Option<&K> {
        self.order.oldest()
    }

    fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.order.clear();
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.order.check_invariants()
    }
}
