//! LIFO (Last In, First Out) replacement.
//!
//! Evicts the most recently *inserted* key still present. The key whose
//! insertion triggers the eviction is never the victim: the core asks for a
//! victim before the new key is stored.
//!
//! ```text
//!   insert A, B, C          insert D (full)      insert E (full)
//!   bottom ──► top          C is evicted         D is evicted
//!   [A] [B] [C]             [A] [B] [D]          [A] [B] [E]
//!            ▲                       ▲
//!            victim                  victim
//! ```
//!
//! Older keys survive indefinitely, which suits scratch data where the
//! newest insertions are the least likely to be read again.
//!
//! ## Example
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Cache::new(PolicyKind::Lifo, 2);
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.put("C", 3);
//!
//! assert_eq!(cache.get(&"A"), Some(1));
//! assert_eq!(cache.get(&"B"), None);
//! assert_eq!(cache.get(&"C"), Some(3));
//! ```

use std::hash::Hash;

use crate::ds::OrderIndex;
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Reverse-insertion-order victim selection.
#[derive(Debug)]
pub struct LifoPolicy<K> {
    stack: OrderIndex<K>,
}

impl<K> LifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: OrderIndex::with_capacity(capacity),
        }
    }
}

impl<K> EvictionPolicy<K> for LifoPolicy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        self.stack.push_newest(key);
    }

    // Replacing a value keeps the key's stack position.
    #[inline]
    fn on_access(&mut self, _key: &K) {}

    #[inline]
    fn select_victim(&mut self) -> Option<K> {
        self.stack.pop_newest()
    }

    fn peek_victim(&self) -> Option<&K> {
        self.stack.newest()
    }

    fn contains(&self, key: &K) -> bool {
        self.stack.contains(key)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.stack.check_invariants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_most_recent_insertion() {
        let mut lifo = LifoPolicy::with_capacity(3);
        lifo.on_insert(&1);
        lifo.on_insert(&2);
        lifo.on_insert(&3);

        assert_eq!(lifo.select_victim(), Some(3));
        lifo.on_insert(&4);
        assert_eq!(lifo.select_victim(), Some(4));
        assert_eq!(lifo.select_victim(), Some(2));
        assert_eq!(lifo.select_victim(), Some(1));
        assert_eq!(lifo.select_victim(), None);
    }

    #[test]
    fn access_does_not_protect_newest() {
        let mut lifo = LifoPolicy::with_capacity(3);
        lifo.on_insert(&"old");
        lifo.on_insert(&"new");
        lifo.on_access(&"new");
        lifo.on_access(&"old");

        assert_eq!(lifo.peek_victim(), Some(&"new"));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut lifo = LifoPolicy::with_capacity(2);
        lifo.on_insert(&"a");
        lifo.clear();
        assert!(lifo.is_empty());
        assert_eq!(lifo.peek_victim(), None);
        assert!(lifo.check_invariants().is_ok());
    }
}
