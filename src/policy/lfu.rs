//! LFU (Least Frequently Used) replacement.
//!
//! Every tracked key carries an access count: 1 when first stored, +1 for
//! each read hit and each value replacement. The victim is the key with the
//! lowest count; among equal counts, the one inserted earliest.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────┐
//!   │  LazyMinHeap<K, FrequencyScore>                                   │
//!   │                                                                   │
//!   │   scores (authoritative)          heap (min first, may be stale)  │
//!   │   ┌─────┬─────────────────┐       ┌───────────────────────────┐   │
//!   │   │ "B" │ count 1, seq 1  │       │ ("B", 1, 1)   ◄─ victim   │   │
//!   │   │ "C" │ count 1, seq 2  │       │ ("A", 1, 0)   stale       │   │
//!   │   │ "A" │ count 3, seq 0  │       │ ("C", 1, 2)               │   │
//!   │   └─────┴─────────────────┘       │ ("A", 2, 0)   stale       │   │
//!   │                                   │ ("A", 3, 0)               │   │
//!   │                                   └───────────────────────────┘   │
//!   └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The score orders by `(count, seq)`, where `seq` is assigned once per
//! insertion. Ties on count therefore always resolve to the oldest insertion,
//! independent of hash or heap layout. A re-inserted key (after eviction)
//! gets a fresh `seq` and starts over at count 1.
//!
//! ## Operations
//!
//! | Operation       | Time               |
//! |-----------------|--------------------|
//! | `on_insert`     | O(log n)           |
//! | `on_access`     | O(log n) amortized |
//! | `select_victim` | O(log n) amortized |
//! | `peek_victim`   | O(n)               |
//! | `frequency`     | O(1)               |
//!
//! ## Example
//!
//! ```
//! use boundcache::{Cache, PolicyKind};
//!
//! let cache = Cache::new(PolicyKind::Lfu, 2);
//! cache.put("A", 1);
//! cache.put("B", 2);
//! cache.get(&"A");
//! cache.get(&"A");
//! cache.put("C", 3);
//!
//! assert_eq!(cache.get(&"B"), None);
//! assert_eq!(cache.frequency(&"A"), Some(3));
//! ```

use std::hash::Hash;

use crate::ds::LazyMinHeap;
use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Rebuild the heap once it holds this many entries per live key.
const STALE_FACTOR: usize = 4;

/// Heap ordering for LFU: access count first, insertion sequence second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrequencyScore {
    pub count: u64,
    pub seq: u64,
}

/// Lowest-count victim selection with oldest-insertion tie-break.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    heap: LazyMinHeap<K, FrequencyScore>,
    next_seq: u64,
}

impl<K> LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: LazyMinHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Current access count for `key`.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.heap.score_of(key).map(|score| score.count)
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Clone + Eq + Hash,
{
    fn on_insert(&mut self, key: &K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.update(key.clone(), FrequencyScore { count: 1, seq });
    }

    fn on_access(&mut self, key: &K) {
        let Some(&score) = self.heap.score_of(key) else {
            return;
        };
        self.heap.update(
            key.clone(),
            FrequencyScore {
                count: score.count.saturating_add(1),
                ..score
            },
        );
        self.heap.maybe_rebuild(STALE_FACTOR);
    }

    fn select_victim(&mut self) -> Option<K> {
        self.heap.pop_best().map(|(key, _)| key)
    }

    fn peek_victim(&self) -> Option<&K> {
        self.heap.peek_best().map(|(key, _)| key)
    }

    fn contains(&self, key: &K) -> bool {
        self.heap.contains(key)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.heap.check_invariants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod frequency_tracking {
        use super::*;

        #[test]
        fn insert_starts_at_one() {
            let mut lfu = LfuPolicy::with_capacity(2);
            lfu.on_insert(&"a");
            assert_eq!(lfu.frequency(&"a"), Some(1));
            assert_eq!(lfu.frequency(&"b"), None);
        }

        #[test]
        fn each_access_increments() {
            let mut lfu = LfuPolicy::with_capacity(2);
            lfu.on_insert(&"a");
            lfu.on_access(&"a");
            lfu.on_access(&"a");
            assert_eq!(lfu.frequency(&"a"), Some(3));
        }

        #[test]
        fn access_of_untracked_key_creates_nothing() {
            let mut lfu: LfuPolicy<&str> = LfuPolicy::with_capacity(2);
            lfu.on_access(&"ghost");
            assert!(lfu.is_empty());
        }

        #[test]
        fn evicted_key_count_is_dropped() {
            let mut lfu = LfuPolicy::with_capacity(2);
            lfu.on_insert(&"a");
            lfu.on_access(&"a");
            lfu.on_insert(&"b");
            assert_eq!(lfu.select_victim(), Some("b"));
            assert_eq!(lfu.frequency(&"b"), None);

            lfu.on_insert(&"b");
            assert_eq!(lfu.frequency(&"b"), Some(1));
        }
    }

    mod victim_selection {
        use super::*;

        #[test]
        fn lowest_count_loses() {
            let mut lfu = LfuPolicy::with_capacity(3);
            lfu.on_insert(&"a");
            lfu.on_insert(&"b");
            lfu.on_insert(&"c");
            lfu.on_access(&"a");
            lfu.on_access(&"c");

            assert_eq!(lfu.peek_victim(), Some(&"b"));
            assert_eq!(lfu.select_victim(), Some("b"));
        }

        #[test]
        fn ties_go_to_earliest_insertion() {
            let mut lfu = LfuPolicy::with_capacity(3);
            lfu.on_insert(&"a");
            lfu.on_insert(&"b");
            lfu.on_insert(&"c");
            lfu.on_access(&"b");
            lfu.on_access(&"a");

            // a and b both at 2, c at 1.
            assert_eq!(lfu.select_victim(), Some("c"));
            assert_eq!(lfu.select_victim(), Some("a"));
            assert_eq!(lfu.select_victim(), Some("b"));
            assert_eq!(lfu.select_victim(), None);
        }

        #[test]
        fn reinserted_key_is_newest_in_its_tie_group() {
            let mut lfu = LfuPolicy::with_capacity(2);
            lfu.on_insert(&"a");
            lfu.on_insert(&"b");
            assert_eq!(lfu.select_victim(), Some("a"));
            lfu.on_insert(&"a");
            assert_eq!(lfu.select_victim(), Some("b"));
        }

        #[test]
        fn heavy_access_keeps_heap_bounded() {
            let mut lfu = LfuPolicy::with_capacity(4);
            for key in 0..4u32 {
                lfu.on_insert(&key);
            }
            for _ in 0..1_000 {
                lfu.on_access(&0);
            }
            assert!(lfu.heap.heap_len() <= lfu.len() * STALE_FACTOR + 1);
            assert_eq!(lfu.frequency(&0), Some(1_001));
            assert!(lfu.check_invariants().is_ok());
            assert_eq!(lfu.select_victim(), Some(1));
        }
    }
}
