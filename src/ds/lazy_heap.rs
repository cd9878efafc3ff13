//! Min-heap with lazy deletion.
//!
//! `scores` is the source of truth. Every score change pushes a fresh heap
//! entry and leaves the old one behind; [`pop_best`](LazyMinHeap::pop_best)
//! discards entries whose score no longer matches `scores`. When stale
//! entries pile up, [`maybe_rebuild`](LazyMinHeap::maybe_rebuild) rebuilds
//! the heap from `scores`.
//!
//! ```text
//!   scores: {"a": 3, "b": 1}
//!
//!   heap (min first):
//!     ("b", 1)   live
//!     ("a", 1)   stale: scores["a"] is 3
//!     ("a", 2)   stale
//!     ("a", 3)   live
//! ```
//!
//! | Operation       | Time                |
//! |-----------------|---------------------|
//! | `update`        | O(log n)            |
//! | `pop_best`      | amortized O(log n)  |
//! | `peek_best`     | O(n)                |
//! | `score_of`      | O(1)                |
//! | `maybe_rebuild` | O(1) or O(n log n)  |

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::InvariantError;

#[derive(Debug)]
struct HeapEntry<K, S> {
    score: S,
    key: K,
}

impl<K, S: Ord> PartialEq for HeapEntry<K, S> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl<K, S: Ord> Eq for HeapEntry<K, S> {}

impl<K, S: Ord> PartialOrd for HeapEntry<K, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, S: Ord> Ord for HeapEntry<K, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

/// Min-heap keyed by `K`, ordered by `S`.
///
/// Scores are expected to be unique across live keys (the LFU policy folds
/// an insertion sequence number into its score); equal scores pop in an
/// unspecified order.
#[derive(Debug)]
pub struct LazyMinHeap<K, S> {
    scores: FxHashMap<K, S>,
    heap: BinaryHeap<Reverse<HeapEntry<K, S>>>,
}

impl<K, S> LazyMinHeap<K, S>
where
    K: Clone + Eq + Hash,
    S: Clone + Ord,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Heap length including stale entries.
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.scores.contains_key(key)
    }

    pub fn score_of(&self, key: &K) -> Option<&S> {
        self.scores.get(key)
    }

    /// Sets `key`'s score, returning the previous one.
    pub fn update(&mut self, key: K, score: S) -> Option<S> {
        let previous = self.scores.insert(key.clone(), score.clone());
        self.heap.push(Reverse(HeapEntry { score, key }));
        previous
    }

    /// Removes and returns the live entry with the smallest score.
    pub fn pop_best(&mut self) -> Option<(K, S)> {
        loop {
            let Reverse(entry) = self.heap.pop()?;
            match self.scores.get(&entry.key) {
                Some(score) if *score == entry.score => {
                    self.scores.remove(&entry.key);
                    return Some((entry.key, entry.score));
                },
                _ => continue,
            }
        }
    }

    /// The entry `pop_best` would return. Scans `scores`, so this is O(n).
    pub fn peek_best(&self) -> Option<(&K, &S)> {
        self.scores.iter().min_by(|a, b| a.1.cmp(b.1))
    }

    fn rebuild(&mut self) {
        self.heap.clear();
        for (key, score) in &self.scores {
            self.heap.push(Reverse(HeapEntry {
                score: score.clone(),
                key: key.clone(),
            }));
        }
    }

    /// Rebuilds once the heap holds more than `factor` entries per live key.
    pub fn maybe_rebuild(&mut self, factor: usize) {
        let factor = factor.max(1);
        if self.heap.len() > self.scores.len().saturating_mul(factor) {
            self.rebuild();
        }
    }

    pub fn clear(&mut self) {
        self.scores.clear();
        self.heap.clear();
    }

    /// Every live key must still have a heap entry carrying its score.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.heap.len() < self.scores.len() {
            return Err(InvariantError::new(format!(
                "heap holds {} entries for {} live keys",
                self.heap.len(),
                self.scores.len()
            )));
        }
        let live: FxHashSet<&K> = self
            .heap
            .iter()
            .filter(|Reverse(entry)| self.scores.get(&entry.key) == Some(&entry.score))
            .map(|Reverse(entry)| &entry.key)
            .collect();
        let live = live.len();
        if live != self.scores.len() {
            return Err(InvariantError::new(format!(
                "{live} live heap entries for {} keys",
                self.scores.len()
            )));
        }
        Ok(())
    }
}
