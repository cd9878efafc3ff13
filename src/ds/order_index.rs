//! Explicit key ordering: an [`IntrusiveList`] of keys plus a `key → SlotId`
//! index.
//!
//! The FIFO, LIFO, LRU and MRU policies all keep their bookkeeping in one of
//! these. The front of the list is the oldest position, the back the newest;
//! what "oldest" means (first inserted or least recently touched) is up to
//! the policy driving it.
//!
//! ```text
//!   index: FxHashMap<K, SlotId>          order: IntrusiveList<K>
//!   ┌─────┬────────┐
//!   │ "a" │  id_0  │──────────►  front ─► [a] ◄──► [c] ◄──► [b] ◄─ back
//!   │ "b" │  id_2  │──────────────────────────────────────────┘
//!   │ "c" │  id_1  │────────────────────────┘
//!   └─────┴────────┘
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::InvariantError;

#[derive(Debug)]
pub struct OrderIndex<K> {
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<K>,
}

impl<K> OrderIndex<K>
where
    K: Clone + Eq + Hash,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Appends `key` at the newest end. A key that is already tracked is
    /// moved there instead of being duplicated.
    pub fn push_newest(&mut self, key: &K) {
        if let Some(&id) = self.index.get(key) {
            self.order.move_to_back(id);
            return;
        }
        let id = self.order.push_back(key.clone());
        self.index.insert(key.clone(), id);
    }

    /// Moves a tracked key to the newest end; returns `false` if untracked.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.order.move_to_back(id),
            None => false,
        }
    }

    pub fn oldest(&self) -> Option<&K> {
        self.order.front()
    }

    pub fn newest(&self) -> Option<&K> {
        self.order.back()
    }

    pub fn pop_oldest(&mut self) -> Option<K> {
        let key = self.order.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    pub fn pop_newest(&mut self) -> Option<K> {
        let key = self.order.pop_back()?;
        self.index.remove(&key);
        Some(key)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Checks that the index and the list describe the same key set, each
    /// key exactly once.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.order.check_links()?;
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "order index has {} keys but order list has {} nodes",
                self.index.len(),
                self.order.len()
            )));
        }
        for (key, &id) in &self.index {
            if self.order.get(id) != Some(key) {
                return Err(InvariantError::new(
                    "order index points at a node holding a different key",
                ));
            }
        }
        Ok(())
    }
}
