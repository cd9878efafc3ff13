//! Doubly linked list whose nodes live in a [`SlotArena`].
//!
//! Nodes are linked by [`SlotId`] rather than by pointer, so the list is
//! entirely safe Rust and a node handle can be stored in a side index for
//! O(1) unlink and move-to-back.
//!
//! ```text
//!   front (oldest)                                   back (newest)
//!   head ─► [id_0] ◄──► [id_3] ◄──► [id_1] ◄──► [id_2] ◄── tail
//! ```
//!
//! | Operation      | Time |
//! |----------------|------|
//! | `push_back`    | O(1) |
//! | `pop_front`    | O(1) |
//! | `pop_back`     | O(1) |
//! | `remove`       | O(1) |
//! | `move_to_back` | O(1) |
//! | `iter`         | O(n) |

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Arena-backed doubly linked list.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Value at the front (oldest end).
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Value at the back (newest end).
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Appends `value` at the back and returns its handle.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.arena.get_mut(tail) {
                    node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks `id` and frees its slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves `id` to the back; returns `false` if `id` is not in the list.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.tail == Some(id) {
            return true;
        }
        self.unlink(id);
        self.link_back(id);
        true
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Walks the links and checks them against the arena.
    pub fn check_links(&self) -> Result<(), InvariantError> {
        if self.head.is_none() != self.tail.is_none() {
            return Err(InvariantError::new("list head and tail disagree on emptiness"));
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new("list links to a freed slot"))?;
            if node.prev != prev {
                return Err(InvariantError::new("list prev link is broken"));
            }
            count += 1;
            if count > self.arena.len() {
                return Err(InvariantError::new("list contains a cycle"));
            }
            prev = Some(id);
            current = node.next;
        }

        if prev != self.tail {
            return Err(InvariantError::new("list tail is not the last linked node"));
        }
        if count != self.arena.len() {
            return Err(InvariantError::new(format!(
                "list links {count} nodes but arena holds {}",
                self.arena.len()
            )));
        }
        Ok(())
    }

    fn unlink(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }
        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        let node = self.arena.get_mut(id)?;
        node.prev = None;
        node.next = None;
        Some(())
    }

    fn link_back(&mut self, id: SlotId) {
        let old_tail = self.tail;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = old_tail;
            node.next = None;
        } else {
            return;
        }
        match old_tail {
            Some(tail) => {
                if let Some(tail_node) = self.arena.get_mut(tail) {
                    tail_node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }
}

pub struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Copy>(list: &IntrusiveList<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_back_keeps_arrival_order() {
        let mut list = IntrusiveList::with_capacity(4);
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn pop_from_both_ends() {
        let mut list = IntrusiveList::with_capacity(4);
        list.push_back("a");
        list.push_back("b");
        list.push_back("c");

        assert_eq!(list.pop_front(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn move_to_back_from_every_position() {
        let mut list = IntrusiveList::with_capacity(4);
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert!(list.move_to_back(a));
        assert_eq!(values(&list), vec!["b", "c", "a"]);

        assert!(list.move_to_back(c));
        assert_eq!(values(&list), vec!["b", "a", "c"]);

        // Already at the back.
        assert!(list.move_to_back(c));
        assert_eq!(values(&list), vec!["b", "a", "c"]);

        assert_eq!(list.get(b), Some(&"b"));
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn remove_middle_and_ends() {
        let mut list = IntrusiveList::with_capacity(4);
        let a = list.push_back("a");
        let b = list.push_back("b");
        let c = list.push_back("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(values(&list), vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"c"));

        assert_eq!(list.remove(c), Some("c"));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(!list.move_to_back(c));
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn freed_slots_are_reused_without_breaking_links() {
        let mut list = IntrusiveList::with_capacity(4);
        let a = list.push_back(10);
        list.push_back(20);
        list.remove(a);
        let d = list.push_back(30);
        assert_eq!(d.index(), a.index());
        assert_eq!(values(&list), vec![20, 30]);
        assert!(list.check_links().is_ok());
    }

    #[test]
    fn clear_resets_state() {
        let mut list = IntrusiveList::with_capacity(4);
        list.push_back(1);
        list.push_back(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.check_links().is_ok());
    }
}
