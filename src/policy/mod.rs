//! Replacement policies.
//!
//! | Policy | `on_insert`          | `on_access`        | Victim                        |
//! |--------|----------------------|--------------------|-------------------------------|
//! | FIFO   | append               | -                  | earliest inserted             |
//! | LIFO   | append               | -                  | latest inserted               |
//! | LRU    | append               | move to recent end | least recently touched        |
//! | MRU    | append               | move to recent end | most recently touched         |
//! | LFU    | count = 1            | count += 1         | lowest count, oldest on ties  |
//!
//! The set is closed: [`Policy`] is an enum over the five implementations,
//! chosen once from a [`PolicyKind`] when the cache is built. Dispatch is a
//! `match`, with no trait objects involved.

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;

use std::fmt;
use std::hash::Hash;

use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

use fifo::FifoPolicy;
use lfu::LfuPolicy;
use lifo::LifoPolicy;
use lru::LruPolicy;
use mru::MruPolicy;

/// Which replacement policy a cache uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Least recently used.
    Lru,
    /// Most recently used.
    Mru,
    /// Least frequently used.
    Lfu,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Lfu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lifo => "lifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five policies, selected at construction.
#[derive(Debug)]
pub enum Policy<K> {
    Fifo(FifoPolicy<K>),
    Lifo(LifoPolicy<K>),
    Lru(LruPolicy<K>),
    Mru(MruPolicy<K>),
    Lfu(LfuPolicy<K>),
}

macro_rules! dispatch {
    ($self:expr, $policy:ident => $body:expr) => {
        match $self {
            Policy::Fifo($policy) => $body,
            Policy::Lifo($policy) => $body,
            Policy::Lru($policy) => $body,
            Policy::Mru($policy) => $body,
            Policy::Lfu($policy) => $body,
        }
    };
}

impl<K> Policy<K>
where
    K: Clone + Eq + Hash,
{
    /// Builds the policy for `kind`, pre-sized for `capacity` keys.
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Policy::Fifo(FifoPolicy::with_capacity(capacity)),
            PolicyKind::Lifo => Policy::Lifo(LifoPolicy::with_capacity(capacity)),
            PolicyKind::Lru => Policy::Lru(LruPolicy::with_capacity(capacity)),
            PolicyKind::Mru => Policy::Mru(MruPolicy::with_capacity(capacity)),
            PolicyKind::Lfu => Policy::Lfu(LfuPolicy::with_capacity(capacity)),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(_) => PolicyKind::Fifo,
            Policy::Lifo(_) => PolicyKind::Lifo,
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Mru(_) => PolicyKind::Mru,
            Policy::Lfu(_) => PolicyKind::Lfu,
        }
    }

    /// Access count for `key`; `None` unless this is the LFU policy and the
    /// key is tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        match self {
            Policy::Lfu(lfu) => lfu.frequency(key),
            _ => None,
        }
    }
}

impl<K> EvictionPolicy<K> for Policy<K>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn on_insert(&mut self, key: &K) {
        dispatch!(self, p => p.on_insert(key))
    }

    #[inline]
    fn on_access(&mut self, key: &K) {
        dispatch!(self, p => p.on_access(key))
    }

    #[inline]
    fn select_victim(&mut self) -> Option<K> {
        dispatch!(self, p => p.select_victim())
    }

    fn peek_victim(&self) -> Option<&K> {
        dispatch!(self, p => p.peek_victim())
    }

    fn contains(&self, key: &K) -> bool {
        dispatch!(self, p => p.contains(key))
    }

    fn len(&self) -> usize {
        dispatch!(self, p => p.len())
    }

    fn clear(&mut self) {
        dispatch!(self, p => p.clear())
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        dispatch!(self, p => p.check_invariants())
    }
}
