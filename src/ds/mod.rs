pub mod intrusive_list;
pub mod lazy_heap;
pub mod order_index;
pub mod slot_arena;

pub use intrusive_list::IntrusiveList;
pub use lazy_heap::LazyMinHeap;
pub use order_index::OrderIndex;
pub use slot_arena::{SlotArena, SlotId};
