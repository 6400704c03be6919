//! Linear collections: [`Stack`], [`Queue`], [`PriorityQueue`] and [`List`].
//!
//! # Method
//! Each collection is split in two. A [`Container`] implements the primitive insert and remove
//! operations in the style of the textbook, on an array of slots, a heap or linked nodes.
//! [`Bounded`] wraps any Container and adds the checks shared by all of them: nothing can be taken
//! from an empty container and nothing added to a full one. The public types are aliases for the
//! wrapped versions, with the usual names (`push`/`pop`, `enqueue`/`dequeue`) defined on top.

mod container;
pub mod linked_list;
mod priority_queue;
mod queue;
mod slots;
mod stack;
mod tests;

#[doc(inline)]
pub use container::{Bounded, Container};
#[doc(inline)]
pub use linked_list::{LinkedList, List, NodeRef};
#[doc(inline)]
pub use priority_queue::{HeapQueue, PriorityQueue};
#[doc(inline)]
pub use queue::{CircularQueue, Queue};
pub use slots::{DEFAULT_ARR_SIZE, MAX_PREALLOCATED};
#[doc(inline)]
pub use stack::{ArrayStack, Stack};
