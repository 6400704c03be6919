//! Binary heaps, as free functions over caller-owned storage ([`ops`]) and as a [`Heap`] type that
//! owns its storage and ordering policy.
//!
//! Both flavours are ordered by a [`Compare`] policy, usually an [`Order`]: a [`Direction`] (min or
//! max) with an optional key projection applied to elements before they are compared.
#![warn(missing_docs)]

mod heap;
pub mod ops;
pub mod order;

#[doc(inline)]
pub use heap::Heap;
#[doc(inline)]
pub use order::{ByKey, Compare, Direction, Identity, Order};
