//! The data structures themselves.
//!
//! # Purpose
//! I wrote these types to learn the classical algorithms behind them by reimplementing them from
//! a textbook (mostly CLRS), rather than to replace anything in [`std::collections`].
//!
//! # Method
//! The [`heap`] module does most of the work. [`linear`] builds stacks and queues on arrays of
//! slots, and a priority queue on top of [`heap::Heap`]. [`render`] draws a heap as a tree.

pub mod error;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linear")]
pub mod linear;
#[cfg(feature = "render")]
pub mod render;
