//! This crate is my attempt at reimplementing the elementary data structures from a textbook: a
//! binary heap, a stack, a queue, a priority queue and a doubly linked list.
//!
//! # Purpose
//! This repo / crate is a learning exercise, with no expectation for it to be used in production.
//! Writing these data structures helps me to internalize the algorithms behind them. The binary
//! heap is the interesting part: restoring the heap property upwards and downwards, building a
//! heap from an arbitrary sequence in linear time, and doing all of that for both min- and
//! max-heaps, optionally ordered on a key derived from each element.
//!
//! # Method
//! The heap exists in two forms. The free functions in [`collections::heap::ops`] work on storage
//! owned by the caller, and take the ordering policy as an argument on every call. The
//! [`Heap`](collections::heap::Heap) type owns its storage and fixes its policy when it is
//! created, so it can't be mixed up between calls.
//!
//! The linear collections follow the textbook closely: a [`Stack`](collections::linear::Stack) is
//! an array with a top pointer, a [`Queue`](collections::linear::Queue) a circular array with
//! head and tail pointers and a [`List`](collections::linear::List) a ring of nodes closed by a
//! sentinel. Their shared empty/full checks live in a single wrapper,
//! [`Bounded`](collections::linear::Bounded).
//!
//! # Error Handling
//! Taking something out of an empty collection, or putting something into a full one, is an
//! ordinary condition, so these methods return [`Result`]s. The errors are small structs (often
//! ZSTs) that implement [`Error`](std::error::Error), with an enum joining them,
//! [`ContainerError`](collections::error::ContainerError), for anyone who wants a single type.
//!
//! Handing a heap primitive an index outside of its storage is a bug in the caller, so that panics
//! instead.
//!
//! # Dependencies
//! `derive_more` removes some very repetitive programming around the error types. `log` is used
//! for some debug output when collections grow. Nothing here installs a logger.
//!
//! # Features
//! - `heap`: [`collections::heap`].
//! - `linear`: [`collections::linear`], which needs `heap` for its priority queue.
//! - `render`: [`collections::render`], for drawing heaps as trees.
//!
//! All of them are enabled by default, through `collections-all`.

// #![warn(missing_docs)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
