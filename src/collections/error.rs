//! Errors returned by the collections in this crate.
//!
//! Each condition has its own small struct, so that a method which can only fail in one way says
//! exactly that in its signature. [`ContainerError`] joins them for callers that would rather
//! handle a single type.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An element was requested from a collection that doesn't contain any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Container is empty!")
    }
}

impl Error for EmptyContainer {}

/// An element was added to a bounded collection that has already reached its maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullContainer {
    pub max_size: usize,
}

impl Display for FullContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Container is full, it can't hold more than {} elements!", self.max_size)
    }
}

impl Error for FullContainer {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    Empty(EmptyContainer),
    Full(FullContainer),
}
