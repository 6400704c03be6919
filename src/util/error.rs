use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::util::result::ResultExtension;

/// An index that doesn't refer to an element of the heap storage it was used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for heap storage with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Checks that `index` refers to an element of a collection with `len` elements.
///
/// # Panics
/// Panics with an [`IndexOutOfBounds`] message if it doesn't.
#[track_caller]
pub(crate) fn check_index(index: usize, len: usize) {
    if index >= len {
        Err(IndexOutOfBounds { index, len }).throw()
    }
}

/// A node handle that doesn't refer to a node currently linked into the list it was used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlinkedNode {
    pub index: usize,
}

impl Display for UnlinkedNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node {} isn't linked into this list!", self.index)
    }
}

impl Error for UnlinkedNode {}
