use std::cmp;
use std::iter;

/// The number of slots allocated for a collection created without a maximum size.
pub const DEFAULT_ARR_SIZE: usize = 8;

/// The most slots a bounded collection allocates up front. Collections with a larger maximum size
/// start with this many and grow like unbounded ones.
pub const MAX_PREALLOCATED: usize = 1 << 16;

const MIN_SLOTS: usize = 2;
const GROWTH_FACTOR: usize = 2;

/// A fixed number of slots, each either holding an item or empty. This is the "array" that the
/// textbook versions of the linear collections are written against; growing one means allocating
/// a larger array and moving every item across.
pub(crate) type Slots<T> = Box<[Option<T>]>;

/// Allocates `count` empty slots.
pub(crate) fn empty<T>(count: usize) -> Slots<T> {
    iter::repeat_with(|| None).take(count).collect()
}

/// Returns the number of slots to grow to from `current`.
pub(crate) fn grown(current: usize) -> usize {
    cmp::max(current.saturating_mul(GROWTH_FACTOR), MIN_SLOTS)
}

/// Returns the number of slots to allocate up front for a collection that needs `count` slots to
/// reach its maximum size.
pub(crate) fn preallocated(count: usize) -> usize {
    cmp::min(count, MAX_PREALLOCATED)
}
