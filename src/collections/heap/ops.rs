//! Free functions operating on heap storage owned by the caller.
//!
//! Storage is any slice (or [`Vec`], for operations that change the length) that represents a
//! complete binary tree by position: the children of index `i` live at `2i + 1` and `2i + 2`, its
//! parent at `(i - 1) / 2`. A slice is a heap under some policy when every parent is
//! [`better_or_equal`](Compare::better_or_equal) to each of its children.
//!
//! Most operations come in three flavours, in the manner of [`slice::sort`], [`slice::sort_by`]
//! and [`slice::sort_by_key`]:
//! - `op` works on a min-heap of [`Ord`] elements,
//! - `op_by` takes any [`Compare`] policy,
//! - `op_by_key` takes a [`Direction`] and a key function.
//!
//! It is up to the caller to use the same policy for every operation on a given heap. Mixing them
//! doesn't cause undefined behaviour, but the result is no longer a heap.
//!
//! # Time Complexity
//! For this analysis of time complexity, variables are defined as follows:
//! - `n`: The number of elements in the storage.
//!
//! | Function | Complexity |
//! |-|-|
//! | `restore_down` | `O(log n)` |
//! | `restore_up` | `O(log n)` |
//! | `heapify` | `O(n)` |
//! | `push` | `O(log n)`* |
//! | `pop` | `O(log n)` |
//! | `peek` | `O(1)` |
//! | `is_heap` | `O(n)` |
//! | `heapsort` | `O(n log n)` |
//!
//! \* Plus the cost of growing the [`Vec`] if it is at capacity.

use std::iter::FusedIterator;

use super::order::{Compare, Direction, Order};
use crate::collections::error::EmptyContainer;
use crate::util::error::check_index;

pub(crate) const fn left(i: usize) -> usize {
    2 * i + 1
}

pub(crate) const fn right(i: usize) -> usize {
    2 * i + 2
}

pub(crate) const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Moves the element at `i` down the heap until it is better than or equal to both of its
/// children, returning the index where it came to rest.
///
/// The subtrees rooted at both children of `i` must already be heaps; only the element at `i` may
/// be out of place. At each step the element is swapped with whichever child is strictly better
/// than it. If both children are equally good, the left one is chosen.
///
/// # Panics
/// Panics if `i` is out of bounds.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::{ops, Order};
/// let mut storage = [9, 1, 2, 3, 4];
/// let rest = ops::restore_down(&mut storage, 0, &Order::min());
/// assert_eq!(storage, [1, 3, 2, 9, 4]);
/// assert_eq!(rest, 3);
/// ```
#[track_caller]
pub fn restore_down<T, C: Compare<T> + ?Sized>(storage: &mut [T], i: usize, order: &C) -> usize {
    check_index(i, storage.len());

    let len = storage.len();
    let mut i = i;

    while left(i) < len {
        let mut best = i;

        if order.strictly_better(&storage[left(i)], &storage[best]) {
            best = left(i);
        }
        if right(i) < len && order.strictly_better(&storage[right(i)], &storage[best]) {
            best = right(i);
        }

        if best == i {
            break;
        }

        storage.swap(i, best);
        i = best;
    }

    i
}

/// Moves the element at `i` up the heap until its parent is better than or equal to it, returning
/// the index where it came to rest.
///
/// Everything except the element at `i` must already satisfy the heap property.
///
/// # Panics
/// Panics if `i` is out of bounds.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::{ops, Order};
/// let mut storage = [1, 3, 2, 9, 0];
/// let rest = ops::restore_up(&mut storage, 4, &Order::min());
/// assert_eq!(storage, [0, 1, 2, 9, 3]);
/// assert_eq!(rest, 0);
/// ```
#[track_caller]
pub fn restore_up<T, C: Compare<T> + ?Sized>(storage: &mut [T], i: usize, order: &C) -> usize {
    check_index(i, storage.len());

    let mut i = i;

    while i > 0 && order.strictly_better(&storage[i], &storage[parent(i)]) {
        storage.swap(i, parent(i));
        i = parent(i);
    }

    i
}

/// Rearranges `storage` into a min-heap.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::ops;
/// let mut storage = [5, 4, 3, 2, 1];
/// ops::heapify(&mut storage);
/// assert!(ops::is_heap(&storage));
/// assert_eq!(storage[0], 1);
/// ```
pub fn heapify<T: Ord>(storage: &mut [T]) {
    heapify_by(storage, &Order::min())
}

/// Rearranges `storage` into a heap under the provided policy.
///
/// Every non-leaf index is visited from the last one back to the root, so both subtrees of each
/// index are already heaps by the time [`restore_down`] runs on it.
pub fn heapify_by<T, C: Compare<T> + ?Sized>(storage: &mut [T], order: &C) {
    log::trace!("heapifying {} elements", storage.len());

    for i in (0..storage.len() / 2).rev() {
        restore_down(storage, i, order);
    }
}

/// Rearranges `storage` into a heap ordered by `key` in the provided direction.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::{ops, Direction};
/// let mut storage: Vec<u32> = (0..20).collect();
/// ops::heapify_by_key(&mut storage, Direction::Max, |x| (x % 7 == 0, *x));
/// assert_eq!(storage[0], 14);
/// ```
pub fn heapify_by_key<T, K, F>(storage: &mut [T], direction: Direction, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heapify_by(storage, &Order::by_key(direction, key))
}

/// Adds `value` to the min-heap in `storage`.
pub fn push<T: Ord>(storage: &mut Vec<T>, value: T) {
    push_by(storage, value, &Order::min())
}

/// Adds `value` to the heap in `storage`, ordered by the provided policy.
///
/// The value is appended as the last leaf and then moved up with [`restore_up`].
pub fn push_by<T, C: Compare<T> + ?Sized>(storage: &mut Vec<T>, value: T, order: &C) {
    storage.push(value);
    let last = storage.len() - 1;
    restore_up(storage, last, order);
}

/// Adds `value` to the heap in `storage`, ordered by `key` in the provided direction.
pub fn push_by_key<T, K, F>(storage: &mut Vec<T>, value: T, direction: Direction, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    push_by(storage, value, &Order::by_key(direction, key))
}

/// Removes and returns the smallest element of the min-heap in `storage`.
///
/// # Errors
/// Returns [`EmptyContainer`] if `storage` is empty, in which case it is left untouched.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::ops;
/// let mut storage = vec![3, 1, 2];
/// ops::heapify(&mut storage);
/// assert_eq!(ops::pop(&mut storage), Ok(1));
/// assert_eq!(ops::pop(&mut storage), Ok(2));
/// assert_eq!(ops::pop(&mut storage), Ok(3));
/// assert!(ops::pop(&mut storage).is_err());
/// ```
pub fn pop<T: Ord>(storage: &mut Vec<T>) -> Result<T, EmptyContainer> {
    pop_by(storage, &Order::min())
}

/// Removes and returns the best element of the heap in `storage`, ordered by the provided policy.
///
/// The last leaf takes the place of the root, which is then moved down with [`restore_down`].
///
/// # Errors
/// Returns [`EmptyContainer`] if `storage` is empty, in which case it is left untouched.
pub fn pop_by<T, C: Compare<T> + ?Sized>(
    storage: &mut Vec<T>,
    order: &C,
) -> Result<T, EmptyContainer> {
    let last = storage.pop().ok_or(EmptyContainer)?;

    if storage.is_empty() {
        return Ok(last);
    }

    let best = std::mem::replace(&mut storage[0], last);
    restore_down(storage, 0, order);
    Ok(best)
}

/// Removes and returns the best element of the heap in `storage`, ordered by `key` in the provided
/// direction.
///
/// # Errors
/// Returns [`EmptyContainer`] if `storage` is empty, in which case it is left untouched.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::{ops, Direction};
/// let key = |x: &u32| (x % 2 == 1, *x);
/// let mut storage = vec![1, 2, 3, 4, 5];
/// ops::heapify_by_key(&mut storage, Direction::Min, key);
/// assert_eq!(ops::pop_by_key(&mut storage, Direction::Min, key), Ok(2));
/// ```
pub fn pop_by_key<T, K, F>(
    storage: &mut Vec<T>,
    direction: Direction,
    key: F,
) -> Result<T, EmptyContainer>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    pop_by(storage, &Order::by_key(direction, key))
}

/// Returns the best element of the heap in `storage` without removing it.
///
/// # Errors
/// Returns [`EmptyContainer`] if `storage` is empty.
pub fn peek<T>(storage: &[T]) -> Result<&T, EmptyContainer> {
    storage.first().ok_or(EmptyContainer)
}

/// Returns true if `storage` is a min-heap.
pub fn is_heap<T: Ord>(storage: &[T]) -> bool {
    is_heap_by(storage, &Order::min())
}

/// Returns true if every parent in `storage` is better than or equal to its children under the
/// provided policy.
pub fn is_heap_by<T, C: Compare<T> + ?Sized>(storage: &[T], order: &C) -> bool {
    parent_child_pairs(storage.len())
        .all(|(p, c)| order.better_or_equal(&storage[p], &storage[c]))
}

/// Returns true if `storage` is a heap ordered by `key` in the provided direction.
pub fn is_heap_by_key<T, K, F>(storage: &[T], direction: Direction, key: F) -> bool
where
    K: Ord,
    F: Fn(&T) -> K,
{
    is_heap_by(storage, &Order::by_key(direction, key))
}

/// Sorts `storage` in ascending order using heapsort.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::ops;
/// let mut values = [4, 1, 3, 5, 2];
/// ops::heapsort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn heapsort<T: Ord>(storage: &mut [T]) {
    heapsort_by(storage, &Order::max())
}

/// Sorts `storage` using heapsort, so that the best element under the provided policy ends up
/// last. Sorting with a max-heap policy gives ascending order, with a min-heap policy descending
/// order.
pub fn heapsort_by<T, C: Compare<T> + ?Sized>(storage: &mut [T], order: &C) {
    heapify_by(storage, order);

    for end in (1..storage.len()).rev() {
        storage.swap(0, end);
        restore_down(&mut storage[..end], 0, order);
    }
}

/// Sorts `storage` in ascending order of `key` using heapsort.
pub fn heapsort_by_key<T, K, F>(storage: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heapsort_by(storage, &Order::by_key(Direction::Max, key))
}

/// Returns an iterator over every `(parent, child)` pair of indices in a heap of `len` elements,
/// in depth-first order starting from the root.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::ops;
/// let pairs: Vec<_> = ops::parent_child_pairs(4).collect();
/// assert_eq!(pairs, [(0, 1), (1, 3), (0, 2)]);
/// ```
pub fn parent_child_pairs(len: usize) -> ParentChildPairs {
    ParentChildPairs {
        len,
        stack: if len > 1 { vec![(0, 1)] } else { Vec::new() },
    }
}

/// An iterator over the `(parent, child)` index pairs of a heap. See [`parent_child_pairs`].
#[derive(Debug, Clone)]
pub struct ParentChildPairs {
    len: usize,
    // Pending pairs, the next one on top.
    stack: Vec<(usize, usize)>,
}

impl Iterator for ParentChildPairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (p, c) = self.stack.pop()?;

        // The sibling comes after the whole subtree of the child.
        if c == left(p) && right(p) < self.len {
            self.stack.push((p, right(p)));
        }
        if left(c) < self.len {
            self.stack.push((c, left(c)));
        }

        Some((p, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len.saturating_sub(1)))
    }
}

impl FusedIterator for ParentChildPairs {}
