use std::fmt::{self, Debug, Display, Formatter};
use std::slice;

use super::ops;
use super::order::{ByKey, Compare, Direction, Identity, Order};
use crate::collections::error::EmptyContainer;

/// A binary heap which owns both its elements and its ordering policy.
///
/// The policy is fixed when the heap is created, so it can't be forgotten (or changed) between
/// calls the way it can with the free functions in [`ops`]. A heap ordered differently is a
/// different heap, so create a new one instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the Heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `with_order` | `O(n)` |
/// | `push` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `peek` | `O(1)` |
/// | `size` | `O(1)` |
/// | `is_valid` | `O(n)` |
/// | `into_sorted_vec` | `O(n log n)` |
///
/// \* Plus the cost of growing the storage if it is at capacity.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::{Direction, Heap};
/// let mut heap = Heap::by_key(1..=5, Direction::Min, |x| (x % 2 == 1, *x));
/// assert_eq!(heap.pop(), Ok(2));
///
/// let mut heap = Heap::by_key(0..20, Direction::Max, |x| (x % 7 == 0, *x));
/// assert_eq!(heap.pop(), Ok(14));
/// ```
#[derive(Clone)]
pub struct Heap<T, C = Order<Identity>> {
    storage: Vec<T>,
    order: C,
}

impl<T: Ord> Heap<T> {
    /// Creates a new, empty min-heap.
    ///
    /// # Examples
    /// ```
    /// # use elementary_structures::collections::heap::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    pub const fn new() -> Heap<T> {
        Heap {
            storage: Vec::new(),
            order: Order::min(),
        }
    }

    /// Creates a new, empty max-heap.
    pub const fn new_max() -> Heap<T> {
        Heap {
            storage: Vec::new(),
            order: Order::max(),
        }
    }

    /// Creates a heap containing the provided values, ordered in the provided direction. Passing
    /// `true.into()` for `direction` gives a min-heap.
    pub fn with_direction<I>(values: I, direction: Direction) -> Heap<T>
    where
        I: IntoIterator<Item = T>,
    {
        Heap::with_order(values, Order::new(direction))
    }
}

impl<T, K, F> Heap<T, Order<ByKey<F>>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    /// Creates a heap containing the provided values, ordered on the result of `key` in the
    /// provided direction.
    pub fn by_key<I>(values: I, direction: Direction, key: F) -> Heap<T, Order<ByKey<F>>>
    where
        I: IntoIterator<Item = T>,
    {
        Heap::with_order(values, Order::by_key(direction, key))
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Creates a heap containing the provided values, ordered by `order`. The values are
    /// heapified in `O(n)`.
    pub fn with_order<I>(values: I, order: C) -> Heap<T, C>
    where
        I: IntoIterator<Item = T>,
    {
        let mut storage: Vec<T> = values.into_iter().collect();
        ops::heapify_by(&mut storage, &order);
        log::debug!("built heap of {} elements", storage.len());

        Heap {
            storage,
            order,
        }
    }

    /// Adds `value` to the heap.
    pub fn push(&mut self, value: T) {
        ops::push_by(&mut self.storage, value, &self.order);
    }

    /// Removes and returns the best element in the heap: the smallest for a min-heap, the largest
    /// for a max-heap.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the heap is empty, leaving it unchanged.
    ///
    /// # Examples
    /// ```
    /// # use elementary_structures::collections::heap::Heap;
    /// let mut heap: Heap<_> = [5, 3, 8].into_iter().collect();
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Ok(5));
    /// assert_eq!(heap.pop(), Ok(8));
    /// assert!(heap.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        ops::pop_by(&mut self.storage, &self.order)
    }

    /// Returns true if the heap property holds for every parent-child pair. This is always the
    /// case unless the policy isn't a total order.
    pub fn is_valid(&self) -> bool {
        ops::is_heap_by(&self.storage, &self.order)
    }

    /// Consumes the heap, returning its elements in the order they would be popped.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.storage.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }
}

impl<T, C> Heap<T, C> {
    /// Returns the best element in the heap without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        ops::peek(&self.storage)
    }

    /// Returns the number of elements in the heap.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of elements in the heap. The same as [`size`](Heap::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of levels in the tree the heap represents: `floor(log2(n)) + 1`, or 0
    /// for an empty heap.
    ///
    /// # Examples
    /// ```
    /// # use elementary_structures::collections::heap::Heap;
    /// let heap: Heap<_> = (0..7).collect();
    /// assert_eq!(heap.height(), 3);
    /// let heap: Heap<_> = (0..8).collect();
    /// assert_eq!(heap.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        match self.storage.len() {
            0 => 0,
            n => n.ilog2() as usize + 1,
        }
    }

    /// Returns the ordering policy of the heap.
    pub const fn order(&self) -> &C {
        &self.order
    }

    /// Returns the elements of the heap in storage order, the root first.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Returns an iterator over the elements of the heap in storage order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Consumes the heap, returning its storage as is.
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    fn from(value: Vec<T>) -> Self {
        Heap::with_order(value, Order::min())
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::with_order(iter, Order::min())
    }
}

impl<T, C: Compare<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug, C> Debug for Heap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("storage", &self.storage)
            .field("len", &self.storage.len())
            .finish_non_exhaustive()
    }
}

impl<T: Debug, C> Display for Heap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Heap")?;
        f.debug_list().entries(self.storage.iter()).finish()
    }
}
