use std::fmt::{self, Debug, Formatter};

use super::container::{Bounded, Container};
use crate::collections::error::{EmptyContainer, FullContainer};
use crate::collections::heap::{Compare, Heap};

/// A queue which hands out items in order of priority, lowest value first. See [`HeapQueue`] for
/// the underlying container.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::linear::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.push("low", 5).unwrap();
/// queue.push("high", 1).unwrap();
/// queue.push("medium", 3).unwrap();
/// assert_eq!(queue.pop(), Ok("high"));
/// assert_eq!(queue.pop(), Ok("medium"));
/// assert_eq!(queue.pop(), Ok("low"));
/// ```
pub type PriorityQueue<T, P = i64> = Bounded<HeapQueue<T, P>>;

/// An item waiting in a [`HeapQueue`], with the insertion number used to keep equal priorities in
/// order.
#[derive(Debug, Clone)]
struct Entry<T, P> {
    seq: u64,
    pair: (P, T),
}

/// Orders entries by priority alone, or by priority then insertion number when stable.
#[derive(Debug, Clone, Copy)]
struct EntryOrder {
    stable: bool,
}

impl<T, P: Ord> Compare<Entry<T, P>> for EntryOrder {
    fn better_or_equal(&self, a: &Entry<T, P>, b: &Entry<T, P>) -> bool {
        if self.stable {
            (&a.pair.0, a.seq) <= (&b.pair.0, b.seq)
        } else {
            a.pair.0 <= b.pair.0
        }
    }
}

/// A priority queue built on a min-[`Heap`] of `(priority, item)` pairs.
///
/// Only priorities are ever compared, so items don't need to implement [`Ord`]. A stable queue
/// (the default) returns items with equal priorities in the order they were inserted. An unstable
/// one makes no such promise.
///
/// As a [`Container`], a HeapQueue takes and returns `(priority, item)` pairs.
pub struct HeapQueue<T, P = i64> {
    heap: Heap<Entry<T, P>, EntryOrder>,
    counter: u64,
}

impl<T, P: Ord> HeapQueue<T, P> {
    /// Creates an empty, stable queue.
    pub fn new() -> HeapQueue<T, P> {
        HeapQueue::with_stability(true)
    }

    /// Creates an empty queue which breaks ties between equal priorities by insertion order if
    /// `stable` is true.
    pub fn with_stability(stable: bool) -> HeapQueue<T, P> {
        HeapQueue {
            heap: Heap::with_order([], EntryOrder { stable }),
            counter: 0,
        }
    }

    /// Returns true if items with equal priorities come out in insertion order.
    pub fn is_stable(&self) -> bool {
        self.heap.order().stable
    }

    /// Returns the item with the lowest priority value, along with that priority.
    pub fn first(&self) -> Option<(&P, &T)> {
        self.heap.peek().ok().map(|e| (&e.pair.0, &e.pair.1))
    }
}

impl<T, P: Ord> Container<(P, T)> for HeapQueue<T, P> {
    fn size(&self) -> usize {
        self.heap.size()
    }

    fn insert(&mut self, pair: (P, T)) {
        let seq = self.counter;
        self.counter += 1;
        self.heap.push(Entry { seq, pair });
    }

    fn remove(&mut self) -> Option<(P, T)> {
        self.heap.pop().ok().map(|e| e.pair)
    }

    fn to_vec(&self) -> Vec<(P, T)>
    where
        (P, T): Clone,
    {
        self.heap.iter().map(|e| e.pair.clone()).collect()
    }
}

impl<T, P: Ord> Default for HeapQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P: Debug> Debug for HeapQueue<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapQueue")
            .field("entries", &self.heap.iter().map(|e| &e.pair).collect::<Vec<_>>())
            .field("stable", &self.heap.order().stable)
            .finish()
    }
}

impl<T, P: Ord> Bounded<HeapQueue<T, P>> {
    /// Creates an empty, unbounded and stable priority queue.
    pub fn new() -> PriorityQueue<T, P> {
        Bounded::wrap(HeapQueue::new(), None)
    }

    /// Creates an empty priority queue that can hold at most `max_size` items (if provided), which
    /// breaks ties between equal priorities by insertion order if `stable` is true.
    pub fn with_options(max_size: Option<usize>, stable: bool) -> PriorityQueue<T, P> {
        Bounded::wrap(HeapQueue::with_stability(stable), max_size)
    }

    /// Creates an empty, stable priority queue that can hold at most `max_size` items.
    pub fn bounded(max_size: usize) -> PriorityQueue<T, P> {
        PriorityQueue::with_options(Some(max_size), true)
    }

    /// Adds `item` to the queue with the provided priority. Lower values come out first.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the queue has reached its maximum size.
    pub fn push(&mut self, item: T, priority: P) -> Result<(), FullContainer> {
        self.put((priority, item))
    }

    /// Removes the item with the lowest priority value.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.get().map(|(_, item): (P, T)| item)
    }

    /// Returns the item with the lowest priority value without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.inner().first().map(|(_, item)| item).ok_or(EmptyContainer)
    }
}
