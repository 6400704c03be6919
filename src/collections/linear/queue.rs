use std::fmt::{self, Debug, Formatter};

use super::container::{Bounded, Container};
use super::slots::{self, DEFAULT_ARR_SIZE, Slots};
use crate::collections::error::{EmptyContainer, FullContainer};

/// A first-in first-out queue. See [`CircularQueue`] for the underlying container.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::linear::Queue;
/// let mut queue = Queue::new();
/// queue.enqueue("first").unwrap();
/// queue.enqueue("second").unwrap();
/// assert_eq!(queue.dequeue(), Ok("first"));
/// assert_eq!(queue.dequeue(), Ok("second"));
/// assert!(queue.dequeue().is_err());
/// ```
pub type Queue<T> = Bounded<CircularQueue<T>>;

/// A queue stored in a circular array of slots.
///
/// `head` is the slot of the oldest item and `tail` the slot the next item will be written to,
/// both wrapping around the end of the array. One slot is always left free, so that `head == tail`
/// only when the queue is empty. When an insert would fill that last slot, the items are moved, in
/// order, to the start of an array twice the size.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)` |
/// | `size` | `O(1)` |
///
/// \* If the array is full, `insert` has to move all `n` items into a new one.
pub struct CircularQueue<T> {
    slots: Slots<T>,
    head: usize,
    tail: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with [`DEFAULT_ARR_SIZE`] slots.
    pub fn new() -> CircularQueue<T> {
        CircularQueue::with_slots(DEFAULT_ARR_SIZE)
    }

    /// Creates an empty queue with `count` slots, so it can hold `count - 1` items before growing.
    /// At least one slot is always allocated.
    pub fn with_slots(count: usize) -> CircularQueue<T> {
        CircularQueue {
            slots: slots::empty(count.max(1)),
            head: 0,
            tail: 0,
        }
    }

    /// Returns the number of slots currently allocated.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the oldest item in the queue.
    pub fn front(&self) -> Option<&T> {
        self.slots[self.head].as_ref()
    }

    /// Returns the slot index of the `offset`th item from the front.
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }

    fn grow(&mut self) {
        let size = self.size();
        let count = slots::grown(self.slots.len());
        log::debug!("growing queue from {} to {} slots", self.slots.len(), count);

        let mut new_slots = slots::empty(count);
        for (offset, new) in new_slots.iter_mut().take(size).enumerate() {
            let i = self.slot(offset);
            *new = self.slots[i].take();
        }

        self.slots = new_slots;
        self.head = 0;
        self.tail = size;
    }
}

impl<T> Container<T> for CircularQueue<T> {
    fn size(&self) -> usize {
        (self.tail + self.slots.len() - self.head) % self.slots.len()
    }

    fn insert(&mut self, item: T) {
        if self.size() == self.slots.len() - 1 {
            self.grow();
        }

        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.slots.len();
    }

    fn remove(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }

        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        item
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.size())
            .filter_map(|offset| self.slots[self.slot(offset)].clone())
            .collect()
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("slots", &self.slots)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

impl<T> Bounded<CircularQueue<T>> {
    /// Creates an empty, unbounded queue.
    pub fn new() -> Queue<T> {
        Bounded::wrap(CircularQueue::new(), None)
    }

    /// Creates an empty queue that can hold at most `max_size` items. `max_size + 1` slots are
    /// allocated up front, so the queue never needs to grow, unless that is more than
    /// [`MAX_PREALLOCATED`](super::MAX_PREALLOCATED).
    pub fn bounded(max_size: usize) -> Queue<T> {
        let count = slots::preallocated(max_size.saturating_add(1));
        Bounded::wrap(CircularQueue::with_slots(count), Some(max_size))
    }

    /// Adds `item` to the back of the queue.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the queue has reached its maximum size.
    pub fn enqueue(&mut self, item: T) -> Result<(), FullContainer> {
        self.put(item)
    }

    /// Removes the item at the front of the queue.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        self.get()
    }

    /// Returns the item at the front of the queue without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.inner().front().ok_or(EmptyContainer)
    }
}
