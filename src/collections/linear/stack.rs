use std::fmt::{self, Debug, Formatter};

use super::container::{Bounded, Container};
use super::slots::{self, DEFAULT_ARR_SIZE, Slots};
use crate::collections::error::{EmptyContainer, FullContainer};

/// A last-in first-out stack. See [`ArrayStack`] for the underlying container.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::linear::Stack;
/// let mut stack = Stack::new();
/// stack.push('a').unwrap();
/// stack.push('b').unwrap();
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.pop(), Ok('a'));
/// assert!(stack.pop().is_err());
/// ```
pub type Stack<T> = Bounded<ArrayStack<T>>;

/// A stack stored in an array of slots, with `top` counting the occupied ones. The array doubles
/// in size whenever a push finds it full.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)` |
/// | `size` | `O(1)` |
///
/// \* If the array is full, `insert` has to move all `n` items into a new one.
pub struct ArrayStack<T> {
    slots: Slots<T>,
    top: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack with [`DEFAULT_ARR_SIZE`] slots.
    pub fn new() -> ArrayStack<T> {
        ArrayStack::with_slots(DEFAULT_ARR_SIZE)
    }

    /// Creates an empty stack with exactly `count` slots.
    pub fn with_slots(count: usize) -> ArrayStack<T> {
        ArrayStack {
            slots: slots::empty(count),
            top: 0,
        }
    }

    /// Returns the number of slots currently allocated.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the most recently inserted item.
    pub fn top(&self) -> Option<&T> {
        self.top.checked_sub(1).and_then(|i| self.slots[i].as_ref())
    }

    fn grow(&mut self) {
        let count = slots::grown(self.slots.len());
        log::debug!("growing stack from {} to {} slots", self.slots.len(), count);

        let mut new_slots = slots::empty(count);
        for (new, old) in new_slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = new_slots;
    }
}

impl<T> Container<T> for ArrayStack<T> {
    fn size(&self) -> usize {
        self.top
    }

    fn insert(&mut self, item: T) {
        if self.top == self.slots.len() {
            self.grow();
        }

        self.slots[self.top] = Some(item);
        self.top += 1;
    }

    fn remove(&mut self) -> Option<T> {
        self.top = self.top.checked_sub(1)?;
        self.slots[self.top].take()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.slots[..self.top].iter().flatten().cloned().collect()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("contents", &&self.slots[..self.top])
            .field("top", &self.top)
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl<T> Bounded<ArrayStack<T>> {
    /// Creates an empty, unbounded stack.
    pub fn new() -> Stack<T> {
        Bounded::wrap(ArrayStack::new(), None)
    }

    /// Creates an empty stack that can hold at most `max_size` items. Exactly `max_size` slots are
    /// allocated up front, so the stack never needs to grow, unless that is more than
    /// [`MAX_PREALLOCATED`](super::MAX_PREALLOCATED).
    pub fn bounded(max_size: usize) -> Stack<T> {
        let count = slots::preallocated(max_size);
        Bounded::wrap(ArrayStack::with_slots(count), Some(max_size))
    }

    /// Pushes `item` onto the top of the stack.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the stack has reached its maximum size.
    pub fn push(&mut self, item: T) -> Result<(), FullContainer> {
        self.put(item)
    }

    /// Pops the item off the top of the stack.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.get()
    }

    /// Returns the item on the top of the stack without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.inner().top().ok_or(EmptyContainer)
    }
}
