use crate::collections::error::{EmptyContainer, FullContainer};

/// The primitive operations of a linear collection, without any checks.
///
/// Implementors only decide where an item goes and which item comes out next. Checking that there
/// is something to remove, or room to insert, is left to [`Bounded`], which wraps a Container and
/// applies those checks the same way for every kind of collection.
pub trait Container<T> {
    /// Returns the number of items in the collection.
    fn size(&self) -> usize;

    /// Adds an item to the collection.
    fn insert(&mut self, item: T);

    /// Removes the next item from the collection, or returns [`None`] if it is empty.
    fn remove(&mut self) -> Option<T>;

    /// Copies the items of the collection into a [`Vec`], in the order they are stored.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T, C: Container<T> + ?Sized> Container<T> for Box<C> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn insert(&mut self, item: T) {
        (**self).insert(item)
    }

    fn remove(&mut self) -> Option<T> {
        (**self).remove()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (**self).to_vec()
    }
}

/// A [`Container`] with checked access and an optional maximum size.
///
/// [`get`](Bounded::get) fails on an empty container and [`put`](Bounded::put) fails on one that
/// has reached its maximum size, so the wrapped Container never has to handle either case. Each
/// kind of container also gets its own aliases, such as `push` and `pop` for a
/// [`Stack`](super::Stack).
///
/// # Examples
/// ```
/// # use elementary_structures::collections::linear::{ArrayStack, Bounded, Container};
/// let inner: Box<dyn Container<u8>> = Box::new(ArrayStack::new());
/// let mut stack = Bounded::wrap(inner, Some(2));
/// stack.put(1).unwrap();
/// stack.put(2).unwrap();
/// assert!(stack.is_full());
/// assert!(stack.put(3).is_err());
/// assert_eq!(stack.get(), Ok(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bounded<C> {
    inner: C,
    max_size: Option<usize>,
}

impl<C> Bounded<C> {
    /// Wraps `inner`, allowing it to grow to at most `max_size` items, or without limit if
    /// `max_size` is [`None`].
    pub const fn wrap(inner: C, max_size: Option<usize>) -> Bounded<C> {
        Bounded {
            inner,
            max_size,
        }
    }

    /// Returns the maximum number of items the container can hold, if there is one.
    pub const fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Returns a reference to the wrapped container.
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Consumes self, returning the wrapped container.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Returns the number of items in the container.
    pub fn size<T>(&self) -> usize
    where
        C: Container<T>,
    {
        self.inner.size()
    }

    /// Returns true if the container holds no items.
    pub fn is_empty<T>(&self) -> bool
    where
        C: Container<T>,
    {
        self.size() == 0
    }

    /// Returns true if the container has reached its maximum size. Unbounded containers are never
    /// full.
    pub fn is_full<T>(&self) -> bool
    where
        C: Container<T>,
    {
        self.max_size.is_some_and(|max| self.size() >= max)
    }

    /// Adds an item to the container.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the container has reached its maximum size. The item is
    /// dropped and the container left unchanged.
    pub fn put<T>(&mut self, item: T) -> Result<(), FullContainer>
    where
        C: Container<T>,
    {
        self.with_room::<T>()?.insert(item);
        Ok(())
    }

    /// Removes the next item from the container.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if there are no items, leaving the container unchanged.
    pub fn get<T>(&mut self) -> Result<T, EmptyContainer>
    where
        C: Container<T>,
    {
        self.with_items::<T>()?.remove().ok_or(EmptyContainer)
    }

    /// Returns the wrapped container if there is room to insert one more item into it.
    pub(crate) fn with_room<T>(&mut self) -> Result<&mut C, FullContainer>
    where
        C: Container<T>,
    {
        match self.max_size {
            Some(max_size) if self.size() >= max_size => Err(FullContainer { max_size }),
            _ => Ok(&mut self.inner),
        }
    }

    /// Returns the wrapped container if it holds at least one item.
    pub(crate) fn with_items<T>(&mut self) -> Result<&mut C, EmptyContainer>
    where
        C: Container<T>,
    {
        if self.is_empty() {
            return Err(EmptyContainer);
        }
        Ok(&mut self.inner)
    }

    /// Copies the items of the container into a [`Vec`], in the order they are stored.
    pub fn to_vec<T: Clone>(&self) -> Vec<T>
    where
        C: Container<T>,
    {
        self.inner.to_vec()
    }
}
