//! Ordering policies, which decide what it means for one element to be "better" than another.
//!
//! A policy is a value implementing [`Compare`]. The heap engine only ever asks a policy one
//! question, through [`Compare::better_or_equal`], so a min-heap, a max-heap and a heap ordered
//! on some projection of its elements all share the same code.

use derive_more::IsVariant;

/// The direction of a heap. A [`Min`](Direction::Min) heap keeps its smallest element at the
/// root, a [`Max`](Direction::Max) heap its largest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Direction {
    /// The smallest element is the best.
    #[default]
    Min,
    /// The largest element is the best.
    Max,
}

impl Direction {
    /// Returns true if `a` is at least as good as `b` in this direction.
    pub fn holds<K: Ord + ?Sized>(self, a: &K, b: &K) -> bool {
        match self {
            Direction::Min => a <= b,
            Direction::Max => a >= b,
        }
    }
}

impl From<bool> for Direction {
    /// Converts a `min_heap` flag into a direction.
    fn from(min_heap: bool) -> Self {
        if min_heap { Direction::Min } else { Direction::Max }
    }
}

/// A way of comparing elements of type `T` for use within a heap.
///
/// Implementations must describe a total order over the elements they are used with. If they
/// don't, heap operations still terminate and never cause undefined behaviour, but the order in
/// which elements come out of the heap is unspecified.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` should sit above (or level with) `b` in the heap.
    fn better_or_equal(&self, a: &T, b: &T) -> bool;

    /// Returns true if `a` should sit above `b` and the two aren't equivalent.
    fn strictly_better(&self, a: &T, b: &T) -> bool {
        !self.better_or_equal(b, a)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn better_or_equal(&self, a: &T, b: &T) -> bool {
        (**self).better_or_equal(a, b)
    }
}

/// The identity projection: elements are compared as they are.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

/// A key projection: elements are compared by the result of applying the contained function to
/// them.
#[derive(Clone, Copy)]
pub struct ByKey<F>(F);

impl<F> std::fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ByKey(..)")
    }
}

/// The standard ordering policy: a [`Direction`] combined with a projection, either [`Identity`]
/// or [`ByKey`].
///
/// # Examples
/// ```
/// # use elementary_structures::collections::heap::{Compare, Direction, Order};
/// let min = Order::min();
/// assert!(min.better_or_equal(&1, &2));
///
/// let by_len = Order::by_key(Direction::Max, |s: &&str| s.len());
/// assert!(by_len.better_or_equal(&"longer", &"short"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Order<P = Identity> {
    direction: Direction,
    projection: P,
}

impl Order<Identity> {
    /// Creates a policy comparing elements directly in the provided direction.
    pub const fn new(direction: Direction) -> Order<Identity> {
        Order {
            direction,
            projection: Identity,
        }
    }

    /// Creates the policy for a min-heap.
    pub const fn min() -> Order<Identity> {
        Order::new(Direction::Min)
    }

    /// Creates the policy for a max-heap.
    pub const fn max() -> Order<Identity> {
        Order::new(Direction::Max)
    }

    /// Replaces the identity projection with `key`, keeping the direction.
    pub fn with_key<F>(self, key: F) -> Order<ByKey<F>> {
        Order::by_key(self.direction, key)
    }
}

impl<F> Order<ByKey<F>> {
    /// Creates a policy comparing elements by `key` in the provided direction.
    pub const fn by_key(direction: Direction, key: F) -> Order<ByKey<F>> {
        Order {
            direction,
            projection: ByKey(key),
        }
    }
}

impl<P> Order<P> {
    /// Returns the direction of this policy.
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T: Ord + ?Sized> Compare<T> for Order<Identity> {
    fn better_or_equal(&self, a: &T, b: &T) -> bool {
        self.direction.holds(a, b)
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Compare<T> for Order<ByKey<F>> {
    fn better_or_equal(&self, a: &T, b: &T) -> bool {
        let ByKey(key) = &self.projection;
        self.direction.holds(&key(a), &key(b))
    }
}
