use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, Nodes};
use crate::collections::error::{EmptyContainer, FullContainer};
use crate::collections::linear::container::{Bounded, Container};
#[doc(inline)]
pub use crate::util::error::UnlinkedNode;
use crate::util::result::ResultExtension;

/// A doubly linked list with checked access and an optional maximum size. See [`LinkedList`] for
/// the underlying container.
///
/// # Examples
/// ```
/// # use elementary_structures::collections::linear::List;
/// let mut list = List::new();
/// list.push_back(2).unwrap();
/// list.push_front(1).unwrap();
/// list.push_back(3).unwrap();
/// assert_eq!(list.to_vec(), [1, 2, 3]);
/// assert_eq!(list.pop_front(), Ok(1));
/// assert_eq!(list.pop_back(), Ok(3));
/// ```
pub type List<T> = Bounded<LinkedList<T>>;

const NIL: usize = 0;

/// A handle to a node of a [`LinkedList`], returned when a value is inserted or searched for.
///
/// Handles are plain indices: one stays valid until its node is removed, after which the list may
/// reuse it for a later insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

impl NodeRef {
    /// Returns true if this is the sentinel node of a list.
    pub const fn is_nil(self) -> bool {
        self.0 == NIL
    }
}

struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    const fn unlinked(index: usize) -> Node<T> {
        Node {
            value: None,
            prev: index,
            next: index,
        }
    }
}

/// A list with links in both directions, closed into a ring by a sentinel node.
///
/// The sentinel (or "nil") node holds no value. Its `next` is the first node of the list and its
/// `prev` the last, so every node always has both neighbours and the ends need no special cases.
/// An empty list is just the sentinel, linked to itself.
///
/// Nodes live in a single [`Vec`] and refer to each other by index. Removed nodes are kept on a
/// free list and reused by later inserts.
///
/// As a [`Container`], items are inserted at the back and removed from the back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `insert_after` | `O(1)`* |
/// | `detach` | `O(1)` |
/// | `insert_at` | `O(min(i, n-i))` |
/// | `search` | `O(n)` |
/// | `remove_value` | `O(n)` |
///
/// \* Plus the cost of growing the node storage if there are no free nodes.
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: vec![Node::unlinked(NIL)],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sentinel node.
    pub const fn nil(&self) -> NodeRef {
        NodeRef(NIL)
    }

    /// Returns the first node in the list, or the sentinel if the list is empty.
    pub fn head(&self) -> NodeRef {
        NodeRef(self.nodes[NIL].next)
    }

    /// Returns the last node in the list, or the sentinel if the list is empty.
    pub fn tail(&self) -> NodeRef {
        NodeRef(self.nodes[NIL].prev)
    }

    /// Returns the node following `node`. The node after the last is the sentinel, and the node
    /// after the sentinel is the first.
    ///
    /// # Panics
    /// Panics if `node` isn't linked into this list.
    #[track_caller]
    pub fn next(&self, node: NodeRef) -> NodeRef {
        NodeRef(self.checked_node(node).next)
    }

    /// Returns the node preceding `node`. The node before the first is the sentinel, and the node
    /// before the sentinel is the last.
    ///
    /// # Panics
    /// Panics if `node` isn't linked into this list.
    #[track_caller]
    pub fn prev(&self, node: NodeRef) -> NodeRef {
        NodeRef(self.checked_node(node).prev)
    }

    /// Returns the value stored in `node`, or [`None`] for the sentinel or a node that has been
    /// removed.
    pub fn value(&self, node: NodeRef) -> Option<&T> {
        self.nodes.get(node.0)?.value.as_ref()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.value(self.head())
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.value(self.tail())
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) -> NodeRef {
        self.attach(NIL, value)
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let tail = self.nodes[NIL].prev;
        self.attach(tail, value)
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.nodes[NIL].next;
        self.unlink(head)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.nodes[NIL].prev;
        self.unlink(tail)
    }

    /// Inserts `value` directly after `node`. Inserting after the sentinel adds the value to the
    /// front of the list.
    ///
    /// # Panics
    /// Panics if `node` isn't linked into this list.
    #[track_caller]
    pub fn insert_after(&mut self, node: NodeRef, value: T) -> NodeRef {
        self.checked_node(node);
        self.attach(node.0, value)
    }

    /// Inserts `value` so that it ends up at `index`, or at the back if `index` is past the end of
    /// the list.
    pub fn insert_at(&mut self, index: usize, value: T) -> NodeRef {
        let prev = match index.checked_sub(1) {
            None => NIL,
            Some(prev) if prev >= self.len => self.nodes[NIL].prev,
            Some(prev) => self.seek(prev),
        };
        self.attach(prev, value)
    }

    /// Removes `node` from the list and returns its value. Returns [`None`] for the sentinel and
    /// for nodes that have already been removed.
    pub fn detach(&mut self, node: NodeRef) -> Option<T> {
        self.unlink(node.0)
    }

    /// Returns an iterator over the nodes of the list, from the first to the last. Iterate it in
    /// reverse to walk the list backwards.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::between(self, self.head(), self.tail())
    }

    /// Returns an iterator over `node` and every node after it. The iterator is empty if `node` is
    /// the sentinel.
    ///
    /// # Panics
    /// Panics if `node` isn't linked into this list.
    #[track_caller]
    pub fn nodes_from(&self, node: NodeRef) -> Nodes<'_, T> {
        self.checked_node(node);
        Nodes::between(self, node, self.tail())
    }

    /// Returns an iterator over every node up to and including `node`. Iterate it in reverse to
    /// walk backwards from `node` to the first node. The iterator is empty if `node` is the
    /// sentinel.
    ///
    /// # Panics
    /// Panics if `node` isn't linked into this list.
    #[track_caller]
    pub fn nodes_until(&self, node: NodeRef) -> Nodes<'_, T> {
        self.checked_node(node);
        Nodes::between(self, self.head(), node)
    }

    /// Returns an iterator over the values in the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    fn attach(&mut self, prev: usize, value: T) -> NodeRef {
        let next = self.nodes[prev].next;
        let node = Node {
            value: Some(value),
            prev,
            next,
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            },
        };

        self.nodes[prev].next = index;
        self.nodes[next].prev = index;
        self.len += 1;
        NodeRef(index)
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        if index == NIL {
            return None;
        }

        let node = self.nodes.get_mut(index)?;
        let value = node.value.take()?;
        let Node { prev, next, .. } = std::mem::replace(node, Node::unlinked(index));

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(index);
        self.len -= 1;
        Some(value)
    }

    fn seek(&self, index: usize) -> usize {
        if index < self.len / 2 {
            (0..index).fold(self.nodes[NIL].next, |node, _| self.nodes[node].next)
        } else {
            (index..self.len - 1).fold(self.nodes[NIL].prev, |node, _| self.nodes[node].prev)
        }
    }

    #[track_caller]
    fn checked_node(&self, node: NodeRef) -> &Node<T> {
        match self.nodes.get(node.0) {
            Some(linked) if node.0 == NIL || linked.value.is_some() => linked,
            _ => Err(UnlinkedNode { index: node.0 }).throw(),
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut curr = NIL;
        loop {
            let next = self.nodes[curr].next;
            assert_eq!(self.nodes[next].prev, curr, "Node {next} should link back to {curr}.");
            curr = next;
            if curr == NIL {
                break;
            }
            count += 1;
        }
        assert_eq!(count, self.len, "The ring should contain exactly len nodes.");
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the first node containing `value`, if there is one.
    pub fn search(&self, value: &T) -> Option<NodeRef> {
        self.nodes().find(|&node| self.value(node) == Some(value))
    }

    /// Returns the position of the first occurrence of `value`, if there is one.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns true if the list contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes the first occurrence of `value` from the list and returns it, if there is one.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let node = self.search(value)?;
        self.detach(node)
    }
}

impl<T> Container<T> for LinkedList<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn insert(&mut self, item: T) {
        self.push_back(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}

impl<T> Bounded<LinkedList<T>> {
    /// Creates an empty, unbounded list.
    pub fn new() -> List<T> {
        Bounded::wrap(LinkedList::new(), None)
    }

    /// Creates an empty list that can hold at most `max_size` items.
    pub fn bounded(max_size: usize) -> List<T> {
        Bounded::wrap(LinkedList::new(), Some(max_size))
    }

    /// Adds `item` to the front of the list.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the list has reached its maximum size.
    pub fn push_front(&mut self, item: T) -> Result<NodeRef, FullContainer> {
        Ok(self.with_room::<T>()?.push_front(item))
    }

    /// Adds `item` to the back of the list.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the list has reached its maximum size.
    pub fn push_back(&mut self, item: T) -> Result<NodeRef, FullContainer> {
        Ok(self.with_room::<T>()?.push_back(item))
    }

    /// Inserts `item` so that it ends up at `index`, or at the back if `index` is past the end.
    ///
    /// # Errors
    /// Returns [`FullContainer`] if the list has reached its maximum size.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<NodeRef, FullContainer> {
        Ok(self.with_room::<T>()?.insert_at(index, item))
    }

    /// Removes the item at the front of the list.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyContainer> {
        self.with_items::<T>()?.pop_front().ok_or(EmptyContainer)
    }

    /// Removes the item at the back of the list.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        self.with_items::<T>()?.pop_back().ok_or(EmptyContainer)
    }

    /// Removes `node` from the list and returns its value, if it is linked into the list.
    pub fn detach(&mut self, node: NodeRef) -> Option<T> {
        self.with_items::<T>().ok()?.detach(node)
    }

    /// Removes the first occurrence of `value` from the list and returns it, if there is one.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.with_items::<T>().ok()?.remove_value(value)
    }
}
