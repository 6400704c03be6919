use std::iter::FusedIterator;

use super::{LinkedList, NodeRef};

/// An iterator over a run of nodes in a [`LinkedList`], following `next` links from the front and
/// `prev` links from the back until the two meet.
pub struct Nodes<'a, T> {
    list: &'a LinkedList<T>,
    front: NodeRef,
    back: NodeRef,
    finished: bool,
}

impl<'a, T> Nodes<'a, T> {
    /// Iterates from `front` to `back` inclusive. `back` must not come before `front`.
    pub(super) fn between(list: &'a LinkedList<T>, front: NodeRef, back: NodeRef) -> Nodes<'a, T> {
        Nodes {
            list,
            front,
            back,
            finished: front.is_nil() || back.is_nil(),
        }
    }
}

impl<T> Iterator for Nodes<'_, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let node = self.front;
        if node == self.back {
            self.finished = true;
        } else {
            self.front = self.list.next(node);
        }
        Some(node)
    }
}

impl<T> DoubleEndedIterator for Nodes<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let node = self.back;
        if node == self.front {
            self.finished = true;
        } else {
            self.back = self.list.prev(node);
        }
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: self.nodes(),
        }
    }
}

/// An iterator over the values in a [`LinkedList`].
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.nodes.list;
        self.nodes.next().and_then(|node| list.value(node))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let list = self.nodes.list;
        self.nodes.next_back().and_then(|node| list.value(node))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator over the values in a [`LinkedList`], popping them from the front.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
