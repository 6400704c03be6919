#![cfg(test)]

use super::*;
use crate::collections::error::{EmptyContainer, FullContainer};
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

const BOUNDED_MAX_SIZE: usize = 32;

#[test]
fn test_stack_order_and_growth() {
    let mut stack = Stack::new();
    assert_eq!(stack.inner().slot_count(), DEFAULT_ARR_SIZE);

    for i in 0..50 {
        stack.push(i).expect("unbounded stack");
        assert_eq!(stack.size(), i + 1);
        assert_eq!(stack.peek(), Ok(&i));
    }
    assert_eq!(stack.inner().slot_count(), 64, "Slots should double each time they fill up.");
    assert_eq!(stack.to_vec(), (0..50).collect::<Vec<_>>(), "Stack should list bottom to top.");

    for i in (0..50).rev() {
        assert_eq!(stack.pop(), Ok(i));
    }
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(EmptyContainer));
    assert_eq!(stack.peek(), Err(EmptyContainer));
}

#[test]
fn test_queue_order_and_wrapping() {
    let mut queue = Queue::new();

    // Move head and tail around the end of the slots a few times without growing.
    for round in 0..5 {
        for i in 0..5 {
            queue.enqueue(round * 10 + i).expect("unbounded queue");
        }
        assert_eq!(queue.peek(), Ok(&(round * 10)));
        for i in 0..5 {
            assert_eq!(queue.dequeue(), Ok(round * 10 + i));
        }
    }
    assert_eq!(queue.inner().slot_count(), DEFAULT_ARR_SIZE);
    assert!(queue.is_empty());

    // Leave the head part way through the slots before growing.
    for i in 0..3 {
        queue.enqueue(i).expect("unbounded queue");
    }
    queue.dequeue().expect("queue has items");
    for i in 3..20 {
        queue.enqueue(i).expect("unbounded queue");
    }
    assert!(queue.inner().slot_count() > DEFAULT_ARR_SIZE);
    assert_eq!(queue.size(), 19);
    assert_eq!(
        queue.to_vec(),
        (1..20).collect::<Vec<_>>(),
        "Growing should keep the items in FIFO order."
    );

    for i in 1..20 {
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert_eq!(queue.dequeue(), Err(EmptyContainer));
}

#[test]
fn test_bounded_overflow_and_underflow() {
    let mut stack = Stack::bounded(BOUNDED_MAX_SIZE);
    let mut queue = Queue::bounded(BOUNDED_MAX_SIZE);
    let mut priority_queue = PriorityQueue::bounded(BOUNDED_MAX_SIZE);
    let mut list = List::bounded(BOUNDED_MAX_SIZE);

    assert_eq!(stack.pop(), Err(EmptyContainer));
    assert_eq!(queue.dequeue(), Err(EmptyContainer));
    assert_eq!(priority_queue.pop(), Err(EmptyContainer));
    assert_eq!(list.pop_back(), Err(EmptyContainer));

    for i in 0..50 {
        let expected = if i < BOUNDED_MAX_SIZE {
            Ok(())
        } else {
            Err(FullContainer { max_size: BOUNDED_MAX_SIZE })
        };
        assert_eq!(stack.push(i), expected);
        assert_eq!(queue.enqueue(i), expected);
        assert_eq!(priority_queue.push(i, i), expected);
        assert_eq!(list.put(i), expected);
    }

    assert!(stack.is_full() && queue.is_full() && priority_queue.is_full() && list.is_full());
    assert_eq!(list.push_front(99), Err(FullContainer { max_size: BOUNDED_MAX_SIZE }));
    assert_eq!(list.insert_at(3, 99), Err(FullContainer { max_size: BOUNDED_MAX_SIZE }));
    assert_eq!(list.size(), BOUNDED_MAX_SIZE);
    assert_eq!(stack.size(), BOUNDED_MAX_SIZE);
    assert_eq!(queue.size(), BOUNDED_MAX_SIZE);
    assert_eq!(priority_queue.size(), BOUNDED_MAX_SIZE);
    assert_eq!(stack.inner().slot_count(), BOUNDED_MAX_SIZE, "A bounded stack shouldn't grow.");
    assert_eq!(queue.inner().slot_count(), BOUNDED_MAX_SIZE + 1, "A bounded queue shouldn't grow.");

    assert_eq!(stack.pop(), Ok(BOUNDED_MAX_SIZE - 1));
    assert_eq!(queue.dequeue(), Ok(0));
    assert_eq!(priority_queue.pop(), Ok(0));
    assert_eq!(list.pop_front(), Ok(0));
    assert_eq!(list.get(), Ok(BOUNDED_MAX_SIZE - 1), "A list container should take from the back.");
    assert!(!stack.is_full() && !queue.is_full() && !priority_queue.is_full() && !list.is_full());
}

#[test]
fn test_priority_queue_order() {
    let mut queue = PriorityQueue::new();
    queue.push("a", 10).expect("unbounded queue");
    queue.push("b", 1).expect("unbounded queue");
    queue.push("c", 5).expect("unbounded queue");
    queue.push("d", 1).expect("unbounded queue");

    assert_eq!(queue.peek(), Ok(&"b"));
    assert_eq!(queue.pop(), Ok("b"));
    assert_eq!(queue.pop(), Ok("d"), "Equal priorities should come out in insertion order.");
    assert_eq!(queue.pop(), Ok("c"));
    assert_eq!(queue.pop(), Ok("a"));
    assert_eq!(queue.peek(), Err(EmptyContainer));

    let mut queue = PriorityQueue::new();
    for i in (0..1000).rev() {
        queue.push(format!("item{i}"), i).expect("unbounded queue");
    }
    assert_eq!(queue.pop().as_deref(), Ok("item0"));
}

#[test]
fn test_priority_queue_stability() {
    let mut stable = PriorityQueue::new();
    for i in 0..20 {
        stable.push(i, 2).expect("unbounded queue");
    }
    for i in 0..20 {
        assert_eq!(stable.pop(), Ok(i), "A stable queue should be FIFO for equal priorities.");
    }

    let mut unstable = PriorityQueue::with_options(None, false);
    assert!(!unstable.inner().is_stable());
    for i in 0..20 {
        unstable.push(i, i % 3).expect("unbounded queue");
    }
    let priorities: Vec<_> = (0..20)
        .map(|_| unstable.pop().expect("queue has items") % 3)
        .collect();
    assert!(
        priorities.is_sorted(),
        "An unstable queue should still order by priority."
    );
}

#[test]
fn test_priority_queue_incomparable_items() {
    // Items are never compared, only their priorities.
    struct Opaque(#[allow(dead_code)] DropCounter);

    let counter = DropCounter::new();
    let mut queue = PriorityQueue::new();
    for _ in 0..3 {
        queue.push(Opaque(counter.clone()), 1).expect("unbounded queue");
    }

    let mut recovered = 0;
    while queue.pop().is_ok() {
        recovered += 1;
    }
    assert_eq!(recovered, 3);
    assert_eq!(counter.take(), 3);
}

#[test]
fn test_generic_put_and_get() {
    let mut queue = PriorityQueue::new();
    queue.put((3, 'c')).expect("unbounded queue");
    queue.put((1, 'a')).expect("unbounded queue");
    assert_eq!(queue.to_vec(), [(1, 'a'), (3, 'c')]);
    assert_eq!(queue.get(), Ok((1, 'a')));

    // The checks work the same on a boxed container.
    let inner: Box<dyn Container<u8>> = Box::new(CircularQueue::new());
    let mut boxed = Bounded::wrap(inner, Some(1));
    assert_eq!(boxed.get(), Err(EmptyContainer));
    assert_eq!(boxed.put(7), Ok(()));
    assert_eq!(boxed.put(8), Err(FullContainer { max_size: 1 }));
    assert_eq!(boxed.to_vec(), [7]);
    assert_eq!(boxed.get(), Ok(7));
}

#[test]
fn test_drop_remaining_items() {
    let counter = DropCounter::new();

    let mut stack = Stack::new();
    let mut queue = Queue::new();
    let mut list = List::new();
    for _ in 0..10 {
        stack.push(counter.clone()).expect("unbounded stack");
        queue.enqueue(counter.clone()).expect("unbounded queue");
        list.push_back(counter.clone()).expect("unbounded list");
    }
    assert_eq!(counter.take(), 0, "Growing shouldn't drop any items.");

    drop(stack.pop());
    drop(queue.dequeue());
    drop(list.pop_front());
    assert_eq!(counter.take(), 3);

    drop(stack);
    drop(queue);
    drop(list);
    assert_eq!(counter.take(), 27, "Dropping a container should drop its items.");
}

#[test]
fn test_bounded_with_huge_max_size() {
    let mut stack = Stack::bounded(usize::MAX);
    let mut queue = Queue::bounded(usize::MAX);
    assert_eq!(stack.inner().slot_count(), MAX_PREALLOCATED);
    assert_eq!(queue.inner().slot_count(), MAX_PREALLOCATED);

    for i in 0..MAX_PREALLOCATED + 10 {
        stack.push(i).expect("far below the maximum size");
        queue.enqueue(i).expect("far below the maximum size");
    }
    assert!(stack.inner().slot_count() > MAX_PREALLOCATED, "Large bounds should grow on demand.");
    assert!(queue.inner().slot_count() > MAX_PREALLOCATED, "Large bounds should grow on demand.");
    assert!(!stack.is_full() && !queue.is_full());
    assert_eq!(stack.pop(), Ok(MAX_PREALLOCATED + 9));
    assert_eq!(queue.dequeue(), Ok(0));
}

#[test]
fn test_linked_list_single_node() {
    let mut list = LinkedList::new();
    assert_eq!(list.head(), list.nil());
    assert_eq!(list.tail(), list.nil());

    list.push_back(10);
    let node = list.search(&10).expect("10 was inserted");
    assert_eq!(list.value(node), Some(&10));
    assert_eq!(list.prev(node), list.nil(), "A lone node should link back to the sentinel.");
    assert_eq!(list.next(node), list.nil(), "A lone node should link on to the sentinel.");
    assert_eq!(list.value(list.nil()), None);
    list.verify_links();
}

#[test]
fn test_linked_list_links() {
    let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    let [n1, n2, n3] = [1, 2, 3].map(|v| list.search(&v).expect("value was inserted"));

    assert_eq!(list.next(n1), n2);
    assert_eq!(list.prev(n2), n1);
    assert_eq!(list.next(n2), n3);
    assert_eq!(list.prev(n3), n2);
    assert_eq!((list.head(), list.tail()), (n1, n3));
    assert_eq!(list.next(list.nil()), n1, "The sentinel should close the ring.");
    assert_eq!(list.prev(list.nil()), n3, "The sentinel should close the ring.");

    assert_eq!(list.nodes().collect::<Vec<_>>(), [n1, n2, n3]);
    assert_eq!(list.nodes().rev().collect::<Vec<_>>(), [n3, n2, n1]);
    assert_eq!(list.nodes_from(n2).collect::<Vec<_>>(), [n2, n3]);
    assert_eq!(list.nodes_until(n2).rev().collect::<Vec<_>>(), [n2, n1]);
    assert_eq!(list.nodes_from(list.nil()).count(), 0);

    let mut nodes = list.nodes();
    assert_eq!(nodes.next(), Some(n1));
    assert_eq!(nodes.next_back(), Some(n3));
    assert_eq!(nodes.next(), Some(n2));
    assert_eq!(nodes.next_back(), None, "Iterating from both ends shouldn't repeat a node.");
}

#[test]
fn test_linked_list_search() {
    let list: LinkedList<_> = ["a", "b"].into_iter().collect();
    let found = list.search(&"a").expect("a was inserted");
    assert_eq!(list.value(found), Some(&"a"));
    assert_eq!(list.search(&"z"), None);
    assert!(list.contains(&"b") && !list.contains(&"z"));
    assert_eq!(list.index_of(&"b"), Some(1));
}

#[test]
fn test_linked_list_remove_values() {
    // Middle node.
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.remove_value(&2), Some(2));
    assert_eq!(list.search(&2), None);
    let (n1, n3) = (list.search(&1).expect("1 remains"), list.search(&3).expect("3 remains"));
    assert_eq!(list.next(n1), n3);
    assert_eq!(list.prev(n3), n1);
    list.verify_links();

    // Head node.
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.remove_value(&1), Some(1));
    let n2 = list.search(&2).expect("2 remains");
    assert_eq!(list.prev(n2), list.nil());
    assert_eq!(list.head(), n2);

    // Tail node.
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.remove_value(&3), Some(3));
    let n2 = list.search(&2).expect("2 remains");
    assert_eq!(list.next(n2), list.nil());
    assert_eq!(list.tail(), n2);

    // Missing value.
    let mut list: LinkedList<_> = [1, 2].into_iter().collect();
    assert_eq!(list.remove_value(&999), None);
    assert!(list.contains(&1) && list.contains(&2));
    assert_eq!(list.len(), 2);

    // Until empty.
    let mut list: LinkedList<_> = [5, 10, 15].into_iter().collect();
    for v in [5, 10, 15] {
        assert_eq!(list.remove_value(&v), Some(v));
    }
    for v in [5, 10, 15] {
        assert_eq!(list.search(&v), None);
    }
    assert_eq!(list.head(), list.nil());
    assert!(list.is_empty());
    list.verify_links();
}

#[test]
fn test_linked_list_insertion_positions() {
    let mut list = LinkedList::new();
    list.push_back(3);
    list.push_front(1);
    list.insert_at(1, 2);
    list.insert_at(100, 5);
    list.insert_at(3, 4);
    list.insert_at(0, 0);
    assert_eq!(list.to_vec(), [0, 1, 2, 3, 4, 5]);

    let three = list.search(&3).expect("3 was inserted");
    list.insert_after(three, 30);
    list.insert_after(list.nil(), -1);
    assert_eq!(list.to_vec(), [-1, 0, 1, 2, 3, 30, 4, 5]);
    assert_eq!((list.front(), list.back()), (Some(&-1), Some(&5)));
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 30, 3, 2, 1, 0, -1]);
    assert_eq!(list.to_string(), "(-1) -> (0) -> (1) -> (2) -> (3) -> (30) -> (4) -> (5)");

    assert_eq!(list.pop_front(), Some(-1));
    assert_eq!(list.pop_back(), Some(5));
    assert_eq!(list.detach(three), Some(3));
    assert_eq!(list.detach(three), None, "A node can only be detached once.");
    assert_eq!(list.detach(list.nil()), None, "The sentinel can't be detached.");
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [0, 1, 2, 30, 4]);
}

#[test]
fn test_linked_list_reuses_nodes() {
    let mut list = LinkedList::new();
    let first = list.push_back('a');
    list.push_back('b');
    assert_eq!(list.detach(first), Some('a'));

    let reused = list.push_front('c');
    assert_eq!(reused, first, "A detached node should be reused by the next insert.");
    assert_eq!(list.to_vec(), ['c', 'b']);
    list.verify_links();
}

#[test]
fn test_linked_list_unlinked_node() {
    let mut list = LinkedList::new();
    let node = list.push_back(1);
    list.push_back(2);
    list.detach(node);

    assert_panics!({ list.next(node); }, "isn't linked into this list!");
    assert_panics!({ list.insert_after(node, 3); }, "isn't linked into this list!");

    let other: LinkedList<i32> = (0..10).collect();
    let foreign = other.tail();
    assert_panics!({ list.prev(foreign); }, "isn't linked into this list!");
}

#[test]
fn test_list_as_container() {
    let mut list = List::new();
    for i in 0..50 {
        list.put(i).expect("unbounded list");
        assert_eq!(list.size(), i + 1);
    }
    assert_eq!(list.to_vec(), (0..50).collect::<Vec<_>>());

    for i in (0..50).rev() {
        assert_eq!(list.get(), Ok(i), "A list container should take from the back.");
    }
    assert_eq!(list.get(), Err(EmptyContainer));
    assert_eq!(list.pop_front(), Err(EmptyContainer));
    assert_eq!(list.remove_value(&1), None);

    let node = list.push_back(7).expect("unbounded list");
    assert_eq!(list.detach(node), Some(7));
    assert!(list.is_empty());
}
