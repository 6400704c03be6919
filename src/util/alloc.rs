use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// Counts how many of its clones have been dropped. Every clone shares the same counter.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<RefCell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(RefCell::new(0)))
    }

    /// Returns the number of drops recorded so far, resetting the count.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Deref for DropCounter {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
