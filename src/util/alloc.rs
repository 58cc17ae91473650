//! Element types for checking that collections construct and drop their contents correctly.

use std::cell::Cell;
use std::rc::Rc;

/// A type with no size, so that collections never need to allocate for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// Increments a shared counter whenever an instance is dropped. Clones share the same counter.
#[derive(Debug, Clone)]
pub struct DropCounter(pub Rc<Cell<usize>>);

impl DropCounter {
    /// Creates a new counter starting at zero drops.
    pub fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Returns the number of instances sharing this counter that have been dropped so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A value that can only be moved, never cloned or copied.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly(pub Box<u32>);
