use alloc::vec::Vec;

/// LIFO of snapshots, one per undoable move.
#[derive(Clone, Debug, PartialEq)]
pub struct History<T> {
    snapshots: Vec<T>,
}

impl<T> History<T> {
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: T) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.snapshots.pop()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
