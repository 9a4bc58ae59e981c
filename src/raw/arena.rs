use alloc::vec::Vec;

use super::handle::Handle;

/// Append-only slot storage for tree nodes.
///
/// The range tree never deallocates nodes individually - a node, once
/// created, stays live until the whole tree is discarded - so the arena has
/// no free list: `alloc` always appends, and `clear` drops every slot at
/// once. Handles stay valid for the lifetime of the allocation generation
/// they were created in.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }

    /// Drops every slot. All outstanding handles are invalidated.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
