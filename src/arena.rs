use std::num::NonZero;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

// Small handles in tests keep the capacity limit reachable.
#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Stable reference to a slot in an [`Arena`].
///
/// Backed by a non-zero integer so `Option<Handle>` stays the size of a handle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::<RawHandle>::MIN.saturating_add(index as RawHandle))
    }

    #[inline]
    pub(crate) fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Slot storage for tree nodes.
///
/// Freed slots are recycled, so a handle stays valid until its node is taken.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes sure the next `alloc` neither allocates nor runs out of handles.
    pub(crate) fn try_reserve(&mut self) -> Result<()> {
        if self.free.is_empty() {
            if self.slots.len() > Handle::MAX {
                return Err(Error::CapacityExceeded);
            }
            self.slots.try_reserve(1)?;
        }
        Ok(())
    }

    /// Panics once every handle is in use.
    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.to_index()] = Some(element);
            handle
        } else {
            let handle = Handle::from_index(self.slots.len());
            self.slots.push(Some(element));
            handle
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()]
            .as_ref()
            .expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()]
            .as_mut()
            .expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()]
            .take()
            .expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Base pointer of the slot storage, for iterators that hand out
    /// disjoint `&mut T` to several slots at once.
    ///
    /// The pointer is invalidated by any call that may grow or shrink the arena.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut Option<T> {
        self.slots.as_mut_ptr()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, handle: Handle) -> &T {
        self.get(handle)
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, handle: Handle) -> &mut T {
        self.get_mut(handle)
    }
}
