//! Raw slot arena backing the ring containers.

use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use crate::alloc::{AllocError, BlockAlloc};

/// An owned block of uninitialized slots.
///
/// `RawSlots` owns the physical allocation only; which slots hold live
/// values is tracked by the ring on top of it. The block is released
/// explicitly via [`release`](Self::release) - there is no `Drop` impl,
/// because the allocator lives next to this struct, not inside it.
pub(crate) struct RawSlots<T> {
    ptr: NonNull<T>,
    slots: usize,
}

impl<T> RawSlots<T> {
    /// Allocates a block of `slots` slots through `alloc`.
    ///
    /// Zero-sized element types use a dangling pointer and never touch the
    /// allocator; the slot count still drives the ring's index arithmetic.
    pub(crate) fn allocate<A: BlockAlloc>(slots: usize, alloc: &A) -> Result<Self, AllocError> {
        debug_assert!(slots > 0);
        if mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                slots,
            });
        }
        let layout = Layout::array::<T>(slots).map_err(|_| AllocError)?;
        let raw = alloc.allocate(layout)?;
        Ok(Self {
            ptr: raw.cast(),
            slots,
        })
    }

    /// Physical slot count (usable capacity plus the sentinel).
    #[inline(always)]
    pub(crate) fn slots(&self) -> usize {
        self.slots
    }

    /// Raw pointer to slot `i`.
    ///
    /// The slot may be uninitialized; the caller decides whether reading or
    /// writing through it is sound.
    #[inline(always)]
    pub(crate) fn slot(&self, i: usize) -> *mut T {
        debug_assert!(i < self.slots);
        // SAFETY: `i` is within the allocated block (dangling + 0 for ZSTs).
        unsafe { self.ptr.as_ptr().add(i) }
    }

    /// Returns the block to `alloc` and leaves the arena empty.
    ///
    /// # Safety
    /// The block must have been allocated by `alloc`, and every element the
    /// caller constructed in it must already have been moved out or dropped.
    pub(crate) unsafe fn release<A: BlockAlloc>(&mut self, alloc: &A) {
        if self.slots > 0 && mem::size_of::<T>() > 0 {
            if let Ok(layout) = Layout::array::<T>(self.slots) {
                // SAFETY: the block came from `alloc` with this exact layout.
                unsafe { alloc.deallocate(self.ptr.cast(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.slots = 0;
    }
}
