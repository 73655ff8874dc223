//! Random-access cursors over the live region of a ring buffer.
//!
//! A cursor is a `(buffer, raw position)` pair. All arithmetic happens in
//! index-modulo space over the physical slot count, so a position can never
//! leave the allocation; what it *can* do is leave the logical region, and
//! that is reported as a typed error instead of being undefined.
//!
//! Ordering and distance have to account for the wrap: when the live region
//! straddles the physical end of the block, the position nearer the start
//! of the block is logically *later*.

use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use crate::alloc::{BlockAlloc, Global};
use crate::error::Error;
use crate::ring::buffer::RingBuffer;

/// A position inside (or one past) the live region of a [`RingBuffer`].
///
/// Cursors borrow the buffer, so any operation that could shift or
/// relocate elements ends their lifetime at compile time.
///
/// ```rust
/// use cyclebuf::RingBuffer;
///
/// let ring: RingBuffer<i32> = (0..5).collect();
/// let begin = ring.cursor_begin();
/// let third = begin.offset(2).unwrap();
/// assert_eq!(third.get(), Ok(&2));
/// assert_eq!(third.offset_from(&begin), 2);
/// ```
pub struct Cursor<'a, T, A: BlockAlloc = Global> {
    ring: &'a RingBuffer<T, A>,
    pos: usize,
}

impl<T, A: BlockAlloc> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: BlockAlloc> Copy for Cursor<'_, T, A> {}

impl<'a, T, A: BlockAlloc> Cursor<'a, T, A> {
    pub(crate) fn new(ring: &'a RingBuffer<T, A>, pos: usize) -> Self {
        debug_assert!(ring.position_in_region(pos));
        Self { ring, pos }
    }

    /// The element under the cursor.
    ///
    /// # Errors
    /// Returns [`Error::EndDereference`] when the cursor sits on the
    /// logical end.
    pub fn get(&self) -> Result<&'a T, Error> {
        if self.pos == self.ring.tail_pos() {
            return Err(Error::EndDereference);
        }
        // SAFETY: cursor positions always lie inside the logical region;
        // any position other than the end sentinel holds a live element.
        Ok(unsafe { &*self.ring.slot_ptr(self.pos) })
    }

    /// The cursor's logical index, i.e. its distance from
    /// [`cursor_begin`](RingBuffer::cursor_begin).
    pub fn index(&self) -> usize {
        let n = self.ring.physical_slots();
        (self.pos + n - self.ring.head_pos()) % n
    }

    /// The cursor moved by `count` logical positions (negative moves
    /// backward). The step is normalized modulo the physical slot count, so
    /// on a full buffer offsets wrap around the ring indefinitely.
    ///
    /// # Errors
    /// Returns [`Error::CursorOutOfBounds`] when the computed position
    /// falls outside the logical region.
    pub fn offset(&self, count: isize) -> Result<Self, Error> {
        let n = self.ring.physical_slots();
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let step = count.rem_euclid(n as isize) as usize;
        let pos = (self.pos + step) % n;
        if !self.ring.position_in_region(pos) {
            return Err(Error::CursorOutOfBounds);
        }
        Ok(Self {
            ring: self.ring,
            pos,
        })
    }

    /// Logical distance from `other` to `self` (`self - other`), correct
    /// across the wrap boundary.
    ///
    /// Three configurations:
    /// - the region does not wrap: plain index subtraction;
    /// - the region wraps and both positions sit in the same physical half:
    ///   plain subtraction still holds;
    /// - the positions straddle the physical break: the one nearer the
    ///   block start is logically later, so the difference is corrected by
    ///   the physical slot count.
    #[allow(clippy::cast_possible_wrap)]
    pub fn offset_from(&self, other: &Self) -> isize {
        debug_assert!(ptr::eq(self.ring, other.ring));
        let head = self.ring.head_pos();
        let tail = self.ring.tail_pos();
        let n = self.ring.physical_slots() as isize;
        let a = self.pos as isize;
        let b = other.pos as isize;
        if head <= tail {
            return a - b;
        }
        let same_low = self.pos <= tail && other.pos <= tail;
        let same_high = self.pos >= head && other.pos >= head;
        if same_low || same_high {
            a - b
        } else if a > b {
            a - b - n
        } else {
            a - b + n
        }
    }
}

impl<T, A: BlockAlloc> PartialEq for Cursor<'_, T, A> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ring, other.ring) && self.pos == other.pos
    }
}

impl<T, A: BlockAlloc> Eq for Cursor<'_, T, A> {}

impl<T, A: BlockAlloc> PartialOrd for Cursor<'_, T, A> {
    /// Logical order; `None` when the cursors belong to different buffers.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !ptr::eq(self.ring, other.ring) {
            return None;
        }
        Some(self.offset_from(other).cmp(&0))
    }
}

impl<T, A: BlockAlloc> fmt::Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("index", &self.index()).finish()
    }
}
