//! # `cyclebuf` - Circular Buffers with Wraparound-Safe Cursors
//!
//! A small toolkit of ring-buffer containers built on one storage engine:
//! a contiguous block of `capacity + 1` slots whose live region is tracked
//! by two cursors and may wrap past the physical end of the block. The
//! extra sentinel slot keeps "empty" and "full" unambiguous from the two
//! cursors alone, so the element count is always derived from index
//! arithmetic instead of a separate length field.
//!
//! ## Container Types
//!
//! 1. **[`RingBuffer<T>`]**:
//!    - Growable; reallocates with amortized doubling when full
//!    - Push/pop at both ends, positional insert and erase, fill and assign
//!    - Relocation preserves logical order and moves elements (it cannot
//!      fail mid-copy, so growth keeps the original buffer intact on error)
//!
//! 2. **[`BoundedDeque<T>`]**:
//!    - Same engine by composition, capacity frozen at construction
//!    - Exhaustion is a typed [`Error::CapacityExceeded`], never a
//!      reallocation
//!
//! 3. **[`Cursor`]**:
//!    - A `(buffer, raw position)` pair with random-access arithmetic
//!    - Comparison, distance and offsets stay correct when the live region
//!      straddles the physical wrap boundary
//!    - Borrows the buffer, so every operation that would invalidate it is
//!      rejected at compile time
//!
//! Storage comes from the [`alloc::BlockAlloc`] capability; the default
//! [`alloc::Global`] forwards to the global allocator, and callers can
//! inject their own source of contiguous memory.
//!
//! ## Example
//!
//! ```rust
//! use cyclebuf::RingBuffer;
//!
//! let mut ring = RingBuffer::new();
//! for i in 0..5 {
//!     ring.push_back(i);
//! }
//!
//! assert_eq!(ring.to_string(), "0 1 2 3 4 ");
//! assert_eq!(ring.pop_front(), Some(0));
//! assert_eq!(ring.len(), 4);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
mod error;
mod ring;

pub use error::Error;
pub use ring::bounded::BoundedDeque;
pub use ring::buffer::RingBuffer;
pub use ring::cursor::Cursor;
pub use ring::iter::{IntoIter, Iter, IterMut};

// Compile-time layout checks: these types are thin and should stay so.
const _: () = {
    use core::mem;

    // Block pointer, slot count, two cursors; `Global` is a ZST.
    assert!(mem::size_of::<RingBuffer<u8>>() == mem::size_of::<usize>() * 4);

    // The bounded wrapper adds no state of its own.
    assert!(mem::size_of::<BoundedDeque<u8>>() == mem::size_of::<RingBuffer<u8>>());

    // Cursors are a reference plus a raw position, with a niche.
    assert!(
        mem::size_of::<Option<Cursor<'static, u8>>>() == mem::size_of::<Cursor<'static, u8>>()
    );
};
