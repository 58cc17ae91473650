//! A module containing [`Buffer`], the raw storage behind [`Vector`](super::Vector).

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ops::Range;
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned, fixed capacity block of memory for `cap` values of `T`, none of which are assumed to
/// be initialized.
///
/// A Buffer never reads, drops or otherwise tracks its contents. That is left to the owner, which
/// knows which offsets are live and uses the unsafe `write`, `read` and `drop_*` methods on them.
/// Dropping a Buffer only releases the allocation, so any live values need to be dropped or moved
/// out first.
///
/// Zero-sized types are never allocated, the Buffer holds a dangling pointer instead.
pub struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a new Buffer with space for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Buffer;
    /// let buf: Buffer<String> = Buffer::new(4);
    /// assert_eq!(buf.cap(), 4);
    /// ```
    pub fn new(cap: usize) -> Buffer<T> {
        let layout = Buffer::<T>::make_layout(cap);

        Buffer {
            ptr: Buffer::<T>::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of values the Buffer has space for.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a raw pointer to the start of the Buffer.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const()
    }

    /// Returns a mutable raw pointer to the start of the Buffer.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Constructs `value` in the slot at `offset`, returning a reference to it. Any value that was
    /// previously at `offset` is overwritten without being dropped.
    ///
    /// # Safety
    /// `offset` must be less than [`cap`](Buffer::cap).
    pub unsafe fn write(&mut self, offset: usize, value: T) -> &mut T {
        // SAFETY: The caller guarantees that offset is within the allocation, so the pointer is
        // properly aligned and valid for writes.
        unsafe {
            let slot = self.ptr.add(offset);
            slot.write(value);
            &mut *slot.as_ptr()
        }
    }

    /// Moves the value at `offset` out of the Buffer. The slot should be treated as uninitialized
    /// afterwards.
    ///
    /// # Safety
    /// `offset` must be less than [`cap`](Buffer::cap) and the slot must be initialized.
    pub unsafe fn read(&self, offset: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized. We are making a
        // bitwise copy and the caller forgets the original, which is a move.
        unsafe { self.ptr.add(offset).read() }
    }

    /// Drops the values in `range` in place, leaving their slots uninitialized.
    ///
    /// # Safety
    /// `range` must be within [`cap`](Buffer::cap) and every slot in it must be initialized.
    pub unsafe fn drop_range(&mut self, range: Range<usize>) {
        // SAFETY: The caller guarantees that the range is in bounds and initialized. Dropping a
        // slice in place continues dropping the remaining values if one of them panics.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(range.start).as_ptr(),
                range.len(),
            ));
        }
    }

    /// Moves `count` values starting at `src` so that they start at `dst` instead. The ranges may
    /// overlap. Slots that were only part of the source range are left uninitialized.
    ///
    /// # Safety
    /// Both ranges must be within [`cap`](Buffer::cap) and all slots in the source range must be
    /// initialized. Any initialized values in the destination range that aren't also in the
    /// source range are overwritten without being dropped.
    pub unsafe fn shift(&mut self, src: usize, dst: usize, count: usize) {
        // SAFETY: The caller guarantees that both ranges are in bounds. ptr::copy handles
        // overlapping ranges.
        unsafe {
            ptr::copy(
                self.ptr.add(src).as_ptr().cast_const(),
                self.ptr.add(dst).as_ptr(),
                count,
            );
        }
    }

    /// Replaces self with a new allocation of `new_cap` slots, moving the first `len` values across
    /// in order and then releasing the old allocation. None of the values are cloned or dropped.
    ///
    /// # Safety
    /// `len` must be no greater than either capacity and all slots before `len` must be
    /// initialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub unsafe fn relocate(&mut self, len: usize, new_cap: usize) {
        let mut new_buf = Buffer::<T>::new(new_cap);

        // SAFETY: The caller guarantees that len values are initialized and fit in both Buffers,
        // which are separate allocations (or dangling, for zero-sized types and zero capacities).
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), new_buf.as_mut_ptr(), len);
        }

        // The old Buffer only holds moved-from slots now, dropping it just deallocates.
        drop(std::mem::replace(self, new_buf));
    }

    /// Interprets the first `len` slots as a slice.
    ///
    /// # Safety
    /// `len` must be no greater than [`cap`](Buffer::cap) and all slots before `len` must be
    /// initialized.
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        // SAFETY: The held data uses Layout::array(cap) and is valid and aligned for len values,
        // which the caller guarantees are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// Interprets the first `len` slots as a mutable slice.
    ///
    /// # Safety
    /// `len` must be no greater than [`cap`](Buffer::cap) and all slots before `len` must be
    /// initialized.
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        // SAFETY: As with as_slice, plus the mutable borrow of self prevents aliasing.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `cap` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap)
            .map_err(|_| CapacityOverflow)
            .throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Buffer::<T>::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it is safe to Send when T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer has no interior mutability, all mutation requires &mut self.
unsafe impl<T: Sync> Sync for Buffer<T> {}
