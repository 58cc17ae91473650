use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;

use tracing::trace;

use crate::collections::contiguous::Buffer;
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugWith;
use crate::util::result::ResultExtension;

const INITIAL_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, which owns a [`Buffer<T>`] and tracks how many of its
/// slots hold live values.
///
/// Only the first `len` slots of the Buffer are ever initialized. Values are constructed in place
/// as they are added and dropped in place as they are removed, and when the Vector runs out of
/// capacity, all values are moved (never cloned) into a Buffer twice the size.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `emplace_with` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `fill` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `append` | `O(n+m)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and capacity 1.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(INITIAL_CAP)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::new(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is always the value the Vector was
    /// created with (or 1, if that was 0), doubled some number of times.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// let mut caps = Vector::new();
    /// for i in 0..5 {
    ///     vec.push(i);
    ///     caps.push(vec.cap());
    /// }
    /// assert_eq!(&*caps, &[1, 2, 4, 4, 8]);
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a raw pointer to the Vector's storage. The Vector retains ownership of the storage,
    /// and the pointer is invalidated by any reallocation.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the Vector's storage. The same rules as
    /// [`as_ptr`](Vector::as_ptr) apply.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns the live elements of the Vector as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values before len are initialized and len <= cap.
        unsafe { self.buf.as_slice(self.len) }
    }

    /// Returns the live elements of the Vector as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: All values before len are initialized and len <= cap.
        unsafe { self.buf.as_mut_slice(self.len) }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    /// Returns a reference to the newly added element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// *vec.push(6) += 1;
    /// assert_eq!(vec[6], 7);
    /// ```
    pub fn push(&mut self, value: T) -> &mut T {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        let index = self.len;
        self.len += 1;
        // SAFETY: It is up to the caller to ensure that index < cap. The slot at index isn't live,
        // so nothing is overwritten.
        unsafe { self.buf.write(index, value) }
    }

    /// Constructs a new element at the end of the Vector with the provided constructor, growing
    /// beforehand if required. Returns a reference to the new element.
    ///
    /// If `construct` panics, the Vector is left unchanged (apart from possibly having grown).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<String> = Vector::new();
    /// vec.emplace_with(|| "ab".repeat(2));
    /// assert_eq!(vec[0], "abab");
    /// ```
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, construct: F) -> &mut T {
        if self.len == self.cap() {
            self.grow();
        }

        let index = self.len;
        // SAFETY: The capacity has just been adjusted so index < cap. len is only incremented after
        // construct returns, so a panic can't leave an uninitialized slot marked as live.
        let element = unsafe { self.buf.write(index, construct()) };
        self.len += 1;
        element
    }

    /// Pops the last value off the end of the Vector, moving it out.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), i);
    /// }
    /// assert!(vec.is_empty());
    /// ```
    pub fn pop(&mut self) -> T {
        if self.len == 0 {
            Err(EmptyCollection).throw()
        }

        // Decrement len before reading.
        self.len -= 1;

        // SAFETY: len has just been decremented and refers to the last initialized value. The slot
        // is no longer considered live, so the value is effectively moved out of the Buffer.
        unsafe { self.buf.read(self.len) }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// index equal to the length of the Vector appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the shifted range and the new slot are in bounds.
        // Everything from index to len is initialized and gets moved one slot to the right,
        // leaving index free to be written.
        unsafe {
            self.buf.shift(index, index + 1, self.len - index);
            self.buf.write(index, value);
        }

        self.len += 1;
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the slot is initialized. Once the value has been read out, the
        // following values are moved left over it, which leaves the slot at len - 1 as the only
        // stale one, and it is excluded by decrementing len.
        let value = unsafe {
            let value = self.buf.read(index);
            self.buf.shift(index + 1, index, self.len - index - 1);
            value
        };

        self.len -= 1;
        value
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);

        mem::replace(&mut self.as_mut_slice()[index], new_value)
    }

    /// Swaps the elements at indices `a` and `b` by moving them, so `T` doesn't need to be
    /// [`Clone`].
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = ["a", "b", "c"].into();
    /// vec.swap(0, 2);
    /// assert_eq!(&*vec, &["c", "b", "a"]);
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);

        if a != b {
            // SAFETY: Both indices are less than len, so the pointers are in bounds and
            // initialized. They are distinct, so the swapped values don't overlap.
            unsafe { ptr::swap(self.as_mut_ptr().add(a), self.as_mut_ptr().add(b)); }
        }
    }

    /// Drops all elements in the Vector, setting the length to 0. The capacity is retained.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// let cap = vec.cap();
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), cap);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero len first, if a drop panics the rest are leaked rather than dropped twice.
        self.len = 0;

        // SAFETY: All values before the old len were initialized and are no longer considered live.
        unsafe { self.buf.drop_range(0..len); }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra. The capacity is doubled until it fits, so
    /// the Vector reallocates at most once and keeps the same progression as pushing one at a time.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.push(0);
    /// vec.reserve(2);
    /// assert_eq!(vec.cap(), 4);
    /// ```
    pub fn reserve(&mut self, extra: usize) {
        let required = self.len.checked_add(extra)
            .ok_or(CapacityOverflow)
            .throw();

        if required <= self.cap() { return; }

        let mut new_cap = self.cap().max(INITIAL_CAP);
        while new_cap < required {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR)
                .ok_or(CapacityOverflow)
                .throw();
        }

        self.realloc_with_cap(new_cap);
    }

    /// Appends all elements from `other` to self, moving them out of `other`.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.append((3..6).collect());
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn append(&mut self, mut other: Vector<T>) {
        self.reserve(other.len);

        // SAFETY: self has room from len to len + other.len and other is initialized from 0 to
        // other.len. The Buffers are separate allocations so they can't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                other.as_ptr(),
                self.as_mut_ptr().add(self.len),
                other.len,
            );
        }

        self.len += other.len;

        // The values now belong to self, so other shouldn't drop them. Its Buffer is still freed.
        other.len = 0;
    }

    /// Reallocates the internal Buffer with the provided capacity, moving all elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        trace!(len = self.len, old_cap = self.cap(), new_cap, "reallocating vector");

        // SAFETY: All values before len are initialized and callers never shrink below len.
        unsafe { self.buf.relocate(self.len, new_cap); }
    }

    /// Grows the internal Buffer by the growth factor to allow for the insertion of additional
    /// elements. After calling this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .throw()
            .max(INITIAL_CAP);

        self.realloc_with_cap(new_cap);
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Overwrites every live element with a clone of `value`. Neither the length nor the capacity
    /// change.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..4).collect();
    /// vec.fill(9);
    /// assert_eq!(&*vec, &[9, 9, 9, 9]);
    /// ```
    pub fn fill(&mut self, value: T) {
        for item in self.as_mut_slice() {
            item.clone_from(&value);
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N.max(INITIAL_CAP));

        for item in value {
            // SAFETY: vec has been created with enough capacity for all N items.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop all live values in place. The Buffer is dropped afterwards, which only deallocates.
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { self.buf.drop_range(0..self.len); }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugWith(|f: &mut Formatter<'_>| {
                f.debug_list().entries(self.iter()).finish()
            }))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Renders the live elements in order as `[e0, e1, ...]`, using each element's own [`Display`].
impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
