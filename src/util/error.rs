//! Error types shared by the collections, mostly used to panic with a consistent message when a
//! caller breaks a precondition.

use derive_more::{Display, Error};

/// An index was provided that doesn't refer to a live element of the collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time of the access.
    pub len: usize,
}

/// An element was requested from a collection with no elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to take an element from an empty collection!")]
pub struct EmptyCollection;

/// The requested capacity can't be represented by a memory layout no larger than [`isize::MAX`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
