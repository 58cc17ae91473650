//! The collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as pointers, allocations, probing and the difference between a precondition and an
//! expected failure.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves me from writing some of the more repetitive functionality, like `get`,
//! `first`, `last`, `contains` and borrowed iteration.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
