//! This crate contains a couple of data containers, written from first principles.
//!
//! # Purpose
//! This crate is a learning exercise, with no expectation for it to be used in production. The two
//! containers each exercise a different set of invariants:
//! - [`Vector`](collections::contiguous::Vector) manages its own storage, constructing and
//!   dropping elements in place and moving them into a larger allocation as it grows.
//! - [`LetterMap`](collections::hash::LetterMap) is an open-addressing map with a fixed table of
//!   26 slots, using linear probing and tombstones for deletion.
//!
//! # Error Handling
//! The two containers deliberately use different error handling. Misusing a
//! [`Vector`](collections::contiguous::Vector), like popping from an empty one or removing an
//! index past its length, is a logic error in the caller, so it panics with a typed error such
//! as [`IndexOutOfBounds`]. Anything that can go wrong with a
//! [`LetterMap`](collections::hash::LetterMap) is an expected outcome (the key can't be hashed,
//! isn't there or doesn't fit), so every operation returns a
//! [`MapResult`](collections::hash::map::MapResult) for the caller to inspect.
//!
//! The errors are small concrete types, a [`MapError`](collections::hash::map::MapError) enum for
//! the map and small structs for the Vector, all implementing [`Error`](std::error::Error).
//! [`ResultExtension::throw`] unpacks a [`Result`], panicking with the error's message if the
//! caller didn't check it first.
//!
//! # Dependencies
//! Neither container uses [`Vec`] or [`std::collections::HashMap`] internally. The crate depends on
//! `derive_more` for the repetitive error and variant-check implementations and `tracing` to report
//! reallocations and tombstones at the trace level.
//!
//! # Features
//! - `contiguous`: [`Vector`](collections::contiguous::Vector) and its storage.
//! - `hash`: [`LetterMap`](collections::hash::LetterMap).
//! - `demo`: the `scratch-demo` binary, which also pulls in `tracing-subscriber`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
#[doc(inline)]
pub use util::result::ResultExtension;
