//! Hash-based collection types. Currently only [`LetterMap`], a map with a fixed table of one slot
//! per lowercase letter.
#![warn(missing_docs)]

pub mod map;

#[doc(inline)]
pub use map::LetterMap;
