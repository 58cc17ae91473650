//! A module containing [`LetterMap`] and associtated types.
//!
//! Alongside the map itself, this module includes [`Slot`] and [`SlotState`] for inspecting the
//! table, [`MapError`] for the outcomes of failed operations and types for borrowed and owned
//! iteration over the entries, keys or values in a map.
//!
//! [`LetterMap`] is also re-exported under the parent module.

mod error;
mod iter;
mod letter_map;
mod slot;
mod tests;

pub use error::*;
pub use iter::*;
pub use letter_map::*;
pub use slot::*;
