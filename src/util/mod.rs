#![warn(missing_docs)]

pub mod error;
pub mod fmt;
pub mod result;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod panic;
