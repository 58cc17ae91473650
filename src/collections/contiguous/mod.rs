//! Contiguous collection types. Namely [`Vector`] for a contiguous collection that varies in size
//! at runtime, and [`Buffer`], the owned storage it is built on.
#![warn(missing_docs)]

pub mod buffer;
pub mod vector;

#[doc(inline)]
pub use buffer::Buffer;
#[doc(inline)]
pub use vector::Vector;
