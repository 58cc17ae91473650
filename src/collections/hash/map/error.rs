use derive_more::{Display, Error, IsVariant};

/// The reasons an operation on a [`LetterMap`](super::LetterMap) can fail. None of these are
/// fatal, they are returned to the caller to handle.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum MapError {
    /// The key has no characters, so there is no last character to hash.
    #[display("The key provided is empty!")]
    EmptyKey,
    /// The key's last character isn't a lowercase ASCII letter.
    #[display("The key is not hashable, it must end with a lowercase letter!")]
    UnhashableKey,
    /// No entry exists for the key.
    #[display("The key does not exist!")]
    KeyNotFound,
    /// Every slot holds a different key, so there is nowhere to put a new one.
    #[display("The map is full!")]
    MapFull,
}

/// The result of an operation on a [`LetterMap`](super::LetterMap).
pub type MapResult<T> = Result<T, MapError>;
