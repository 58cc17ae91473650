use derive_more::{Display, IsVariant};

/// One entry in the table of a [`LetterMap`](super::LetterMap).
///
/// The variant is the slot's state, and only an occupied slot carries a key and value, so a key
/// can never be mistaken for a state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, IsVariant)]
pub enum Slot<V> {
    /// The slot has never held an entry. Probing stops here.
    Empty,
    /// The slot held an entry that has since been deleted. Probing continues past it and
    /// insertion may reuse it.
    Tombstone,
    /// The slot holds a live entry.
    Occupied {
        /// The full key, compared against during probing.
        key: String,
        /// The value associated with `key`.
        value: V,
    },
}

/// The state of a [`Slot`], without its contents.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SlotState {
    /// See [`Slot::Empty`].
    #[display("empty")]
    Empty,
    /// See [`Slot::Tombstone`].
    #[display("tombstone")]
    Tombstone,
    /// See [`Slot::Occupied`].
    #[display("occupied")]
    Occupied,
}

impl<V> Slot<V> {
    /// Returns the state of the slot.
    pub const fn state(&self) -> SlotState {
        match self {
            Slot::Empty => SlotState::Empty,
            Slot::Tombstone => SlotState::Tombstone,
            Slot::Occupied { .. } => SlotState::Occupied,
        }
    }

    /// Returns the key and value of an occupied slot.
    pub fn entry(&self) -> Option<(&str, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((key.as_str(), value)),
            _ => None,
        }
    }

    /// Returns the key of an occupied slot.
    pub fn key(&self) -> Option<&str> {
        self.entry().map(|(k, _)| k)
    }

    /// Returns the value of an occupied slot.
    pub fn value(&self) -> Option<&V> {
        self.entry().map(|(_, v)| v)
    }

    /// Consumes the slot, returning the key and value if it was occupied.
    pub fn into_entry(self) -> Option<(String, V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }

    /// Returns true if the slot is occupied with exactly `key`.
    pub(crate) fn holds(&self, key: &str) -> bool {
        matches!(self, Slot::Occupied { key: existing, .. } if existing == key)
    }
}
