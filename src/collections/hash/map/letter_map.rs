use std::array;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use tracing::trace;

use super::{Iter, Keys, MapError, MapResult, Slot, Values};
use crate::util::fmt::{DebugRaw, DebugWith};

/// The number of slots in a [`LetterMap`], one for each lowercase ASCII letter.
pub const SLOT_COUNT: usize = 26;

const FIRST_LETTER: u8 = b'a';

/// A map of string keys to values, stored in a fixed table of [`SLOT_COUNT`] slots using open
/// addressing.
///
/// A key hashes to the position of its last character in the alphabet, so only keys ending in a
/// lowercase ASCII letter are accepted. Collisions are resolved with linear probing (wrapping
/// around the end of the table) and deleted entries leave a [`Slot::Tombstone`] behind, so that
/// other keys which probed past them can still be found.
///
/// The table never grows. Once every slot holds a live entry, inserting a new key fails with
/// [`MapError::MapFull`].
///
/// All operations report failure through [`MapResult`] rather than panicking.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `s`: The number of slots in the table, [`SLOT_COUNT`].
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `home_index` | `O(1)` |
/// | `insert` | `O(1)`*, `O(s)` |
/// | `get` | `O(1)`*, `O(s)` |
/// | `delete` | `O(1)`*, `O(s)` |
/// | `contains` | `O(1)`*, `O(s)` |
/// | `clear` | `O(s)` |
///
/// \* Without collisions. Each colliding key or tombstone along the probe sequence adds a step.
#[derive(Clone)]
pub struct LetterMap<V> {
    pub(crate) slots: [Slot<V>; SLOT_COUNT],
    pub(crate) len: usize,
}

impl<V> LetterMap<V> {
    /// Creates a new LetterMap with every slot empty.
    pub fn new() -> LetterMap<V> {
        LetterMap {
            slots: array::from_fn(|_| Slot::Empty),
            len: 0,
        }
    }

    /// Returns the number of live entries in the LetterMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LetterMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the LetterMap, which is always [`SLOT_COUNT`].
    pub const fn cap(&self) -> usize {
        SLOT_COUNT
    }

    /// Returns the whole table, including empty slots and tombstones. Useful for inspecting
    /// where entries ended up after probing.
    pub const fn slots(&self) -> &[Slot<V>; SLOT_COUNT] {
        &self.slots
    }

    /// Calculates the home index of `key`: the slot that is checked first when probing.
    ///
    /// # Errors
    /// - [`MapError::EmptyKey`] if `key` is empty.
    /// - [`MapError::UnhashableKey`] if the last character of `key` isn't a lowercase ASCII
    ///   letter.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::hash::LetterMap;
    /// # use scratch_collections::collections::hash::map::MapError;
    /// assert_eq!(LetterMap::<()>::home_index("cat"), Ok(19));
    /// assert_eq!(LetterMap::<()>::home_index("Cat"), Ok(19));
    /// assert_eq!(LetterMap::<()>::home_index(""), Err(MapError::EmptyKey));
    /// assert_eq!(LetterMap::<()>::home_index("k9"), Err(MapError::UnhashableKey));
    /// ```
    pub fn home_index(key: &str) -> MapResult<usize> {
        let last = *key.as_bytes().last().ok_or(MapError::EmptyKey)?;

        if !last.is_ascii_lowercase() {
            return Err(MapError::UnhashableKey);
        }

        Ok(usize::from(last - FIRST_LETTER))
    }

    /// Inserts the provided `key`-`value` pair. If the key already has an entry, its value is
    /// replaced in place and the previous value is returned.
    ///
    /// A new entry goes in the first empty slot or tombstone along the key's probe sequence, but
    /// only after the sequence has been checked for an existing entry with the same key.
    ///
    /// # Errors
    /// - [`MapError::EmptyKey`] or [`MapError::UnhashableKey`] if `key` can't be hashed.
    /// - [`MapError::MapFull`] if the key doesn't have an entry and every slot is occupied.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::hash::LetterMap;
    /// let mut map = LetterMap::new();
    /// assert_eq!(map.insert("cat", 1), Ok(None));
    /// assert_eq!(map.insert("bat", 2), Ok(None));
    /// assert_eq!(map.insert("cat", 3), Ok(Some(1)));
    /// assert_eq!(map.get("cat"), Ok(&3));
    /// assert_eq!(map.get("bat"), Ok(&2));
    /// ```
    pub fn insert<K: Into<String>>(&mut self, key: K, value: V) -> MapResult<Option<V>> {
        let key = key.into();
        let home = Self::home_index(&key)?;

        // The first slot that a new entry could go in, if the key doesn't exist already.
        let mut vacant = None;

        for index in Self::probe(home) {
            match &mut self.slots[index] {
                Slot::Occupied { key: existing, value: old } if *existing == key => {
                    return Ok(Some(mem::replace(old, value)));
                },
                Slot::Occupied { .. } => {},
                Slot::Tombstone => {
                    vacant = vacant.or(Some(index));
                },
                Slot::Empty => {
                    // No entry is ever placed past an empty slot, so the key can't be further on.
                    vacant = vacant.or(Some(index));
                    break;
                },
            }
        }

        let Some(index) = vacant else {
            return Err(MapError::MapFull);
        };

        self.slots[index] = Slot::Occupied { key, value };
        self.len += 1;
        Ok(None)
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// - [`MapError::EmptyKey`] or [`MapError::UnhashableKey`] if `key` can't be hashed.
    /// - [`MapError::KeyNotFound`] if there is no entry for `key`.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::hash::LetterMap;
    /// # use scratch_collections::collections::hash::map::MapError;
    /// let map: LetterMap<u8> = LetterMap::new();
    /// assert_eq!(map.get("cat"), Err(MapError::KeyNotFound));
    /// assert_eq!(map.get(""), Err(MapError::EmptyKey));
    /// ```
    pub fn get(&self, key: &str) -> MapResult<&V> {
        let index = self.find_index(key)?;

        self.slots[index].value().ok_or(MapError::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// The same as [`LetterMap::get`].
    pub fn get_mut(&mut self, key: &str) -> MapResult<&mut V> {
        let index = self.find_index(key)?;

        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Ok(value),
            _ => Err(MapError::KeyNotFound),
        }
    }

    /// Returns true if there is an entry for `key`.
    ///
    /// # Errors
    /// [`MapError::EmptyKey`] or [`MapError::UnhashableKey`] if `key` can't be hashed. A missing
    /// key isn't an error here, it just returns `Ok(false)`.
    pub fn contains(&self, key: &str) -> MapResult<bool> {
        match self.find_index(key) {
            Ok(_) => Ok(true),
            Err(MapError::KeyNotFound) => Ok(false),
            Err(error) => Err(error),
        }
    }

    /// Removes the entry for `key`, returning its value. The slot becomes a tombstone, so that keys
    /// which probed past it are still reachable.
    ///
    /// # Errors
    /// - [`MapError::EmptyKey`] or [`MapError::UnhashableKey`] if `key` can't be hashed.
    /// - [`MapError::KeyNotFound`] if there is no entry for `key`.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::hash::LetterMap;
    /// # use scratch_collections::collections::hash::map::{MapError, SlotState};
    /// let mut map = LetterMap::new();
    /// map.insert("cat", 1).unwrap();
    /// map.insert("bat", 2).unwrap();
    /// assert_eq!(map.delete("cat"), Ok(1));
    /// assert_eq!(map.slots()[19].state(), SlotState::Tombstone);
    /// assert_eq!(map.get("bat"), Ok(&2));
    /// assert_eq!(map.delete("cat"), Err(MapError::KeyNotFound));
    /// ```
    pub fn delete(&mut self, key: &str) -> MapResult<V> {
        let index = self.find_index(key)?;

        let (_, value) = mem::replace(&mut self.slots[index], Slot::Tombstone)
            .into_entry()
            .ok_or(MapError::KeyNotFound)?;

        trace!(key, index, "left tombstone in letter map");
        self.len -= 1;
        Ok(value)
    }

    /// Removes all entries, returning every slot (tombstones included) to empty.
    pub fn clear(&mut self) {
        self.slots = array::from_fn(|_| Slot::Empty);
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the LetterMap, as references, in slot order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the LetterMap, in slot order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the LetterMap, in slot order.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }
}

impl<V> LetterMap<V> {
    /// Produces the linear probe sequence starting at `home`, visiting every slot once.
    pub(crate) fn probe(home: usize) -> impl Iterator<Item = usize> {
        (0..SLOT_COUNT).map(move |step| (home + step) % SLOT_COUNT)
    }

    /// Finds the index of the slot holding exactly `key`. Probing skips tombstones and other keys,
    /// and gives up at the first empty slot or after visiting every slot.
    pub(crate) fn find_index(&self, key: &str) -> MapResult<usize> {
        let home = Self::home_index(key)?;

        for index in Self::probe(home) {
            match &self.slots[index] {
                slot if slot.holds(key) => return Ok(index),
                Slot::Empty => break,
                _ => {},
            }
        }

        Err(MapError::KeyNotFound)
    }
}

impl<V> Default for LetterMap<V> {
    fn default() -> Self {
        LetterMap::new()
    }
}

/// Two LetterMaps are equal when they hold the same entries, regardless of which slots the entries
/// ended up in or where tombstones were left.
impl<V: PartialEq> PartialEq for LetterMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(key) == Ok(value))
    }
}

impl<V: Eq> Eq for LetterMap<V> {}

impl<V: Debug> Debug for LetterMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LetterMap")
            .field("slots", &DebugWith(|f: &mut Formatter<'_>| f.debug_list().entries(
                self.slots.iter()
                    .map(|slot| DebugRaw(match slot {
                        Slot::Empty => "-".into(),
                        Slot::Tombstone => "x".into(),
                        Slot::Occupied { key, value } => format!("({key:?}: {value:?})"),
                    }))
            ).finish()))
            .field("len", &self.len)
            .finish()
    }
}

impl<V: Display> Display for LetterMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}
