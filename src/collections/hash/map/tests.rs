#![cfg(test)]

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use super::*;
use crate::util::panic::assert_panics;
use crate::util::result::ResultExtension;

/// A shared in-memory log writer for a test subscriber.
#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = CapturedOutput;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Builds a key with `letter`'s home index.
fn key_ending_in(prefix: &str, letter: char) -> String {
    format!("{prefix}{letter}")
}

#[test]
fn test_hash_function() {
    assert_eq!(LetterMap::<()>::home_index("cat"), Ok(19));
    assert_eq!(LetterMap::<()>::home_index("a"), Ok(0));
    assert_eq!(LetterMap::<()>::home_index("z"), Ok(25));
    assert_eq!(LetterMap::<()>::home_index("Cat"), Ok(19), "Only the last character matters.");
    assert_eq!(LetterMap::<()>::home_index(""), Err(MapError::EmptyKey));
    assert_eq!(LetterMap::<()>::home_index("k9"), Err(MapError::UnhashableKey));
    assert_eq!(LetterMap::<()>::home_index("caT"), Err(MapError::UnhashableKey));
    assert_eq!(
        LetterMap::<()>::home_index("café"),
        Err(MapError::UnhashableKey),
        "Multi-byte characters aren't hashable."
    );
}

#[test]
fn test_empty_map() {
    let map: LetterMap<u32> = LetterMap::new();
    assert!(map.is_empty());
    assert!(map.slots().iter().all(Slot::is_empty), "All slots should start empty.");

    assert_eq!(map.get("cat"), Err(MapError::KeyNotFound));
    assert_eq!(map.get("Cat"), Err(MapError::KeyNotFound));
    assert_eq!(map.get(""), Err(MapError::EmptyKey));
    assert_eq!(map.get("k9"), Err(MapError::UnhashableKey));
    assert_eq!(map.contains("cat"), Ok(false));
    assert_eq!(map.contains(""), Err(MapError::EmptyKey));
}

#[test]
fn test_insert_update() {
    let mut map = LetterMap::new();
    assert_eq!(map.insert("cat", 1), Ok(None));
    assert_eq!(map.insert("cat", 2), Ok(Some(1)), "Reinserting a key should update it in place.");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("cat"), Ok(&2));

    *map.get_mut("cat").throw() += 10;
    assert_eq!(map.get("cat"), Ok(&12));

    assert_eq!(map.insert("", 0), Err(MapError::EmptyKey));
    assert_eq!(map.insert("dog!", 0), Err(MapError::UnhashableKey));
    assert_eq!(map.len(), 1, "Failed insertions shouldn't add entries.");
}

#[test]
fn test_hash_collisions() {
    let mut map = LetterMap::new();
    map.insert("cat", 1).throw();
    map.insert("bat", 2).throw();
    map.insert("rat", 3).throw();

    assert_eq!(map.slots()[19].key(), Some("cat"));
    assert_eq!(map.slots()[20].key(), Some("bat"), "Collisions should use the next slot.");
    assert_eq!(map.slots()[21].key(), Some("rat"));

    assert_eq!(map.get("bat"), Ok(&2), "Lookup should compare keys rather than stop early.");
    assert_eq!(map.get("rat"), Ok(&3));
    assert_eq!(map.get("hat"), Err(MapError::KeyNotFound));

    assert_eq!(map.delete("cat"), Ok(1));
    assert_eq!(map.slots()[19].state(), SlotState::Tombstone);
    assert_eq!(map.get("bat"), Ok(&2), "A tombstone shouldn't break the probe sequence.");
    assert_eq!(map.get("rat"), Ok(&3));
    assert_eq!(map.get("cat"), Err(MapError::KeyNotFound));
    assert_eq!(map.delete("cat"), Err(MapError::KeyNotFound));

    assert_eq!(map.insert("rat", 4), Ok(Some(3)), "Updates should find keys past tombstones.");
    assert_eq!(map.slots()[19].state(), SlotState::Tombstone, "An update shouldn't move keys.");

    assert_eq!(map.insert("hat", 5), Ok(None));
    assert_eq!(map.slots()[19].key(), Some("hat"), "New keys should reuse the first tombstone.");
    assert_eq!(map.len(), 3);
}

#[test]
fn test_wrapping() {
    let mut map = LetterMap::new();
    map.insert("y", 'y').throw();
    map.insert("z", 'z').throw();
    map.insert("zz", 'Z').throw();
    map.insert("yy", 'Y').throw();

    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        ["zz", "yy", "y", "z"],
        "Probing should wrap around the end of the table."
    );
    assert_eq!(map.get("yy"), Ok(&'Y'));
}

#[test]
fn test_full_map() {
    let mut map = LetterMap::new();
    for i in 0..SLOT_COUNT {
        assert_eq!(map.insert(key_ending_in(&i.to_string(), 'q'), i), Ok(None));
    }
    assert_eq!(map.len(), SLOT_COUNT);
    assert!(map.slots().iter().all(Slot::is_occupied));

    assert_eq!(map.insert("last", 99), Err(MapError::MapFull));
    assert_eq!(map.insert("0q", 100), Ok(Some(0)), "Updating a full map should still work.");
    assert_eq!(map.get("25q"), Ok(&25), "Every slot should be reachable from one home index.");
    assert_eq!(map.get("nope"), Err(MapError::KeyNotFound), "Exhausted probing isn't found.");

    assert_eq!(map.delete("13q"), Ok(13));
    assert_eq!(map.get("notq"), Err(MapError::KeyNotFound));
    assert_eq!(map.insert("last", 99), Ok(None), "A tombstone should make room in a full map.");
    assert_eq!(map.get("last"), Ok(&99));
}

#[test]
fn test_tombstones_persist() {
    let mut map = LetterMap::new();
    for letter in 'a'..='z' {
        map.insert(key_ending_in("x", letter), letter).throw();
    }
    for letter in 'a'..='z' {
        map.delete(&key_ending_in("x", letter)).throw();
    }

    assert!(map.is_empty());
    assert!(
        map.slots().iter().all(Slot::is_tombstone),
        "Deleted slots should never revert to empty."
    );
    assert_eq!(
        map.get("xa"),
        Err(MapError::KeyNotFound),
        "A table of tombstones should be searched fully."
    );

    map.clear();
    assert!(map.slots().iter().all(Slot::is_empty), "Clear should reset every slot.");
}

#[test]
fn test_sentinel_words_are_keys() {
    let mut map = LetterMap::new();
    map.insert("occupied", 1).throw();
    map.insert("tombstone", 2).throw();
    map.insert("never used", 3).throw();

    assert_eq!(map.get("occupied"), Ok(&1));
    assert_eq!(map.get("tombstone"), Ok(&2));
    assert_eq!(map.get("never used"), Ok(&3));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_iterators_and_fmt() {
    let mut map = LetterMap::new();
    map.insert("cat", 1).throw();
    map.insert("dog", 2).throw();
    map.insert("bat", 3).throw();
    map.delete("cat").throw();

    assert_eq!(map.iter().len(), 2);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [2, 3]);
    assert_eq!(map.to_string(), "{dog: 2, bat: 3}");

    let debug = format!("{map:?}");
    assert!(debug.starts_with("LetterMap { slots: [-, -, -, -, -, -, (\"dog\": 2), -,"));
    assert!(debug.contains("x, (\"bat\": 3)"), "Tombstones should be visible when debugging.");

    let owned: Vec<_> = map.into_iter().collect();
    assert_eq!(owned, [("dog".to_string(), 2), ("bat".to_string(), 3)]);
}

#[test]
fn test_equality() {
    let mut a = LetterMap::new();
    a.insert("cat", 1).throw();
    a.insert("bat", 2).throw();

    let mut b = LetterMap::new();
    b.insert("bat", 2).throw();
    b.insert("cat", 1).throw();
    assert_ne!(a.slots(), b.slots(), "Colliding keys should land in the order they're inserted.");
    assert_eq!(a, b, "Maps with the same entries should be equal regardless of insertion order.");

    b.insert("hat", 3).throw();
    b.delete("hat").throw();
    assert_eq!(a, b, "Tombstones shouldn't affect equality.");

    b.insert("cat", 5).throw();
    assert_ne!(a, b);
    b.delete("cat").throw();
    assert_ne!(a, b);
    assert_eq!(LetterMap::<u8>::new(), LetterMap::default());
}

#[test]
fn test_errors_are_not_logged() {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(output.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut map = LetterMap::new();
        for i in 0..SLOT_COUNT {
            map.insert(key_ending_in(&i.to_string(), 'e'), i).throw();
        }
        assert_eq!(map.insert("full", 0), Err(MapError::MapFull));
        assert_eq!(map.get("missing"), Err(MapError::KeyNotFound));
        assert_eq!(map.get(""), Err(MapError::EmptyKey));
        map.delete("0e").throw();
    });

    let logs = output.contents();
    assert!(logs.contains("left tombstone in letter map"), "Tombstoning should be traced.");
    assert_eq!(logs.lines().count(), 1, "Failed operations shouldn't emit anything: {logs}");
}

#[test]
fn test_errors() {
    assert_eq!(MapError::KeyNotFound.to_string(), "The key does not exist!");
    assert!(MapError::MapFull.is_map_full());

    let map: LetterMap<()> = LetterMap::new();
    assert!(map.get("cat").is_err());
    assert_panics!({ map.get("cat").throw(); }, "Unpacking a failure should panic.");
}
