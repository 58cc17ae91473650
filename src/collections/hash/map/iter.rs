use std::array;
use std::iter::FusedIterator;
use std::slice;

use super::{LetterMap, Slot, SLOT_COUNT};

impl<V> IntoIterator for LetterMap<V> {
    type Item = (String, V);

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.slots.into_iter(),
        }
    }
}

/// A type for owned iteration over the entries of a [`LetterMap`], in slot order. See
/// [`LetterMap::into_iter`].
#[derive(Debug)]
pub struct IntoIter<V> {
    pub(crate) inner: array::IntoIter<Slot<V>, SLOT_COUNT>,
    pub(crate) len: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.by_ref().find_map(Slot::into_entry)?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<'a, V> IntoIterator for &'a LetterMap<V> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.slots.iter(),
        }
    }
}

/// A type for borrowed iteration over the entries of a [`LetterMap`], in slot order. See
/// [`LetterMap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    pub(crate) inner: slice::Iter<'a, Slot<V>>,
    pub(crate) len: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.by_ref().find_map(Slot::entry)?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// An iterator over the keys of a [`LetterMap`]. See [`LetterMap::keys`].
#[derive(Debug, Clone)]
pub struct Keys<'a, V>(pub(crate) Iter<'a, V>);

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// An iterator over the values of a [`LetterMap`]. See [`LetterMap::values`].
#[derive(Debug, Clone)]
pub struct Values<'a, V>(pub(crate) Iter<'a, V>);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
