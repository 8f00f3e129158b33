//! Destinations for copy-like algorithms.
use crate::prelude::*;
use std::iter::once;

/// Writes into a caller-owned slice, front to back.
///
/// The slice must be long enough for everything written:
/// writing past its end panics.
#[derive(Debug)]
pub struct SliceOutput<'a, T> {
    slice: &'a mut [T],
    position: usize,
}

impl<'a, T> SliceOutput<'a, T> {
    /// Start writing at the beginning of given slice.
    pub fn new(slice: &'a mut [T]) -> Self {
        SliceOutput { slice, position: 0 }
    }
    /// Index of next write, which is also the number of elements written so far.
    pub fn position(&self) -> usize {
        self.position
    }
    /// Give back the written part of the slice.
    pub fn into_written(self) -> &'a mut [T] {
        let (written, _) = self.slice.split_at_mut(self.position);
        written
    }
}

impl<'a, T> OutputCursor<T> for SliceOutput<'a, T> {
    fn write(&mut self, value: T) {
        self.slice[self.position] = value;
        self.position += 1;
    }
}

/// Appends everything written to a collection.
#[derive(Debug)]
pub struct BackInserter<'a, E> {
    collection: &'a mut E,
    written: usize,
}

impl<'a, E> BackInserter<'a, E> {
    /// Append to given collection.
    pub fn new(collection: &'a mut E) -> Self {
        BackInserter {
            collection,
            written: 0,
        }
    }
    /// How many values we appended.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<'a, V, E: Extend<V>> OutputCursor<V> for BackInserter<'a, E> {
    fn write(&mut self, value: V) {
        self.collection.extend(once(value));
        self.written += 1;
    }
}
