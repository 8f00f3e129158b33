//! Cursors on slices.
use crate::prelude::*;
use std::fmt;

/// A position inside a borrowed slice.
///
/// Two cursors are equal when they point at the same index of the same slice.
/// # Example:
/// ```
/// use accumulate::prelude::*;
/// use accumulate::cursors;
/// let v = vec![5, 6];
/// let (first, last) = cursors(&v);
/// assert_eq!(*first.read(), 5);
/// assert!(first.successor().successor() == last);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at given index of given slice. `index` may be `slice.len()`.
    pub fn new(slice: &'a [T], index: usize) -> Self {
        debug_assert!(index <= slice.len());
        SliceCursor { slice, index }
    }
    /// Our index in the slice.
    pub fn index(&self) -> usize {
        self.index
    }
    /// The slice we traverse.
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }
}

/// Return the `(first, last)` pair of cursors covering the whole slice.
pub fn cursors<T>(slice: &[T]) -> (SliceCursor<T>, SliceCursor<T>) {
    (SliceCursor::new(slice, 0), SliceCursor::new(slice, slice.len()))
}

// derives would require T: Clone and T: PartialEq
impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.slice, other.slice)
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> {}

impl<'a, T> fmt::Debug for SliceCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;
    fn read(&self) -> &'a T {
        &self.slice[self.index]
    }
    fn advance(&mut self) {
        self.index += 1;
    }
}

impl<'a, T> BidirectionalCursor for SliceCursor<'a, T> {
    fn retreat(&mut self) {
        self.index -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_on_different_slices_differ() {
        let v = vec![1, 2, 3];
        let (whole, _) = cursors(&v);
        let (tail, _) = cursors(&v[1..]);
        assert!(whole.successor() != tail);
        assert_eq!(whole.successor().read(), tail.read());
    }

    #[test]
    fn walking_back_and_forth() {
        let v = vec!['a', 'b'];
        let (first, last) = cursors(&v);
        assert_eq!(last.predecessor().read(), &'b');
        assert!(first.successor().predecessor() == first);
        assert_eq!(last.index(), 2);
    }

    #[test]
    fn empty_slice_is_an_empty_range() {
        let v: Vec<u8> = Vec::new();
        let (first, last) = cursors(&v);
        assert!(first == last);
    }
}
