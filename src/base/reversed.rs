//! Back to front traversal.
use crate::prelude::*;

/// Adapter traversing a bidirectional range backward.
///
/// Like a conventional reverse iterator, a `Reversed` cursor keeps the
/// position *after* the one it reads. The reversed range of `(first, last)`
/// is thus `(Reversed::new(last), Reversed::new(first))`.
///
/// # Example
///
/// ```
/// use accumulate::prelude::*;
/// use accumulate::{accumulate, cursors};
/// let v = vec![1, 2, 3];
/// let (first, last) = cursors(&v);
/// let backward = accumulate(last.reversed(), first.reversed(), Vec::new(), |mut r, e| {
///     r.push(*e);
///     r
/// });
/// assert_eq!(backward, vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C> {
    base: C,
}

impl<C: BidirectionalCursor> Reversed<C> {
    /// Reversed cursor reading the element just before `base`.
    pub fn new(base: C) -> Self {
        Reversed { base }
    }
    /// Underlying forward position (one after the element we read).
    pub fn base(&self) -> &C {
        &self.base
    }
    /// Position of the element we read, in the underlying range.
    pub fn current(&self) -> C {
        self.base.clone().predecessor()
    }
}

impl<C: BidirectionalCursor> Cursor for Reversed<C> {
    type Item = C::Item;
    fn read(&self) -> C::Item {
        self.current().read()
    }
    fn advance(&mut self) {
        self.base.retreat()
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for Reversed<C> {
    fn retreat(&mut self) {
        self.base.advance()
    }
}
