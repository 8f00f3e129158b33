//! Traversal positions.
use crate::base::{Cloned, Reversed};

/// A position in a sequence which can be read and moved forward.
///
/// A range is a pair of cursors `(first, last)` of the same type where `last`
/// is reachable from `first` by a finite number of calls to `advance`.
/// `last` itself is never read.
///
/// Items are produced by value: cursors on slices produce `&'a T` so reading is
/// free and the produced reference outlives the cursor.
pub trait Cursor: Clone + PartialEq {
    /// What we read at each position.
    type Item;
    /// Read the item at current position.
    /// Reading a past-the-end position is a caller bug.
    fn read(&self) -> Self::Item;
    /// Move one step forward.
    fn advance(&mut self);
    /// Consume and return the next position.
    fn successor(mut self) -> Self {
        self.advance();
        self
    }
    /// Turn a cursor on references into a cursor on owned clones.
    ///
    /// # Example
    ///
    /// ```
    /// use accumulate::prelude::*;
    /// use accumulate::{cursors, copy, SliceOutput};
    /// let input = vec![1, 2, 3];
    /// let mut output = vec![0; 3];
    /// let (first, last) = cursors(&input);
    /// let written = copy(first.cloned(), last.cloned(), SliceOutput::new(&mut output)).position();
    /// assert_eq!(written, 3);
    /// assert_eq!(output, input);
    /// ```
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Cursor<Item = &'a T>,
        T: 'a + Clone,
    {
        Cloned::new(self)
    }
}

/// A cursor which can also move backward.
pub trait BidirectionalCursor: Cursor {
    /// Move one step backward.
    /// Retreating from the beginning of a range is a caller bug.
    fn retreat(&mut self);
    /// Consume and return the previous position.
    fn predecessor(mut self) -> Self {
        self.retreat();
        self
    }
    /// Wrap us to traverse back to front. See [`Reversed`].
    fn reversed(self) -> Reversed<Self> {
        Reversed::new(self)
    }
}
