//! Copying and transforming into output cursors, reversing in place.
//!
//! The accumulator of all these folds is the output cursor itself:
//! each step writes and hands the advanced cursor to the next one.
//! Outputs must have room for everything written.
use crate::base::Reversed;
use crate::fold::accumulate;
use crate::prelude::*;

/// Write all items of `[first, last)` to `output`.
pub fn copy<C, O>(first: C, last: C, output: O) -> O
where
    C: Cursor,
    O: OutputCursor<C::Item>,
{
    accumulate(first, last, output, |mut output, item| {
        output.write(item);
        output
    })
}

/// Write items satisfying `pred` to `output`.
pub fn copy_if<C, O, P>(first: C, last: C, output: O, mut pred: P) -> O
where
    C: Cursor,
    O: OutputCursor<C::Item>,
    P: FnMut(&C::Item) -> bool,
{
    accumulate(first, last, output, |mut output, item| {
        if pred(&item) {
            output.write(item);
        }
        output
    })
}

/// Write `op(item)` for each item to `output`.
///
/// # Example
///
/// ```
/// use accumulate::{cursors, transform, BackInserter};
/// let v = vec![1, 2, 3];
/// let mut squares = Vec::new();
/// let (first, last) = cursors(&v);
/// transform(first, last, BackInserter::new(&mut squares), |e| e * e);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn transform<C, O, V, F>(first: C, last: C, output: O, mut op: F) -> O
where
    C: Cursor,
    O: OutputCursor<V>,
    F: FnMut(C::Item) -> V,
{
    accumulate(first, last, output, |mut output, item| {
        output.write(op(item));
        output
    })
}

/// Write `op(a, b)` for each pair of items at the same offset in both ranges.
/// Range 2 must be at least as long as range 1.
pub fn transform2<C1, C2, O, V, F>(first1: C1, last1: C1, first2: C2, output: O, mut op: F) -> O
where
    C1: Cursor,
    C2: Cursor,
    O: OutputCursor<V>,
    F: FnMut(C1::Item, C2::Item) -> V,
{
    let (_, output) = accumulate(
        first1,
        last1,
        (first2, output),
        |(position2, mut output), item| {
            output.write(op(item, position2.read()));
            (position2.successor(), output)
        },
    );
    output
}

/// Write items of `[first, last)` back to front.
pub fn reverse_copy<C, O>(first: C, last: C, output: O) -> O
where
    C: BidirectionalCursor,
    O: OutputCursor<C::Item>,
{
    copy(Reversed::new(last), Reversed::new(first), output)
}

/// Reverse the slice in place.
pub fn reverse<T>(range: &mut [T]) {
    let len = range.len();
    accumulate(0, len / 2, range, |range, i| {
        range.swap(i, len - 1 - i);
        range
    });
}
