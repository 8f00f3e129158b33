//! Searching and counting without touching the range.
use crate::fold::{accumulate, settle, try_accumulate_iter};
use crate::prelude::*;
use std::ops::ControlFlow;

/// Number of items satisfying `pred`.
pub fn count_if<C, P>(first: C, last: C, mut pred: P) -> usize
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    accumulate(first, last, 0, |count, item| {
        if pred(&item) {
            count + 1
        } else {
            count
        }
    })
}

/// Number of items equal to `value`.
///
/// # Example
///
/// ```
/// use accumulate::{count, cursors};
/// let v = vec![1, 3, 1, 2];
/// let (first, last) = cursors(&v);
/// assert_eq!(count(first, last, &1), 2);
/// ```
pub fn count<C>(first: C, last: C, value: C::Item) -> usize
where
    C: Cursor,
    C::Item: PartialEq,
{
    count_if(first, last, |item| *item == value)
}

/// First position satisfying `pred`, or `last`.
pub fn find_if<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    let end = last.clone();
    settle(try_accumulate_iter(first, last, end, |end, position| {
        if pred(&position.read()) {
            ControlFlow::Break(position)
        } else {
            ControlFlow::Continue(end)
        }
    }))
}

/// First position not satisfying `pred`, or `last`.
pub fn find_if_not<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    find_if(first, last, |item| !pred(item))
}

/// First position holding `value`, or `last`.
pub fn find<C>(first: C, last: C, value: C::Item) -> C
where
    C: Cursor,
    C::Item: PartialEq,
{
    find_if(first, last, |item| *item == value)
}

/// First position `i` such that `pred(*i, *(i+1))`, or `last`.
pub fn adjacent_find_by<C, P>(first: C, last: C, mut pred: P) -> C
where
    C: Cursor,
    P: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return last;
    }
    let end = last.clone();
    let second = first.clone().successor();
    let flow = try_accumulate_iter(second, last, first, |previous, position| {
        if pred(&previous.read(), &position.read()) {
            ControlFlow::Break(previous)
        } else {
            ControlFlow::Continue(position)
        }
    });
    match flow {
        ControlFlow::Break(found) => found,
        ControlFlow::Continue(_) => end,
    }
}

/// First position of two consecutive equal items, or `last`.
pub fn adjacent_find<C>(first: C, last: C) -> C
where
    C: Cursor,
    C::Item: PartialEq,
{
    adjacent_find_by(first, last, |a, b| a == b)
}

/// Walk `[first1, last1)` and the range starting at `first2` together and
/// return the first pair of positions where `eq` fails.
/// If there is none, return `last1` and the matching position in range 2.
///
/// Range 2 must be at least as long as range 1.
pub fn mismatch_by<C1, C2, E>(first1: C1, last1: C1, first2: C2, mut eq: E) -> (C1, C2)
where
    C1: Cursor,
    C2: Cursor,
    E: FnMut(&C1::Item, &C2::Item) -> bool,
{
    let end = last1.clone();
    let flow = try_accumulate_iter(first1, last1, first2, |position2, position1| {
        if eq(&position1.read(), &position2.read()) {
            ControlFlow::Continue(position2.successor())
        } else {
            ControlFlow::Break((position1, position2))
        }
    });
    match flow {
        ControlFlow::Break(positions) => positions,
        ControlFlow::Continue(position2) => (end, position2),
    }
}

/// [`mismatch_by`] with `==`.
///
/// # Example
///
/// ```
/// use accumulate::{cursors, mismatch};
/// let (v, w) = (vec![1, 2, 3], vec![1, 2, 4]);
/// let ((first1, last1), (first2, _)) = (cursors(&v), cursors(&w));
/// let (i, j) = mismatch(first1, last1, first2);
/// assert_eq!((i.index(), j.index()), (2, 2));
/// ```
pub fn mismatch<C1, C2>(first1: C1, last1: C1, first2: C2) -> (C1, C2)
where
    C1: Cursor,
    C2: Cursor,
    C1::Item: PartialEq<C2::Item>,
{
    mismatch_by(first1, last1, first2, |a, b| a == b)
}

/// Do both ranges hold equivalent items ? Range 2 must be at least as long as range 1.
pub fn equal_by<C1, C2, E>(first1: C1, last1: C1, first2: C2, eq: E) -> bool
where
    C1: Cursor,
    C2: Cursor,
    E: FnMut(&C1::Item, &C2::Item) -> bool,
{
    let end = last1.clone();
    mismatch_by(first1, last1, first2, eq).0 == end
}

/// [`equal_by`] with `==`.
pub fn equal<C1, C2>(first1: C1, last1: C1, first2: C2) -> bool
where
    C1: Cursor,
    C2: Cursor,
    C1::Item: PartialEq<C2::Item>,
{
    equal_by(first1, last1, first2, |a, b| a == b)
}

/// Call `f` on each item. Return `f` back.
pub fn for_each<C, F>(first: C, last: C, f: F) -> F
where
    C: Cursor,
    F: FnMut(C::Item),
{
    accumulate(first, last, f, |mut f, item| {
        f(item);
        f
    })
}

/// Does every item satisfy `pred` ? True on empty ranges.
pub fn all_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    let end = last.clone();
    find_if_not(first, last, pred) == end
}

/// Does some item satisfy `pred` ? False on empty ranges.
pub fn any_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    !none_of(first, last, pred)
}

/// Does no item satisfy `pred` ? True on empty ranges.
pub fn none_of<C, P>(first: C, last: C, pred: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    let end = last.clone();
    find_if(first, last, pred) == end
}
