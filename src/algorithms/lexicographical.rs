//! Comparing two ranges: lexicographic order and permutation equivalence.
//!
//! Both algorithms fold range 1 while reading range 2 by position and stop
//! the fold as soon as the answer is known.
use super::non_modifying::{count_if, mismatch_by};
use crate::fold::{advance_by, distance, try_accumulate, try_accumulate_iter};
use crate::prelude::*;
use std::ops::ControlFlow;

/// Is `[first1, last1)` lexicographically less than `[first2, last2)` ?
///
/// Items are compared pairwise until one is less than the other.
/// If one range is a prefix of the other, the shorter is less.
/// Nothing past the deciding pair is read.
pub fn lexicographical_compare_by<C1, C2, L>(
    first1: C1,
    last1: C1,
    first2: C2,
    last2: C2,
    mut less: L,
) -> bool
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    L: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let flow = try_accumulate(first1, last1, first2, |position2, item| {
        if position2 == last2 {
            return ControlFlow::Break(false);
        }
        let other = position2.read();
        if less(&other, &item) {
            ControlFlow::Break(false)
        } else if less(&item, &other) {
            ControlFlow::Break(true)
        } else {
            ControlFlow::Continue(position2.successor())
        }
    });
    match flow {
        ControlFlow::Break(decision) => decision,
        ControlFlow::Continue(position2) => position2 != last2,
    }
}

/// [`lexicographical_compare_by`] with `<`.
///
/// # Example
///
/// ```
/// use accumulate::{cursors, lexicographical_compare};
/// let (a, b) = (vec![1, 2], vec![1, 2, 0]);
/// let ((first1, last1), (first2, last2)) = (cursors(&a), cursors(&b));
/// assert!(lexicographical_compare(first1, last1, first2, last2));
/// assert!(!lexicographical_compare(first2, last2, first1, last1));
/// ```
pub fn lexicographical_compare<C1, C2>(first1: C1, last1: C1, first2: C2, last2: C2) -> bool
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialOrd,
{
    lexicographical_compare_by(first1, last1, first2, last2, |a, b| a < b)
}

/// Is the range starting at `first2` a reordering of `[first1, last1)` ?
///
/// `eq` must be an equivalence relation. Range 2 must be at least as long as
/// range 1; only its first `distance(first1, last1)` items are considered.
pub fn is_permutation_by<C1, C2, E>(first1: C1, last1: C1, first2: C2, mut eq: E) -> bool
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    E: FnMut(&C1::Item, &C1::Item) -> bool,
{
    let (first1, first2) = mismatch_by(first1, last1.clone(), first2, &mut eq);
    if first1 == last1 {
        return true;
    }
    let last2 = advance_by(first2.clone(), distance(first1.clone(), last1.clone()));
    let flow = try_accumulate_iter(first1.clone(), last1.clone(), (), |(), position| {
        let value = position.read();
        if count_if(first1.clone(), position.clone(), |e| eq(e, &value)) != 0 {
            // already checked
            return ControlFlow::Continue(());
        }
        let expected = count_if(first2.clone(), last2.clone(), |e| eq(&value, e));
        if expected != 0 && count_if(position, last1.clone(), |e| eq(e, &value)) == expected {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    });
    flow == ControlFlow::Continue(())
}

/// [`is_permutation_by`] with `==`.
///
/// # Example
///
/// ```
/// use accumulate::{cursors, is_permutation};
/// let (a, b) = (vec![1, 2, 2, 3], vec![3, 2, 1, 2]);
/// let ((first1, last1), (first2, _)) = (cursors(&a), cursors(&b));
/// assert!(is_permutation(first1, last1, first2));
/// ```
pub fn is_permutation<C1, C2>(first1: C1, last1: C1, first2: C2) -> bool
where
    C1: Cursor,
    C2: Cursor<Item = C1::Item>,
    C1::Item: PartialEq,
{
    is_permutation_by(first1, last1, first2, |a, b| a == b)
}
