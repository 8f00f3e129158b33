//! Extremum selection.
//!
//! `less` is always a strict weak ordering. On ties the *earliest* position
//! wins, for minima as well as for maxima (`minmax_element` included).
use crate::base::cursors;
use crate::fold::{accumulate, accumulate_iter};
use crate::prelude::*;

/// Position of the first smallest item, or `last` if range is empty.
pub fn min_element_by<C, L>(first: C, last: C, mut less: L) -> C
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    accumulate_iter(first.clone(), last, first, |best, position| {
        if less(&position.read(), &best.read()) {
            position
        } else {
            best
        }
    })
}

/// Position of the first largest item, or `last` if range is empty.
pub fn max_element_by<C, L>(first: C, last: C, mut less: L) -> C
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    accumulate_iter(first.clone(), last, first, |best, position| {
        if less(&best.read(), &position.read()) {
            position
        } else {
            best
        }
    })
}

/// Positions of the first smallest and the first largest items, in one pass.
/// Both are `last` if range is empty.
pub fn minmax_element_by<C, L>(first: C, last: C, mut less: L) -> (C, C)
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    accumulate_iter(
        first.clone(),
        last,
        (first.clone(), first),
        |(min, max), position| {
            let item = position.read();
            let min = if less(&item, &min.read()) {
                position.clone()
            } else {
                min
            };
            let max = if less(&max.read(), &item) { position } else { max };
            (min, max)
        },
    )
}

/// [`min_element_by`] with `<`.
///
/// # Example
///
/// ```
/// use accumulate::{cursors, min_element};
/// let v = vec![3, 1, 2, 1];
/// let (first, last) = cursors(&v);
/// assert_eq!(min_element(first, last).index(), 1);
/// ```
pub fn min_element<C>(first: C, last: C) -> C
where
    C: Cursor,
    C::Item: PartialOrd,
{
    min_element_by(first, last, |a, b| a < b)
}

/// [`max_element_by`] with `<`.
pub fn max_element<C>(first: C, last: C) -> C
where
    C: Cursor,
    C::Item: PartialOrd,
{
    max_element_by(first, last, |a, b| a < b)
}

/// [`minmax_element_by`] with `<`.
pub fn minmax_element<C>(first: C, last: C) -> (C, C)
where
    C: Cursor,
    C::Item: PartialOrd,
{
    minmax_element_by(first, last, |a, b| a < b)
}

/// Smallest item, `None` on empty ranges.
pub fn min_element_value_by<C, L>(first: C, last: C, mut less: L) -> Option<C::Item>
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return None;
    }
    let init = first.read();
    Some(accumulate(first.successor(), last, init, |best, item| {
        if less(&item, &best) {
            item
        } else {
            best
        }
    }))
}

/// Largest item, `None` on empty ranges.
pub fn max_element_value_by<C, L>(first: C, last: C, mut less: L) -> Option<C::Item>
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return None;
    }
    let init = first.read();
    Some(accumulate(first.successor(), last, init, |best, item| {
        if less(&best, &item) {
            item
        } else {
            best
        }
    }))
}

/// Smallest and largest items, `None` on empty ranges.
pub fn minmax_element_value_by<C, L>(first: C, last: C, less: L) -> Option<(C::Item, C::Item)>
where
    C: Cursor,
    L: FnMut(&C::Item, &C::Item) -> bool,
{
    if first == last {
        return None;
    }
    let (min, max) = minmax_element_by(first, last, less);
    Some((min.read(), max.read()))
}

/// [`min_element_value_by`] with `<`.
///
/// # Example
///
/// ```
/// use accumulate::{cursors, min_element_value};
/// let v: Vec<u32> = Vec::new();
/// let (first, last) = cursors(&v);
/// assert_eq!(min_element_value(first, last), None);
/// ```
pub fn min_element_value<C>(first: C, last: C) -> Option<C::Item>
where
    C: Cursor,
    C::Item: PartialOrd,
{
    min_element_value_by(first, last, |a, b| a < b)
}

/// [`max_element_value_by`] with `<`.
pub fn max_element_value<C>(first: C, last: C) -> Option<C::Item>
where
    C: Cursor,
    C::Item: PartialOrd,
{
    max_element_value_by(first, last, |a, b| a < b)
}

/// [`minmax_element_value_by`] with `<`.
pub fn minmax_element_value<C>(first: C, last: C) -> Option<(C::Item, C::Item)>
where
    C: Cursor,
    C::Item: PartialOrd,
{
    minmax_element_value_by(first, last, |a, b| a < b)
}

/// Smallest value of a list.
///
/// # Panics
///
/// If `list` is empty.
pub fn min_by<T, L>(list: &[T], mut less: L) -> T
where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    let (first, last) = cursors(list);
    min_element_by(first, last, |a, b| less(*a, *b)).read().clone()
}

/// Largest value of a list.
///
/// # Panics
///
/// If `list` is empty.
pub fn max_by<T, L>(list: &[T], mut less: L) -> T
where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    let (first, last) = cursors(list);
    max_element_by(first, last, |a, b| less(*a, *b)).read().clone()
}

/// Smallest and largest values of a list.
///
/// # Panics
///
/// If `list` is empty.
pub fn minmax_by<T, L>(list: &[T], mut less: L) -> (T, T)
where
    T: Clone,
    L: FnMut(&T, &T) -> bool,
{
    let (first, last) = cursors(list);
    let (min, max) = minmax_element_by(first, last, |a, b| less(*a, *b));
    (min.read().clone(), max.read().clone())
}

/// [`min_by`] with `<`.
///
/// # Example
///
/// ```
/// assert_eq!(accumulate::min(&[4, 2, 8]), 2);
/// ```
pub fn min<T: PartialOrd + Clone>(list: &[T]) -> T {
    min_by(list, |a, b| a < b)
}

/// [`max_by`] with `<`.
pub fn max<T: PartialOrd + Clone>(list: &[T]) -> T {
    max_by(list, |a, b| a < b)
}

/// [`minmax_by`] with `<`.
pub fn minmax<T: PartialOrd + Clone>(list: &[T]) -> (T, T) {
    minmax_by(list, |a, b| a < b)
}
