//! This crate provides classic sequence algorithms, all derived from a single fold.
//!
//! Ranges are pairs of [cursors](prelude::Cursor) `(first, last)`.
//! The fold engine ([`accumulate`], [`accumulate_iter`] and their short-circuiting
//! `try_` versions) is the only loop: searching, counting, copying,
//! extremum selection, lexicographic comparison and permutation generation
//! are all folds with an algorithm specific accumulator.
//!
//! # Example
//!
//! ```
//! use accumulate::prelude::*;
//! use accumulate::{count_if, cursors, max_element, next_permutation};
//! let mut v = vec![3, 1, 2];
//! let (first, last) = cursors(&v);
//! assert_eq!(count_if(first, last, |e| **e > 1), 2);
//! assert_eq!(*max_element(first, last).read(), 3);
//! assert!(next_permutation(&mut v));
//! assert_eq!(v, vec![3, 2, 1]);
//! ```
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Basic cursor types.
pub(crate) mod base;
pub use base::{cursors, BackInserter, Cloned, Reversed, SliceCursor, SliceOutput};
/// The fold engine.
pub(crate) mod fold;
pub use fold::{accumulate, accumulate_iter, advance_by, distance, try_accumulate, try_accumulate_iter};
/// Import all traits in prelude to enable cursors.
pub mod prelude;
pub(crate) mod traits;

mod algorithms;
pub use algorithms::lexicographical::{
    is_permutation, is_permutation_by, lexicographical_compare, lexicographical_compare_by,
};
pub use algorithms::minmax::{
    max, max_by, max_element, max_element_by, max_element_value, max_element_value_by, min,
    min_by, min_element, min_element_by, min_element_value, min_element_value_by, minmax,
    minmax_by, minmax_element, minmax_element_by, minmax_element_value, minmax_element_value_by,
};
pub use algorithms::modifying::{copy, copy_if, reverse, reverse_copy, transform, transform2};
pub use algorithms::non_modifying::{
    adjacent_find, adjacent_find_by, all_of, any_of, count, count_if, equal, equal_by, find,
    find_if, find_if_not, for_each, mismatch, mismatch_by, none_of,
};
pub use algorithms::permutation::{
    next_permutation, next_permutation_by, prev_permutation, prev_permutation_by,
};
