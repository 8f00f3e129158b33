//! Lexicographic permutation generation.
//!
//! Both generators need to walk the range from its end, so they require a
//! genuinely bidirectional range: a mutable slice. Searches run on reversed
//! cursors over a shared view of the slice; only once positions are known do
//! we swap and reverse.
use super::modifying::reverse;
use super::non_modifying::{adjacent_find_by, find_if};
use crate::base::{cursors, Reversed};
use crate::prelude::*;

/// Rearrange `range` into the next permutation in the lexicographic order
/// defined by `less`.
///
/// Return `true` if such a permutation exists. Otherwise `range` was the
/// largest permutation: it is turned into the smallest one (sorted) and
/// `false` is returned. Empty and single element ranges are left untouched
/// and return `false`.
pub fn next_permutation_by<T, L>(range: &mut [T], mut less: L) -> bool
where
    L: FnMut(&T, &T) -> bool,
{
    step_permutation(range, |before, after| less(before, after))
}

/// Rearrange `range` into the previous permutation in the lexicographic order
/// defined by `less`.
///
/// Return `true` if such a permutation exists. Otherwise `range` was the
/// smallest permutation: it is turned into the largest one (reverse sorted)
/// and `false` is returned.
pub fn prev_permutation_by<T, L>(range: &mut [T], mut less: L) -> bool
where
    L: FnMut(&T, &T) -> bool,
{
    step_permutation(range, |before, after| less(after, before))
}

/// [`next_permutation_by`] with `<`.
///
/// # Example
///
/// ```
/// use accumulate::next_permutation;
/// let mut v = vec![3, 1, 2];
/// assert!(next_permutation(&mut v));
/// assert_eq!(v, vec![3, 2, 1]);
/// assert!(!next_permutation(&mut v));
/// assert_eq!(v, vec![1, 2, 3]);
/// ```
pub fn next_permutation<T: PartialOrd>(range: &mut [T]) -> bool {
    next_permutation_by(range, |a, b| a < b)
}

/// [`prev_permutation_by`] with `<`.
pub fn prev_permutation<T: PartialOrd>(range: &mut [T]) -> bool {
    prev_permutation_by(range, |a, b| a < b)
}

/// Shared body of both generators. `ascending(a, b)` tells whether `a` placed
/// before `b` is a pair we can still make "bigger": `a < b` for next,
/// `b < a` for previous.
fn step_permutation<T, A>(range: &mut [T], mut ascending: A) -> bool
where
    A: FnMut(&T, &T) -> bool,
{
    let (first, last) = cursors(&*range);
    let (rfirst, rlast) = (Reversed::new(last), Reversed::new(first));
    // walking backward, look for the first pair with (before, after) ascending
    let found = adjacent_find_by(rfirst, rlast, |after, before| ascending(*before, *after));
    if found == rlast {
        #[cfg(feature = "logs")]
        tracing::trace!(len = range.len(), "permutation wrapped around");
        reverse(range);
        return false;
    }
    let pivot = found.successor();
    let pivot_value = pivot.read();
    // rightmost element we can exchange with the pivot
    let swapped = find_if(rfirst, pivot, |e| ascending(pivot_value, *e));
    let (pivot_index, swapped_index) = (pivot.current().index(), swapped.current().index());
    range.swap(pivot_index, swapped_index);
    reverse(&mut range[pivot_index + 1..]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario() {
        let mut v = vec![3, 1, 2];
        assert!(next_permutation(&mut v));
        assert_eq!(v, vec![3, 2, 1]);
        assert!(!next_permutation(&mut v));
        assert_eq!(v, vec![1, 2, 3]);
        assert!(!prev_permutation(&mut v));
        assert_eq!(v, vec![3, 2, 1]);
    }

    #[test]
    fn tiny_ranges_do_not_move() {
        let mut empty: Vec<u8> = Vec::new();
        assert!(!next_permutation(&mut empty));
        assert!(!prev_permutation(&mut empty));
        let mut single = vec![42];
        assert!(!next_permutation(&mut single));
        assert!(!prev_permutation(&mut single));
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn repeated_values() {
        let mut v = vec![1, 1, 2];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(seen, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
        assert_eq!(v, vec![1, 1, 2]);
    }

    #[test]
    fn previous_walks_backward() {
        let mut v = vec!['c', 'a', 'b'];
        assert!(prev_permutation(&mut v));
        assert_eq!(v, vec!['b', 'c', 'a']);
        assert!(prev_permutation(&mut v));
        assert_eq!(v, vec!['b', 'a', 'c']);
    }

    #[test]
    fn custom_order() {
        // descending order: next permutation goes toward ascending sequences
        let mut v = vec![1, 2, 3];
        assert!(!next_permutation_by(&mut v, |a, b| a > b));
        assert_eq!(v, vec![3, 2, 1]);
        assert!(next_permutation_by(&mut v, |a, b| a > b));
        assert_eq!(v, vec![3, 1, 2]);
    }
}
