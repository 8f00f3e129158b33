//! The fold engine: the only loop of the crate.
//!
//! Everything else is a fold with a well chosen accumulator.
//! There are two flavours:
//! - element folds (`accumulate`) where the combining function receives items;
//! - position folds (`accumulate_iter`) where it receives cursors, so that
//!   algorithms can tell *where* and not only *what*.
//!
//! The `try_` variants let the combining function stop the traversal by
//! returning `ControlFlow::Break`. No element past the stopping one is ever read.
use crate::prelude::*;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// Fold positions of `[first, last)`, stopping as soon as `f` breaks.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use accumulate::prelude::*;
/// use accumulate::{cursors, try_accumulate_iter};
/// let v = vec![2, 4, 5, 6];
/// let (first, last) = cursors(&v);
/// let odd = try_accumulate_iter(first, last, (), |(), position| {
///     if position.read() % 2 == 1 {
///         ControlFlow::Break(position.index())
///     } else {
///         ControlFlow::Continue(())
///     }
/// });
/// assert_eq!(odd, ControlFlow::Break(2));
/// ```
pub fn try_accumulate_iter<C, A, B, F>(mut first: C, last: C, init: A, mut f: F) -> ControlFlow<B, A>
where
    C: Cursor,
    F: FnMut(A, C) -> ControlFlow<B, A>,
{
    let mut accumulator = init;
    while first != last {
        match f(accumulator, first.clone()) {
            ControlFlow::Continue(next) => accumulator = next,
            ControlFlow::Break(result) => {
                #[cfg(feature = "logs")]
                tracing::trace!("fold stopped early");
                return ControlFlow::Break(result);
            }
        }
        first.advance();
    }
    ControlFlow::Continue(accumulator)
}

/// Fold items of `[first, last)`, stopping as soon as `f` breaks.
pub fn try_accumulate<C, A, B, F>(first: C, last: C, init: A, mut f: F) -> ControlFlow<B, A>
where
    C: Cursor,
    F: FnMut(A, C::Item) -> ControlFlow<B, A>,
{
    try_accumulate_iter(first, last, init, |accumulator, position| {
        f(accumulator, position.read())
    })
}

/// Fold positions of `[first, last)`.
pub fn accumulate_iter<C, A, F>(first: C, last: C, init: A, mut f: F) -> A
where
    C: Cursor,
    F: FnMut(A, C) -> A,
{
    let flow = try_accumulate_iter(first, last, init, |accumulator, position| {
        ControlFlow::<Infallible, A>::Continue(f(accumulator, position))
    });
    match flow {
        ControlFlow::Continue(accumulator) => accumulator,
        ControlFlow::Break(never) => match never {},
    }
}

/// Fold items of `[first, last)`: `f(...f(f(init, e0), e1)..., en-1)`.
///
/// # Example
///
/// ```
/// use accumulate::{accumulate, cursors};
/// let v = vec![1, 2, 3];
/// let (first, last) = cursors(&v);
/// assert_eq!(accumulate(first, last, 0, |s, e| s + e), 6);
/// ```
pub fn accumulate<C, A, F>(first: C, last: C, init: A, mut f: F) -> A
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
{
    accumulate_iter(first, last, init, |accumulator, position| {
        f(accumulator, position.read())
    })
}

/// Extract the value of a fold whose break and continue types agree.
pub(crate) fn settle<A>(flow: ControlFlow<A, A>) -> A {
    match flow {
        ControlFlow::Continue(value) | ControlFlow::Break(value) => value,
    }
}

/// Number of steps from `first` to `last`.
pub fn distance<C: Cursor>(first: C, last: C) -> usize {
    accumulate_iter(first, last, 0, |steps, _| steps + 1)
}

/// Move `cursor` forward `n` times.
pub fn advance_by<C: Cursor>(cursor: C, n: usize) -> C {
    accumulate_iter(0, n, cursor, |cursor, _| cursor.successor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors;

    #[test]
    fn empty_range_gives_back_init() {
        let v: Vec<u32> = Vec::new();
        let (first, last) = cursors(&v);
        assert_eq!(accumulate(first, last, 42, |_, _| 0), 42);
        assert_eq!(
            try_accumulate_iter(first, last, 1, |_, _| ControlFlow::Break(0)),
            ControlFlow::<i32, i32>::Continue(1)
        );
    }

    #[test]
    fn items_come_in_order() {
        let v = vec!['a', 'b', 'c'];
        let (first, last) = cursors(&v);
        let seen = accumulate(first, last, String::new(), |mut s, c| {
            s.push(*c);
            s
        });
        assert_eq!(seen, "abc");
    }

    #[test]
    fn nothing_is_read_after_break() {
        let v = vec![1, 2, 3, 4, 5];
        let (first, last) = cursors(&v);
        let mut visited = 0;
        let flow = try_accumulate(first, last, 0, |sum, e| {
            visited += 1;
            if *e == 3 {
                ControlFlow::Break(sum)
            } else {
                ControlFlow::Continue(sum + e)
            }
        });
        assert_eq!(flow, ControlFlow::Break(3));
        assert_eq!(visited, 3);
    }

    #[test]
    fn distances() {
        let v = vec![0; 17];
        let (first, last) = cursors(&v);
        assert_eq!(distance(first, last), 17);
        assert!(advance_by(first, 17) == last);
        assert!(advance_by(first, 0) == first);
        assert_eq!(settle(ControlFlow::<u8, u8>::Break(3)), 3);
    }
}
