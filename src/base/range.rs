//! Integers are cursors on the naturals: they read as themselves.
//! `(lo, hi)` is then the range of all indices in `lo..hi`.
use crate::prelude::*;

macro_rules! implement_traits {
    ($x: ty) => {
        impl Cursor for $x {
            type Item = $x;
            fn read(&self) -> $x {
                *self
            }
            fn advance(&mut self) {
                *self += 1;
            }
        }
        impl BidirectionalCursor for $x {
            fn retreat(&mut self) {
                *self -= 1;
            }
        }
    };
}

implement_traits!(i16);
implement_traits!(u16);
implement_traits!(i32);
implement_traits!(isize);
implement_traits!(u8);
implement_traits!(usize);
implement_traits!(i8);
implement_traits!(u32);
implement_traits!(i64);
implement_traits!(u64);

#[cfg(test)]
mod tests {
    use crate::accumulate;

    #[test]
    fn integers_read_as_themselves() {
        assert_eq!(accumulate(3u32, 7, 0, |s, i| s + i), 3 + 4 + 5 + 6);
        assert_eq!(accumulate(-2i8, -2, 10, |s, i| s + i), 10);
    }
}
