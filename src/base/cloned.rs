use crate::prelude::*;

/// Cursor reading clones of what the inner cursor references.
/// Obtained from [`Cursor::cloned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cloned<C> {
    inner: C,
}

impl<C> Cloned<C> {
    pub(crate) fn new(inner: C) -> Self {
        Cloned { inner }
    }
    /// Give back the cursor on references.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<'a, T, C> Cursor for Cloned<C>
where
    T: 'a + Clone,
    C: Cursor<Item = &'a T>,
{
    type Item = T;
    fn read(&self) -> T {
        self.inner.read().clone()
    }
    fn advance(&mut self) {
        self.inner.advance()
    }
}

impl<'a, T, C> BidirectionalCursor for Cloned<C>
where
    T: 'a + Clone,
    C: BidirectionalCursor<Item = &'a T>,
{
    fn retreat(&mut self) {
        self.inner.retreat()
    }
}
