//! We contain all basic cursor types.

pub(crate) mod cloned;
pub(crate) mod output;
pub(crate) mod range;
pub(crate) mod reversed;
pub(crate) mod slice;

pub use cloned::Cloned;
pub use output::{BackInserter, SliceOutput};
pub use reversed::Reversed;
pub use slice::{cursors, SliceCursor};
