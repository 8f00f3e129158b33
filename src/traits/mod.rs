mod cursor;
mod output;

pub use cursor::{BidirectionalCursor, Cursor};
pub use output::OutputCursor;
