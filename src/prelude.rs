pub use crate::traits::{BidirectionalCursor, Cursor, OutputCursor};
