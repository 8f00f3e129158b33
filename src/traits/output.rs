//! Write-only positions.

/// A destination we can write values into, one after the other.
///
/// Writing stores the value at current position and moves forward, so the
/// cursor returned by `copy` like algorithms is the one-past-last written
/// position.
pub trait OutputCursor<V> {
    /// Store value and advance.
    fn write(&mut self, value: V);
}

impl<'o, V, O: OutputCursor<V>> OutputCursor<V> for &'o mut O {
    fn write(&mut self, value: V) {
        (**self).write(value)
    }
}
