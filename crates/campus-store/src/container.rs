//! ---
//! campus_section: "01-core-functionality"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Indexed container abstraction and in-memory stores."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use crate::Result;

/// Ordered, zero-indexed, duplicate-permitting collection of `T`.
///
/// Indices are always dense (`0..len`). Removing an element shifts every later
/// element down by one; updating replaces in place. Any index at or beyond
/// `len` fails with [`StoreError::OutOfRange`](crate::StoreError::OutOfRange)
/// and leaves the container untouched.
pub trait Container<T> {
    /// Append `item` to the end.
    fn add(&mut self, item: T);

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Replace the element at `index`, returning the previous value.
    fn update(&mut self, index: usize, item: T) -> Result<T>;

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Every element in current order.
    fn get_all(&self) -> &[T];

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
