//! ---
//! campus_section: "01-core-functionality"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Indexed container abstraction and in-memory stores."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The index does not address an element; valid indices are `0..len`.
    #[error("index {index} out of range for container of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl StoreError {
    /// Check `index` against `len`, failing instead of clamping.
    pub(crate) fn check(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(StoreError::OutOfRange { index, len })
        }
    }
}
