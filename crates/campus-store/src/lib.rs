//! ---
//! campus_section: "01-core-functionality"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Indexed container abstraction and in-memory stores."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
//! Indexed containers for registry records.
//!
//! [`Container`] is the capability set every store offers,
//! [`InstitutionStore`] the in-memory implementation, and
//! [`SharedContainer`] a lock-guarded handle for concurrent callers.

pub mod container;
pub mod error;
pub mod institution_store;
pub mod shared;

pub use container::Container;
pub use error::{Result, StoreError};
pub use institution_store::InstitutionStore;
pub use shared::SharedContainer;
