//! ---
//! campus_section: "02-domain-model"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Value records describing institutions and disciplines."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
//! Immutable value records held by the campus registry.

pub mod discipline;
pub mod institution;
pub mod ordering;
pub mod validation;

pub use discipline::{Discipline, DisciplineBuilder};
pub use institution::{Institution, InstitutionBuilder};
pub use ordering::{compare_disciplines, compare_institutions, sort_natural, NaturalOrder};
pub use validation::{Validate, ValidationError, ValidationIssue};
