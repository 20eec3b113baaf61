//! ---
//! campus_section: "02-domain-model"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Value records describing institutions and disciplines."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ordering::NaturalOrder;

/// A higher-education institution.
///
/// Fields are private and only exposed through accessors, so a value cannot be
/// changed once built. No field is validated on construction; see
/// [`Validate`](crate::validation::Validate) for the opt-in checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    name: String,
    accreditation_level: String,
    address: String,
    establishment_date: String,
    number_of_faculties: i32,
    website: String,
    has_military_department: bool,
    disciplines: Vec<String>,
}

impl Institution {
    /// Start building an institution with the given name.
    pub fn builder(name: impl Into<String>) -> InstitutionBuilder {
        InstitutionBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accreditation_level(&self) -> &str {
        &self.accreditation_level
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// ISO `YYYY-MM-DD` string, stored verbatim.
    pub fn establishment_date(&self) -> &str {
        &self.establishment_date
    }

    pub fn number_of_faculties(&self) -> i32 {
        self.number_of_faculties
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn has_military_department(&self) -> bool {
        self.has_military_department
    }

    pub fn disciplines(&self) -> &[String] {
        &self.disciplines
    }
}

impl NaturalOrder for Institution {
    /// Name first, then number of faculties ascending.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.number_of_faculties.cmp(&other.number_of_faculties))
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Institution(name={}, accreditationLevel={}, address={}, establishmentDate={}, \
             numberOfFaculties={}, website={}, hasMilitaryDepartment={}, disciplines=[{}])",
            self.name,
            self.accreditation_level,
            self.address,
            self.establishment_date,
            self.number_of_faculties,
            self.website,
            self.has_military_department,
            self.disciplines.join(", ")
        )
    }
}

/// Builder for [`Institution`]. Unset fields default to empty text, zero and `false`.
#[derive(Debug, Clone, Default)]
pub struct InstitutionBuilder {
    inner: Institution,
}

impl InstitutionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Institution {
                name: name.into(),
                ..Institution::default()
            },
        }
    }

    pub fn accreditation_level(mut self, level: impl Into<String>) -> Self {
        self.inner.accreditation_level = level.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.inner.address = address.into();
        self
    }

    pub fn establishment_date(mut self, date: impl Into<String>) -> Self {
        self.inner.establishment_date = date.into();
        self
    }

    pub fn number_of_faculties(mut self, count: i32) -> Self {
        self.inner.number_of_faculties = count;
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.inner.website = website.into();
        self
    }

    pub fn has_military_department(mut self, flag: bool) -> Self {
        self.inner.has_military_department = flag;
        self
    }

    pub fn disciplines<I, S>(mut self, disciplines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.disciplines = disciplines.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Institution {
        self.inner
    }
}
