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

/// A course taught at an institution.
///
/// `institution` is a free-form name; nothing checks that such an
/// institution exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    name: String,
    institution: String,
    specialty_code: String,
    semester: i32,
    number_of_hours: i32,
    approval_date: String,
    has_exam: bool,
}

impl Discipline {
    pub fn builder(name: impl Into<String>) -> DisciplineBuilder {
        DisciplineBuilder {
            inner: Discipline {
                name: name.into(),
                ..Discipline::default()
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn specialty_code(&self) -> &str {
        &self.specialty_code
    }

    pub fn semester(&self) -> i32 {
        self.semester
    }

    pub fn number_of_hours(&self) -> i32 {
        self.number_of_hours
    }

    pub fn approval_date(&self) -> &str {
        &self.approval_date
    }

    pub fn has_exam(&self) -> bool {
        self.has_exam
    }
}

impl NaturalOrder for Discipline {
    /// Name first, then number of hours ascending.
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.number_of_hours.cmp(&other.number_of_hours))
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Discipline(name={}, institution={}, specialtyCode={}, semester={}, \
             numberOfHours={}, approvalDate={}, hasExam={})",
            self.name,
            self.institution,
            self.specialty_code,
            self.semester,
            self.number_of_hours,
            self.approval_date,
            self.has_exam
        )
    }
}

#[derive(Debug, Clone)]
pub struct DisciplineBuilder {
    inner: Discipline,
}

impl DisciplineBuilder {
    pub fn institution(mut self, institution: impl Into<String>) -> Self {
        self.inner.institution = institution.into();
        self
    }

    pub fn specialty_code(mut self, code: impl Into<String>) -> Self {
        self.inner.specialty_code = code.into();
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.inner.semester = semester;
        self
    }

    pub fn number_of_hours(mut self, hours: i32) -> Self {
        self.inner.number_of_hours = hours;
        self
    }

    pub fn approval_date(mut self, date: impl Into<String>) -> Self {
        self.inner.approval_date = date.into();
        self
    }

    pub fn has_exam(mut self, flag: bool) -> Self {
        self.inner.has_exam = flag;
        self
    }

    pub fn build(self) -> Discipline {
        self.inner
    }
}
