//! ---
//! campus_section: "02-domain-model"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Value records describing institutions and disciplines."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
//! Opt-in field validation.
//!
//! Records are accepted verbatim on construction. Callers that want stricter
//! input call [`Validate::validate`] explicitly; every issue found is
//! reported, not just the first.

use chrono::NaiveDate;
use thiserror::Error;
use url::Url;

use crate::{Discipline, Institution};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("{field} '{value}' is not a calendar date (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
    #[error("website '{value}' is not a valid URL: {reason}")]
    InvalidWebsite { value: String, reason: String },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i32 },
    #[error("semester must be at least 1 (got {0})")]
    SemesterOutOfRange(i32),
}

/// All issues found on one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record '{record}' failed validation: {}", join_issues(.issues))]
pub struct ValidationError {
    pub record: String,
    pub issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ValidationError>;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Institution {
    fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        check_date("establishmentDate", self.establishment_date(), &mut issues);
        check_website(self.website(), &mut issues);
        check_non_negative("numberOfFaculties", self.number_of_faculties(), &mut issues);
        finish(self.name(), issues)
    }
}

impl Validate for Discipline {
    fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        check_date("approvalDate", self.approval_date(), &mut issues);
        if self.semester() < 1 {
            issues.push(ValidationIssue::SemesterOutOfRange(self.semester()));
        }
        check_non_negative("numberOfHours", self.number_of_hours(), &mut issues);
        finish(self.name(), issues)
    }
}

fn finish(record: &str, issues: Vec<ValidationIssue>) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            record: record.to_owned(),
            issues,
        })
    }
}

fn check_date(field: &'static str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
        issues.push(ValidationIssue::InvalidDate {
            field,
            value: value.to_owned(),
        });
    }
}

// Bare host names such as `www.example.edu` are accepted as http URLs.
fn check_website(value: &str, issues: &mut Vec<ValidationIssue>) {
    let candidate = if value.contains("://") {
        value.to_owned()
    } else {
        format!("http://{}", value)
    };
    let reason = match Url::parse(&candidate) {
        Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => return,
        Ok(_) => "missing host".to_owned(),
        Err(err) => err.to_string(),
    };
    issues.push(ValidationIssue::InvalidWebsite {
        value: value.to_owned(),
        reason,
    });
}

fn check_non_negative(field: &'static str, value: i32, issues: &mut Vec<ValidationIssue>) {
    if value < 0 {
        issues.push(ValidationIssue::Negative { field, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_institution() -> Institution {
        Institution::builder("Institution 1")
            .establishment_date("2000-01-01")
            .website("www.institution1.com")
            .number_of_faculties(5)
            .build()
    }

    #[test]
    fn well_formed_institution_passes() {
        assert!(valid_institution().validate().is_ok());
    }

    #[test]
    fn explicit_scheme_is_accepted() {
        let inst = Institution::builder("Secure")
            .establishment_date("1999-12-31")
            .website("https://secure.example.edu/about")
            .build();
        assert!(inst.validate().is_ok());
    }

    #[test]
    fn reports_every_issue() {
        let inst = Institution::builder("Broken")
            .establishment_date("2021-02-30")
            .website("http://")
            .number_of_faculties(-1)
            .build();
        let err = inst.validate().unwrap_err();
        assert_eq!(err.record, "Broken");
        assert_eq!(err.issues.len(), 3);
        assert!(matches!(
            err.issues[0],
            ValidationIssue::InvalidDate { field: "establishmentDate", .. }
        ));
        assert!(matches!(err.issues[1], ValidationIssue::InvalidWebsite { .. }));
        assert_eq!(
            err.issues[2],
            ValidationIssue::Negative {
                field: "numberOfFaculties",
                value: -1
            }
        );
        assert!(err.to_string().starts_with("record 'Broken' failed validation: "));
    }

    #[test]
    fn discipline_checks_semester_and_hours() {
        let disc = Discipline::builder("Optics")
            .approval_date("2022-06-15")
            .semester(0)
            .number_of_hours(-10)
            .build();
        let err = disc.validate().unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                ValidationIssue::SemesterOutOfRange(0),
                ValidationIssue::Negative {
                    field: "numberOfHours",
                    value: -10
                },
            ]
        );
    }

    #[test]
    fn discipline_with_sane_values_passes() {
        let disc = Discipline::builder("Optics")
            .approval_date("2022-06-15")
            .semester(3)
            .number_of_hours(72)
            .build();
        assert!(disc.validate().is_ok());
    }
}
