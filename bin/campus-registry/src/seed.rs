//! ---
//! campus_section: "05-external-interfaces"
//! campus_subsection: "binary"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Scripted registry session run by the demonstration binary."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use campus_model::Institution;

// (name, accreditation, address, established, faculties, website, military, disciplines)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i32,
    &'static str,
    bool,
    [&'static str; 2],
);

#[rustfmt::skip]
const SEED: [SeedRow; 5] = [
    ("Institution 1", "Level 1", "Address 1", "2000-01-01", 5, "www.institution1.com", true, ["Discipline A", "Discipline B"]),
    ("Institution 2", "Level 2", "Address 2", "2005-01-01", 3, "www.institution2.com", false, ["Discipline C", "Discipline D"]),
    ("Institution 3", "Level 1", "Address 3", "2010-01-01", 6, "www.institution3.com", true, ["Discipline E", "Discipline F"]),
    ("Institution 4", "Level 3", "Address 4", "2015-01-01", 2, "www.institution4.com", false, ["Discipline G", "Discipline H"]),
    ("Institution 5", "Level 2", "Address 5", "2020-01-01", 4, "www.institution5.com", true, ["Discipline I", "Discipline J"]),
];

/// The five institutions the session loads, in insertion order.
pub fn institutions() -> Vec<Institution> {
    SEED.iter()
        .map(
            |&(name, level, address, established, faculties, website, military, disciplines)| {
                Institution::builder(name)
                    .accreditation_level(level)
                    .address(address)
                    .establishment_date(established)
                    .number_of_faculties(faculties)
                    .website(website)
                    .has_military_department(military)
                    .disciplines(disciplines)
                    .build()
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_model::Validate;

    #[test]
    fn seed_has_expected_names_and_faculties() {
        let seeded = institutions();
        let summary: Vec<_> = seeded
            .iter()
            .map(|i| (i.name(), i.number_of_faculties()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Institution 1", 5),
                ("Institution 2", 3),
                ("Institution 3", 6),
                ("Institution 4", 2),
                ("Institution 5", 4),
            ]
        );
    }

    #[test]
    fn seed_passes_validation() {
        for institution in institutions() {
            institution.validate().unwrap();
        }
    }
}
