//! ---
//! campus_section: "15-testing-qa"
//! campus_subsection: "integration-tests"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Integration and property tests for the campus registry stack."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use std::cmp::Ordering;

use campus_model::{compare_institutions, sort_natural, Institution, NaturalOrder};
use campus_store::{Container, InstitutionStore};

const NAMES: [&str; 6] = ["", "A", "Institution 1", "Institution 10", "Institution 2", "b"];
const FACULTIES: [i32; 5] = [i32::MIN, -1, 0, 6, i32::MAX];

fn inst(name: &str, faculties: i32) -> Institution {
    Institution::builder(name)
        .number_of_faculties(faculties)
        .build()
}

#[test]
fn smaller_name_always_orders_first() {
    for a in NAMES {
        for b in NAMES {
            if a >= b {
                continue;
            }
            for fa in FACULTIES {
                for fb in FACULTIES {
                    assert_eq!(
                        compare_institutions(&inst(a, fa), &inst(b, fb)),
                        Ordering::Less,
                        "{a:?}/{fa} vs {b:?}/{fb}"
                    );
                }
            }
        }
    }
}

#[test]
fn equal_names_reduce_to_faculty_comparison() {
    for name in NAMES {
        for fa in FACULTIES {
            for fb in FACULTIES {
                assert_eq!(inst(name, fa).natural_cmp(&inst(name, fb)), fa.cmp(&fb));
            }
        }
    }
}

#[test]
fn comparison_is_antisymmetric() {
    let all: Vec<Institution> = NAMES
        .iter()
        .flat_map(|name| FACULTIES.iter().map(move |f| inst(name, *f)))
        .collect();
    for a in &all {
        for b in &all {
            assert_eq!(
                compare_institutions(a, b),
                compare_institutions(b, a).reverse()
            );
        }
    }
}

#[test]
fn store_never_reorders_but_callers_can_sort() {
    let mut store = InstitutionStore::new();
    store.add(inst("Institution 5", 4));
    store.add(inst("Institution 1", 5));
    store.add(inst("Institution 3", 6));
    store.add(inst("Institution 1", 2));

    let mut sorted = store.get_all().to_vec();
    sort_natural(&mut sorted);

    let stored: Vec<_> = store
        .iter()
        .map(|i| (i.name(), i.number_of_faculties()))
        .collect();
    assert_eq!(
        stored,
        vec![
            ("Institution 5", 4),
            ("Institution 1", 5),
            ("Institution 3", 6),
            ("Institution 1", 2)
        ]
    );
    let ordered: Vec<_> = sorted
        .iter()
        .map(|i| (i.name(), i.number_of_faculties()))
        .collect();
    assert_eq!(
        ordered,
        vec![
            ("Institution 1", 2),
            ("Institution 1", 5),
            ("Institution 3", 6),
            ("Institution 5", 4)
        ]
    );
}
