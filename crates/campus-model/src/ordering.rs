//! ---
//! campus_section: "02-domain-model"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Value records describing institutions and disciplines."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
//! Natural ordering of records.
//!
//! Records compare on a subset of their fields while equality covers every
//! field, so the ordering lives in its own trait instead of [`Ord`].

use std::cmp::Ordering;

use crate::{Discipline, Institution};

/// Total ordering used when callers want records sorted "naturally".
pub trait NaturalOrder {
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

/// Compare two institutions by name, then by number of faculties.
pub fn compare_institutions(a: &Institution, b: &Institution) -> Ordering {
    a.natural_cmp(b)
}

/// Compare two disciplines by name, then by number of hours.
pub fn compare_disciplines(a: &Discipline, b: &Discipline) -> Ordering {
    a.natural_cmp(b)
}

/// Stable sort in natural order.
pub fn sort_natural<T: NaturalOrder>(items: &mut [T]) {
    items.sort_by(|a, b| a.natural_cmp(b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution(name: &str, faculties: i32) -> Institution {
        Institution::builder(name)
            .number_of_faculties(faculties)
            .build()
    }

    #[test]
    fn name_dominates_faculty_count() {
        let a = institution("Alpha", 100);
        let b = institution("Beta", 1);
        assert_eq!(compare_institutions(&a, &b), Ordering::Less);
        assert_eq!(compare_institutions(&b, &a), Ordering::Greater);
    }

    #[test]
    fn equal_names_compare_faculties_numerically() {
        let few = institution("Same", -3);
        let many = institution("Same", 12);
        assert_eq!(compare_institutions(&few, &many), Ordering::Less);
        assert_eq!(compare_institutions(&many, &few), Ordering::Greater);
        assert_eq!(compare_institutions(&many, &many.clone()), Ordering::Equal);
    }

    #[test]
    fn name_comparison_is_lexicographic_not_numeric() {
        let ten = institution("Institution 10", 0);
        let two = institution("Institution 2", 0);
        assert_eq!(compare_institutions(&ten, &two), Ordering::Less);
    }

    #[test]
    fn records_equal_in_order_may_still_differ() {
        let a = Institution::builder("Same")
            .number_of_faculties(4)
            .address("North")
            .build();
        let b = Institution::builder("Same")
            .number_of_faculties(4)
            .address("South")
            .build();
        assert_eq!(compare_institutions(&a, &b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn sort_natural_is_stable() {
        let first = Institution::builder("Dup").address("first").build();
        let second = Institution::builder("Dup").address("second").build();
        let mut items = vec![
            institution("Gamma", 1),
            first.clone(),
            institution("Alpha", 9),
            second.clone(),
            institution("Alpha", 2),
        ];
        sort_natural(&mut items);
        let names: Vec<_> = items
            .iter()
            .map(|i| (i.name(), i.number_of_faculties()))
            .collect();
        assert_eq!(
            names,
            vec![("Alpha", 2), ("Alpha", 9), ("Dup", 0), ("Dup", 0), ("Gamma", 1)]
        );
        assert_eq!(items[2], first);
        assert_eq!(items[3], second);
    }

    #[test]
    fn compare_disciplines_uses_hours() {
        let short = Discipline::builder("Physics").number_of_hours(30).build();
        let long = Discipline::builder("Physics").number_of_hours(120).build();
        assert_eq!(compare_disciplines(&short, &long), Ordering::Less);
    }
}
