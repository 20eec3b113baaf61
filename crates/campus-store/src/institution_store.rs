//! ---
//! campus_section: "01-core-functionality"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Indexed container abstraction and in-memory stores."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use campus_logging::{registry_debug, registry_warn, LogContext};
use campus_model::Institution;

use crate::{Container, Result, StoreError};

const STORE_NAME: &str = "institutions";

/// In-memory [`Container`] of institutions kept in insertion order.
///
/// The store never sorts or deduplicates; use
/// [`campus_model::sort_natural`] on a copy of [`Container::get_all`] when a
/// sorted view is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionStore {
    institutions: Vec<Institution>,
}

impl InstitutionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Institution> {
        self.institutions.iter()
    }

    fn checked(&self, operation: &'static str, index: usize) -> Result<()> {
        let len = self.institutions.len();
        StoreError::check(index, len).inspect_err(|_| {
            let ctx = LogContext::new()
                .with_store(STORE_NAME)
                .with_operation(operation)
                .with_index(index)
                .with_len(len);
            registry_warn!(context = ctx, "index out of range");
        })
    }
}

impl Container<Institution> for InstitutionStore {
    fn add(&mut self, item: Institution) {
        self.institutions.push(item);
        let ctx = LogContext::new()
            .with_store(STORE_NAME)
            .with_operation("add")
            .with_index(self.institutions.len() - 1)
            .with_len(self.institutions.len());
        registry_debug!(context = ctx, "institution appended");
    }

    fn remove(&mut self, index: usize) -> Result<Institution> {
        self.checked("remove", index)?;
        let removed = self.institutions.remove(index);
        let ctx = LogContext::new()
            .with_store(STORE_NAME)
            .with_operation("remove")
            .with_index(index)
            .with_len(self.institutions.len());
        registry_debug!(context = ctx, "removed institution '{}'", removed.name());
        Ok(removed)
    }

    fn update(&mut self, index: usize, item: Institution) -> Result<Institution> {
        self.checked("update", index)?;
        let previous = std::mem::replace(&mut self.institutions[index], item);
        let ctx = LogContext::new()
            .with_store(STORE_NAME)
            .with_operation("update")
            .with_index(index)
            .with_len(self.institutions.len());
        registry_debug!(context = ctx, "replaced institution '{}'", previous.name());
        Ok(previous)
    }

    fn get(&self, index: usize) -> Result<&Institution> {
        self.checked("get", index)?;
        Ok(&self.institutions[index])
    }

    fn get_all(&self) -> &[Institution] {
        &self.institutions
    }
}

impl FromIterator<Institution> for InstitutionStore {
    fn from_iter<I: IntoIterator<Item = Institution>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<Institution> for InstitutionStore {
    fn extend<I: IntoIterator<Item = Institution>>(&mut self, iter: I) {
        for institution in iter {
            self.add(institution);
        }
    }
}

impl IntoIterator for InstitutionStore {
    type Item = Institution;
    type IntoIter = std::vec::IntoIter<Institution>;

    fn into_iter(self) -> Self::IntoIter {
        self.institutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a InstitutionStore {
    type Item = &'a Institution;
    type IntoIter = std::slice::Iter<'a, Institution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
