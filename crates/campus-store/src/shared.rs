//! ---
//! campus_section: "01-core-functionality"
//! campus_subsection: "module"
//! campus_type: "source"
//! campus_scope: "code"
//! campus_description: "Indexed container abstraction and in-memory stores."
//! campus_version: "v0.1.0"
//! campus_owner: "tbd"
//! ---
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Container, Result};

/// Thread-safe handle to a [`Container`].
///
/// All operations take the same lock, so each one is atomic with respect to
/// the others. Reads hand back owned clones because a borrow cannot outlive
/// the guard.
#[derive(Debug, Default)]
pub struct SharedContainer<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for SharedContainer<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> SharedContainer<C> {
    pub fn new(container: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(container)),
        }
    }

    pub fn add<T>(&self, item: T)
    where
        C: Container<T>,
    {
        self.inner.lock().add(item);
    }

    pub fn remove<T>(&self, index: usize) -> Result<T>
    where
        C: Container<T>,
    {
        self.inner.lock().remove(index)
    }

    pub fn update<T>(&self, index: usize, item: T) -> Result<T>
    where
        C: Container<T>,
    {
        self.inner.lock().update(index, item)
    }

    pub fn get<T: Clone>(&self, index: usize) -> Result<T>
    where
        C: Container<T>,
    {
        self.inner.lock().get(index).cloned()
    }

    /// Snapshot of every element at the time of the call.
    pub fn get_all<T: Clone>(&self) -> Vec<T>
    where
        C: Container<T>,
    {
        self.inner.lock().get_all().to_vec()
    }

    /// Run `f` with exclusive access, for compound read-modify-write sequences.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Recover the container when this is the last handle.
    pub fn try_unwrap(self) -> std::result::Result<C, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
