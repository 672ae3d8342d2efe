//! In-memory catalog.
//!
//! Mirrors [`super::FileCatalog`] paths under a virtual root so reported file
//! locations look the same, and counts saves so callers can assert that a
//! rejected submission never reached storage.

use crate::catalog::{Catalog, CatalogLayout};
use crate::submission::Submission;
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

pub struct MemoryCatalog<I: CatalogLayout> {
    root: PathBuf,
    existing: Vec<I>,
    saved: RefCell<Vec<Submission<I>>>,
    save_calls: Cell<usize>,
}

impl<I: CatalogLayout> MemoryCatalog<I> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            existing: Vec::new(),
            saved: RefCell::new(Vec::new()),
            save_calls: Cell::new(0),
        }
    }

    /// Seed the catalog with entries that were admitted earlier.
    pub fn with_existing(mut self, identifiers: impl IntoIterator<Item = I>) -> Self {
        self.existing.extend(identifiers);
        self
    }

    /// Submissions saved through this catalog, in save order.
    pub fn saved(&self) -> Vec<Submission<I>> {
        self.saved.borrow().clone()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.get()
    }
}

impl<I: CatalogLayout> Catalog<I> for MemoryCatalog<I> {
    fn list(&self) -> Result<Vec<I>> {
        let mut all = self.existing.clone();
        all.extend(
            self.saved
                .borrow()
                .iter()
                .map(|submission| submission.identifier.clone()),
        );
        Ok(all)
    }

    fn path(&self, identifier: &I) -> PathBuf {
        identifier.path_under(&self.root)
    }

    fn save(&self, submission: &Submission<I>) -> Result<()> {
        self.save_calls.set(self.save_calls.get() + 1);
        self.saved.borrow_mut().push(submission.clone());
        Ok(())
    }
}
