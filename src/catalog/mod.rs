//! Catalog storage for admitted entries.
//!
//! The pipeline talks to storage only through [`Catalog`]: list what exists,
//! compute where an entry lives, and save a new one. [`FileCatalog`] is the
//! on-disk catalog used by the binaries; [`MemoryCatalog`] keeps everything in
//! memory so pipeline behavior can be exercised without a filesystem.
//!
//! # Layout
//!
//! ```text
//! modules/h/hashicorp/vpc/aws.json      <- namespace/name/target
//! providers/h/hashicorp/aws.json        <- namespace/type
//! ```
//!
//! Every path component is lower-cased; the first directory is the first
//! character of the namespace.

pub mod file;
pub mod layout;
pub mod memory;

pub use file::FileCatalog;
pub use layout::CatalogLayout;
pub use memory::MemoryCatalog;

use crate::identity::Identifier;
use crate::submission::Submission;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub trait Catalog<I: Identifier> {
    /// Every identifier currently stored, read fresh on each call.
    fn list(&self) -> Result<Vec<I>>;

    /// Deterministic storage location for `identifier`.
    fn path(&self, identifier: &I) -> PathBuf;

    /// Persist `submission` at `path(submission.identifier)`.
    ///
    /// Does not check for an existing entry; callers run the duplicate check
    /// first.
    fn save(&self, submission: &Submission<I>) -> Result<()>;

    /// Start an empty submission for `identifier`.
    fn create(&self, identifier: I) -> Submission<I> {
        Submission::new(identifier)
    }
}

/// JSON document stored for each catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument<V> {
    pub versions: Vec<V>,
}
