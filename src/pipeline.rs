//! The submission pipeline.
//!
//! A straight line of stages, each run once: parse, address check, duplicate
//! check, version fetch, non-empty gate, save. The first failing stage ends
//! the run with its [`SubmitError`]; nothing is persisted unless every stage
//! before `save` passed.

use crate::catalog::Catalog;
use crate::error::SubmitError;
use crate::identity::Identifier;
use crate::metadata::VersionSource;
use crate::report::{Output, write_output};
use crate::submission::Submission;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// A submission that made it into the catalog, plus where it was written.
#[derive(Clone, Debug)]
pub struct Admitted<I: Identifier> {
    pub submission: Submission<I>,
    pub file: PathBuf,
}

pub struct Submitter<'a, I, C, S> {
    catalog: &'a C,
    source: &'a S,
    _kind: PhantomData<fn() -> I>,
}

impl<'a, I, C, S> Submitter<'a, I, C, S>
where
    I: Identifier,
    C: Catalog<I>,
    S: VersionSource<I>,
{
    pub fn new(catalog: &'a C, source: &'a S) -> Self {
        Self {
            catalog,
            source,
            _kind: PhantomData,
        }
    }

    pub fn submit(&self, raw_repository: &str) -> Result<Admitted<I>, SubmitError> {
        let identifier = I::parse_repository(raw_repository)?;
        let mut submission = self.catalog.create(identifier);
        let address = submission.address();

        submission.identifier.validate_address()?;

        let existing = self.catalog.list().map_err(SubmitError::Catalog)?;
        if let Some(found) = existing
            .iter()
            .find(|entry| entry.same_address(&submission.identifier))
        {
            return Err(SubmitError::Duplicate {
                existing: found.address(),
            });
        }

        let repository = submission.identifier.repository();
        info!(kind = I::KIND, %address, %repository, "fetching versions");
        submission.versions = self
            .source
            .fetch_versions(&submission.identifier)
            .map_err(SubmitError::MetadataFetch)?;
        if submission.versions.is_empty() {
            return Err(SubmitError::NoVersions {
                url: repository.url(),
            });
        }

        let file = self.catalog.path(&submission.identifier);
        self.catalog
            .save(&submission)
            .map_err(|cause| SubmitError::Persist {
                path: file.clone(),
                cause,
            })?;

        info!(
            kind = I::KIND,
            %address,
            file = %file.display(),
            versions = submission.versions.len(),
            "admitted"
        );
        Ok(Admitted { submission, file })
    }
}

/// Run the pipeline and always write the result object to `output_path`.
///
/// Panics when the result object cannot be written: at that point there is
/// no channel left to report through.
pub fn submit_and_report<O, C, S>(
    raw_repository: &str,
    output_path: &Path,
    catalog: &C,
    source: &S,
) -> Result<Admitted<O::Identifier>, SubmitError>
where
    O: Output,
    C: Catalog<O::Identifier>,
    S: VersionSource<O::Identifier>,
{
    let result = Submitter::new(catalog, source).submit(raw_repository);

    let output = match &result {
        Ok(admitted) => O::admitted(admitted),
        Err(err) => {
            error!(
                kind = <O::Identifier as Identifier>::KIND,
                repository = raw_repository,
                error = %err,
                "unable to add {}",
                <O::Identifier as Identifier>::KIND
            );
            O::rejected(err.to_string())
        }
    };

    if let Err(err) = write_output(output_path, &output) {
        panic!("{err}");
    }
    result
}
