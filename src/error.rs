//! Error taxonomy for a single intake run.
//!
//! `SubmitError` covers every pipeline stage; each variant's `Display` is the
//! exact text written to the `validation` field of the output object.
//! `InitError` and `ReportError` sit outside the pipeline: the former aborts
//! before any output exists, the latter means the output itself could not be
//! written.

use crate::address::AddressError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid repository name: {raw}")]
    Parse { raw: String },

    #[error(transparent)]
    AddressFormat(#[from] AddressError),

    #[error("Repository already exists in the registry, {existing}")]
    Duplicate { existing: String },

    #[error("Unable to list the catalog: {0:#}")]
    Catalog(anyhow::Error),

    #[error("An unexpected error occurred: {0:#}")]
    MetadataFetch(anyhow::Error),

    #[error("No versions detected for repository {url}")]
    NoVersions { url: String },

    #[error("An unexpected error occurred while saving {}: {cause:#}", .path.display())]
    Persist {
        path: PathBuf,
        cause: anyhow::Error,
    },
}

/// Raised before the pipeline starts; nothing is reported for these.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no GitHub token found, set GITHUB_TOKEN or GH_TOKEN")]
    MissingToken,

    #[error("GitHub token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    #[error("unable to build the GitHub client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
#[error("unable to write result to {}: {cause:#}", .path.display())]
pub struct ReportError {
    pub path: PathBuf,
    pub cause: anyhow::Error,
}
