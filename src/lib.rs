//! Intake pipeline for a module and provider registry.
//!
//! A submission names a GitHub repository. The pipeline parses it into a
//! registry identifier, checks the address grammar, rejects duplicates,
//! collects published versions from GitHub and writes a catalog document.
//! Every run, admitted or not, ends with one JSON result object that calling
//! automation reads (see [`report`]).
//!
//! The binaries `add-module` and `add-provider` are thin wrappers around
//! [`submit_and_report`]; everything they do is reachable from here so it
//! can be driven against [`MemoryCatalog`] and scripted version sources.

pub mod address;
pub mod catalog;
pub mod config;
pub mod error;
pub mod files;
pub mod github;
pub mod identity;
pub mod metadata;
pub mod module;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod schema;
pub mod submission;

pub use address::{AddressError, validate_module_address, validate_provider_address};
pub use catalog::{Catalog, CatalogDocument, CatalogLayout, FileCatalog, MemoryCatalog};
pub use error::{InitError, ReportError, SubmitError};
pub use github::{AuthToken, GithubClient, Repository};
pub use identity::Identifier;
pub use metadata::{GithubVersions, VersionSource};
pub use module::{ModuleIdentifier, ModuleVersion};
pub use pipeline::{Admitted, Submitter, submit_and_report};
pub use provider::{ProviderIdentifier, ProviderTarget, ProviderVersion};
pub use report::{ModuleOutput, Output, ProviderOutput, write_output};
pub use submission::Submission;
