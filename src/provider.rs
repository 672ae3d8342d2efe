//! Provider identifiers and release descriptors.
//!
//! Provider repositories follow `<namespace>/terraform-provider-<name>`. The
//! whole input is lower-cased before matching, unlike modules, so the parsed
//! fields are always lower case.

use crate::address::{AddressError, validate_provider_address};
use crate::error::SubmitError;
use crate::github::Repository;
use crate::identity::Identifier;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static PROVIDER_REPOSITORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<namespace>[a-z0-9]+)/terraform-provider-(?P<name>[a-z0-9-]+)$")
        .expect("provider repository pattern compiles")
});

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProviderIdentifier {
    pub namespace: String,
    pub provider_name: String,
}

/// One published provider release.
///
/// `version` is bare semver (no `v`). The shasums files and targets are
/// download URLs of the release assets.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProviderVersion {
    pub version: String,
    pub shasums_url: String,
    pub shasums_signature_url: String,
    #[serde(default)]
    pub targets: Vec<ProviderTarget>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProviderTarget {
    pub os: String,
    pub arch: String,
    pub filename: String,
    pub download_url: String,
}

/// Parse `<namespace>/terraform-provider-<name>` after lower-casing the input.
pub fn parse_repository(raw: &str) -> Result<ProviderIdentifier, SubmitError> {
    let lowered = raw.to_lowercase();
    let captures = PROVIDER_REPOSITORY
        .captures(&lowered)
        .ok_or_else(|| SubmitError::Parse {
            raw: raw.to_string(),
        })?;

    Ok(ProviderIdentifier {
        namespace: captures["namespace"].to_string(),
        provider_name: captures["name"].to_string(),
    })
}

impl fmt::Display for ProviderIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.provider_name)
    }
}

impl Identifier for ProviderIdentifier {
    type Version = ProviderVersion;

    const KIND: &'static str = "provider";

    fn parse_repository(raw: &str) -> Result<Self, SubmitError> {
        parse_repository(raw)
    }

    fn validate_address(&self) -> Result<(), AddressError> {
        validate_provider_address(&self.address())
    }

    fn repository(&self) -> Repository {
        Repository {
            owner: self.namespace.clone(),
            name: format!("terraform-provider-{}", self.provider_name),
        }
    }
}
