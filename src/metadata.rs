//! Version discovery for submissions.
//!
//! [`VersionSource`] is the single capability the pipeline needs from the
//! hosting platform. [`GithubVersions`] implements it for both entity kinds;
//! tests substitute scripted sources.
//!
//! Modules are versioned by git tags, providers by GitHub releases that carry
//! a signed SHA256SUMS manifest. Tags or releases whose name is not semver
//! (after dropping one leading `v`) are ignored.

use crate::error::InitError;
use crate::github::{AuthToken, GithubClient, Release, Tag};
use crate::identity::Identifier;
use crate::module::{ModuleIdentifier, ModuleVersion};
use crate::provider::{ProviderIdentifier, ProviderTarget, ProviderVersion};
use anyhow::{Context, Result};
use tracing::{debug, warn};

pub trait VersionSource<I: Identifier> {
    /// Every published version of `identifier`, in discovery order.
    fn fetch_versions(&self, identifier: &I) -> Result<Vec<I::Version>>;
}

pub struct GithubVersions {
    client: GithubClient,
}

impl GithubVersions {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// Read the token from the environment and build a client for `api_url`.
    pub fn connect(api_url: &str) -> Result<Self, InitError> {
        let token = AuthToken::from_env()?;
        Ok(Self::new(GithubClient::new(&token, api_url)?))
    }
}

impl VersionSource<ModuleIdentifier> for GithubVersions {
    fn fetch_versions(&self, identifier: &ModuleIdentifier) -> Result<Vec<ModuleVersion>> {
        let repository = identifier.repository();
        let tags = self
            .client
            .tags(&repository)
            .with_context(|| format!("listing tags for {repository}"))?;
        let versions = module_versions_from_tags(&tags);
        debug!(
            repository = %repository,
            tags = tags.len(),
            versions = versions.len(),
            "collected module versions"
        );
        Ok(versions)
    }
}

impl VersionSource<ProviderIdentifier> for GithubVersions {
    fn fetch_versions(&self, identifier: &ProviderIdentifier) -> Result<Vec<ProviderVersion>> {
        let repository = identifier.repository();
        let releases = self
            .client
            .releases(&repository)
            .with_context(|| format!("listing releases for {repository}"))?;
        let versions = provider_versions_from_releases(&identifier.provider_name, &releases);
        debug!(
            repository = %repository,
            releases = releases.len(),
            versions = versions.len(),
            "collected provider versions"
        );
        Ok(versions)
    }
}

/// Keep semver tags, preserving the tag name (including any `v`).
pub fn module_versions_from_tags(tags: &[Tag]) -> Vec<ModuleVersion> {
    tags.iter()
        .filter(|tag| semver_tag(&tag.name).is_some())
        .map(|tag| ModuleVersion {
            version: tag.name.clone(),
        })
        .collect()
}

/// Convert published releases into provider versions.
///
/// Drafts and non-semver tags are dropped silently; releases missing their
/// SHA256SUMS manifest or signature are dropped with a warning.
pub fn provider_versions_from_releases(
    provider_name: &str,
    releases: &[Release],
) -> Vec<ProviderVersion> {
    let mut versions = Vec::new();
    for release in releases {
        if release.draft {
            continue;
        }
        let Some(version) = semver_tag(&release.tag_name) else {
            debug!(tag = %release.tag_name, "skipping non-semver release");
            continue;
        };
        match provider_version_from_release(provider_name, &version, release) {
            Some(entry) => versions.push(entry),
            None => warn!(
                tag = %release.tag_name,
                "skipping release without SHA256SUMS manifest and signature"
            ),
        }
    }
    versions
}

fn provider_version_from_release(
    provider_name: &str,
    version: &str,
    release: &Release,
) -> Option<ProviderVersion> {
    let prefix = format!("terraform-provider-{provider_name}_{version}_");
    let shasums_name = format!("{prefix}SHA256SUMS");
    let signature_name = format!("{shasums_name}.sig");

    let mut shasums_url = None;
    let mut shasums_signature_url = None;
    let mut targets = Vec::new();

    for asset in &release.assets {
        if asset.name == shasums_name {
            shasums_url = Some(asset.browser_download_url.clone());
        } else if asset.name == signature_name {
            shasums_signature_url = Some(asset.browser_download_url.clone());
        } else if let Some((os, arch)) = parse_target(&prefix, &asset.name) {
            targets.push(ProviderTarget {
                os,
                arch,
                filename: asset.name.clone(),
                download_url: asset.browser_download_url.clone(),
            });
        }
    }

    Some(ProviderVersion {
        version: version.to_string(),
        shasums_url: shasums_url?,
        shasums_signature_url: shasums_signature_url?,
        targets,
    })
}

fn parse_target(prefix: &str, asset_name: &str) -> Option<(String, String)> {
    let platform = asset_name.strip_prefix(prefix)?.strip_suffix(".zip")?;
    let (os, arch) = platform.split_once('_')?;
    if os.is_empty() || arch.is_empty() || arch.contains('_') {
        return None;
    }
    Some((os.to_string(), arch.to_string()))
}

/// Returns the bare semver string when `tag` is `X.Y.Z` or `vX.Y.Z`.
fn semver_tag(tag: &str) -> Option<String> {
    let bare = tag.strip_prefix('v').unwrap_or(tag);
    semver::Version::parse(bare).ok()?;
    Some(bare.to_string())
}
