//! Blocking GitHub REST client.
//!
//! Only the two listings intake needs: tags (modules) and releases
//! (providers). Both are paginated; pages are requested one after another
//! until a short page comes back. Nothing is retried.

use crate::error::InitError;
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const USER_AGENT: &str = concat!("registry-intake/", env!("CARGO_PKG_VERSION"));
const ACCEPT_HEADER: &str = "application/vnd.github+json";
const TOKEN_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];
const PER_PAGE: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `owner/name` of a GitHub repository.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// API token read once from the environment at startup.
#[derive(Clone)]
pub struct AuthToken(String);

impl AuthToken {
    /// Read `GITHUB_TOKEN`, falling back to `GH_TOKEN`.
    pub fn from_env() -> Result<Self, InitError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InitError> {
        TOKEN_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(AuthToken)
            .ok_or(InitError::MissingToken)
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

pub struct GithubClient {
    http: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: &AuthToken, api_url: &str) -> Result<Self, InitError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| InitError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// All tags of a repository in the order GitHub returns them.
    pub fn tags(&self, repository: &Repository) -> Result<Vec<Tag>> {
        self.paginate(&format!(
            "repos/{}/{}/tags",
            repository.owner, repository.name
        ))
    }

    /// All releases of a repository, drafts included.
    pub fn releases(&self, repository: &Repository) -> Result<Vec<Release>> {
        self.paginate(&format!(
            "repos/{}/{}/releases",
            repository.owner, repository.name
        ))
    }

    fn paginate<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let batch: Vec<T> = self.get_page(path, page)?;
            let count = batch.len();
            items.extend(batch);
            if count < PER_PAGE {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    fn get_page<T: DeserializeOwned>(&self, path: &str, page: usize) -> Result<Vec<T>> {
        let url = format!(
            "{}/{path}?per_page={PER_PAGE}&page={page}",
            self.api_url
        );
        debug!(%url, "requesting GitHub page");

        let response = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("requesting {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!(
                "GitHub API request {url} failed with status {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown error")
            );
        }

        response
            .json()
            .with_context(|| format!("parsing GitHub response from {url}"))
    }
}
