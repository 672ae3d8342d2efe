#![allow(dead_code)]

use anyhow::{Result, anyhow};
use registry_intake::{
    Identifier, ModuleIdentifier, ModuleVersion, ProviderIdentifier, ProviderTarget,
    ProviderVersion, VersionSource,
};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Unreachable API endpoint; binary tests must never get as far as the network.
pub const DEAD_API_URL: &str = "http://127.0.0.1:9";

pub fn helper_binary(name: &str) -> PathBuf {
    match name {
        "add-module" => PathBuf::from(env!("CARGO_BIN_EXE_add-module")),
        "add-provider" => PathBuf::from(env!("CARGO_BIN_EXE_add-provider")),
        other => panic!("unknown helper binary {other}"),
    }
}

/// Command for `name` with a scrubbed GitHub environment.
pub fn intake_command(name: &str, token: Option<&str>) -> Command {
    let mut cmd = Command::new(helper_binary(name));
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env("GITHUB_API_URL", DEAD_API_URL)
        .env("RUST_LOG", "debug");
    if let Some(token) = token {
        cmd.env("GITHUB_TOKEN", token);
    }
    cmd
}

pub fn run(mut cmd: Command) -> Output {
    cmd.output()
        .unwrap_or_else(|err| panic!("failed to run {cmd:?}: {err}"))
}

pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Version source returning a fixed answer and counting calls.
pub struct ScriptedVersions<V> {
    answer: std::result::Result<Vec<V>, String>,
    calls: Cell<usize>,
}

impl<V> ScriptedVersions<V> {
    pub fn returning(versions: Vec<V>) -> Self {
        Self {
            answer: Ok(versions),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<I: Identifier> VersionSource<I> for ScriptedVersions<I::Version> {
    fn fetch_versions(&self, _identifier: &I) -> Result<Vec<I::Version>> {
        self.calls.set(self.calls.get() + 1);
        self.answer.clone().map_err(|message| anyhow!(message))
    }
}

pub fn module(namespace: &str, name: &str, target: &str) -> ModuleIdentifier {
    ModuleIdentifier {
        namespace: namespace.to_string(),
        name: name.to_string(),
        target_system: target.to_string(),
    }
}

pub fn provider(namespace: &str, name: &str) -> ProviderIdentifier {
    ProviderIdentifier {
        namespace: namespace.to_string(),
        provider_name: name.to_string(),
    }
}

pub fn module_versions(tags: &[&str]) -> Vec<ModuleVersion> {
    tags.iter()
        .map(|tag| ModuleVersion {
            version: tag.to_string(),
        })
        .collect()
}

pub fn provider_version(name: &str, version: &str) -> ProviderVersion {
    let base = format!(
        "https://github.com/hashicorp/terraform-provider-{name}/releases/download/v{version}"
    );
    let prefix = format!("terraform-provider-{name}_{version}");
    let filename = format!("{prefix}_linux_amd64.zip");
    ProviderVersion {
        version: version.to_string(),
        shasums_url: format!("{base}/{prefix}_SHA256SUMS"),
        shasums_signature_url: format!("{base}/{prefix}_SHA256SUMS.sig"),
        targets: vec![ProviderTarget {
            os: "linux".to_string(),
            arch: "amd64".to_string(),
            download_url: format!("{base}/{filename}"),
            filename,
        }],
    }
}
