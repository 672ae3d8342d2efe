//! Command-line configuration shared by the intake binaries.
//!
//! Each binary has its own clap struct because the catalog flag is named
//! after the entity kind; both collapse into [`Settings`] before anything
//! else runs.

use crate::github::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MODULE_DATA: &str = "../modules";
pub const DEFAULT_PROVIDER_DATA: &str = "../providers";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Raw `owner/repo` string as submitted.
    pub repository: String,
    /// Where the result object is written.
    pub output: PathBuf,
    /// Catalog root directory.
    pub data_dir: PathBuf,
    /// GitHub REST API base URL.
    pub api_url: String,
}

/// Add a module to the registry catalog.
#[derive(Debug, Parser)]
#[command(name = "add-module", version)]
pub struct ModuleArgs {
    /// GitHub repository, e.g. hashicorp/terraform-aws-vpc
    #[arg(long)]
    pub repository: String,

    /// Path of the JSON result file
    #[arg(long)]
    pub output: PathBuf,

    /// Root of the module catalog
    #[arg(long = "module-data", default_value = DEFAULT_MODULE_DATA)]
    pub module_data: PathBuf,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

/// Add a provider to the registry catalog.
#[derive(Debug, Parser)]
#[command(name = "add-provider", version)]
pub struct ProviderArgs {
    /// GitHub repository, e.g. hashicorp/terraform-provider-aws
    #[arg(long)]
    pub repository: String,

    /// Path of the JSON result file
    #[arg(long)]
    pub output: PathBuf,

    /// Root of the provider catalog
    #[arg(long = "provider-data", default_value = DEFAULT_PROVIDER_DATA)]
    pub provider_data: PathBuf,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl From<ModuleArgs> for Settings {
    fn from(args: ModuleArgs) -> Self {
        Settings {
            repository: args.repository,
            output: args.output,
            data_dir: args.module_data,
            api_url: args.api_url,
        }
    }
}

impl From<ProviderArgs> for Settings {
    fn from(args: ProviderArgs) -> Self {
        Settings {
            repository: args.repository,
            output: args.output,
            data_dir: args.provider_data,
            api_url: args.api_url,
        }
    }
}

/// Install the JSON subscriber on stderr; `RUST_LOG` overrides the default
/// `info` filter. A second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
