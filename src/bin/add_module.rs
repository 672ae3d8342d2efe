//! Admits a GitHub repository into the module catalog.
//!
//! Always writes the result object to `--output` once the GitHub client is
//! configured; exits non-zero when the module was not admitted.

use clap::Parser;
use registry_intake::config::{ModuleArgs, Settings, init_logging};
use registry_intake::{
    FileCatalog, GithubVersions, ModuleIdentifier, ModuleOutput, submit_and_report,
};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let settings = Settings::from(ModuleArgs::parse());
    init_logging();

    let source = match GithubVersions::connect(&settings.api_url) {
        Ok(source) => source,
        Err(err) => {
            error!(error = %err, "failed to initialize");
            return ExitCode::FAILURE;
        }
    };
    let catalog: FileCatalog<ModuleIdentifier> = FileCatalog::new(&settings.data_dir);

    match submit_and_report::<ModuleOutput, _, _>(
        &settings.repository,
        &settings.output,
        &catalog,
        &source,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
