//! Admits a GitHub repository into the provider catalog.

use clap::Parser;
use registry_intake::config::{ProviderArgs, Settings, init_logging};
use registry_intake::{
    FileCatalog, GithubVersions, ProviderIdentifier, ProviderOutput, submit_and_report,
};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let settings = Settings::from(ProviderArgs::parse());
    init_logging();

    let source = match GithubVersions::connect(&settings.api_url) {
        Ok(source) => source,
        Err(err) => {
            error!(error = %err, "failed to initialize");
            return ExitCode::FAILURE;
        }
    };
    let catalog: FileCatalog<ProviderIdentifier> = FileCatalog::new(&settings.data_dir);

    match submit_and_report::<ProviderOutput, _, _>(
        &settings.repository,
        &settings.output,
        &catalog,
        &source,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
