//! Result objects written once per invocation.
//!
//! On success the identifying fields and the catalog file are filled in and
//! `validation` is empty; on failure only `validation` is set. Calling
//! automation reads this file rather than the process log.

use crate::error::ReportError;
use crate::files::write_json_atomic;
use crate::identity::Identifier;
use crate::module::ModuleIdentifier;
use crate::pipeline::Admitted;
use crate::provider::ProviderIdentifier;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait Output: Serialize + Default {
    type Identifier: Identifier;

    fn admitted(admitted: &Admitted<Self::Identifier>) -> Self;

    fn rejected(validation: String) -> Self {
        let mut output = Self::default();
        output.set_validation(validation);
        output
    }

    fn set_validation(&mut self, validation: String);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOutput {
    pub file: String,
    pub namespace: String,
    pub name: String,
    pub target: String,
    pub validation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutput {
    pub file: String,
    pub namespace: String,
    pub name: String,
    pub validation: String,
}

impl Output for ModuleOutput {
    type Identifier = ModuleIdentifier;

    fn admitted(admitted: &Admitted<ModuleIdentifier>) -> Self {
        let id = &admitted.submission.identifier;
        Self {
            file: admitted.file.display().to_string(),
            namespace: id.namespace.clone(),
            name: id.name.clone(),
            target: id.target_system.clone(),
            validation: String::new(),
        }
    }

    fn set_validation(&mut self, validation: String) {
        self.validation = validation;
    }
}

impl Output for ProviderOutput {
    type Identifier = ProviderIdentifier;

    fn admitted(admitted: &Admitted<ProviderIdentifier>) -> Self {
        let id = &admitted.submission.identifier;
        Self {
            file: admitted.file.display().to_string(),
            namespace: id.namespace.clone(),
            name: id.provider_name.clone(),
            validation: String::new(),
        }
    }

    fn set_validation(&mut self, validation: String) {
        self.validation = validation;
    }
}

pub fn write_output<O: Output>(path: &Path, output: &O) -> Result<(), ReportError> {
    write_json_atomic(path, output).map_err(|cause| ReportError {
        path: path.to_path_buf(),
        cause,
    })
}
