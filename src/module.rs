//! Module identifiers and version descriptors.
//!
//! Module repositories follow `<namespace>/terraform-<target>-<name>`. The
//! match runs against the input as given, so a module keeps whatever case the
//! submitter used; the address check then decides whether that case is
//! acceptable.

use crate::address::{AddressError, validate_module_address};
use crate::error::SubmitError;
use crate::github::Repository;
use crate::identity::Identifier;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static MODULE_REPOSITORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<namespace>[a-zA-Z0-9]+)/terraform-(?P<target>[a-zA-Z0-9]+)-(?P<name>[a-zA-Z0-9-]+)$",
    )
    .expect("module repository pattern compiles")
});

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ModuleIdentifier {
    pub namespace: String,
    pub name: String,
    pub target_system: String,
}

/// One published module version; `version` is the git tag as published.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ModuleVersion {
    pub version: String,
}

/// Parse `<namespace>/terraform-<target>-<name>` without changing case.
pub fn parse_repository(raw: &str) -> Result<ModuleIdentifier, SubmitError> {
    let captures = MODULE_REPOSITORY
        .captures(raw)
        .ok_or_else(|| SubmitError::Parse {
            raw: raw.to_string(),
        })?;

    Ok(ModuleIdentifier {
        namespace: captures["namespace"].to_string(),
        name: captures["name"].to_string(),
        target_system: captures["target"].to_string(),
    })
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.namespace, self.name, self.target_system)
    }
}

impl Identifier for ModuleIdentifier {
    type Version = ModuleVersion;

    const KIND: &'static str = "module";

    fn parse_repository(raw: &str) -> Result<Self, SubmitError> {
        parse_repository(raw)
    }

    fn validate_address(&self) -> Result<(), AddressError> {
        validate_module_address(&self.address())
    }

    fn repository(&self) -> Repository {
        Repository {
            owner: self.namespace.clone(),
            name: format!("terraform-{}-{}", self.target_system, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespace_target_and_name() {
        let id = parse_repository("hashicorp/terraform-aws-vpc").expect("valid module");
        assert_eq!(id.namespace, "hashicorp");
        assert_eq!(id.target_system, "aws");
        assert_eq!(id.name, "vpc");
        assert_eq!(id.to_string(), "hashicorp/vpc/aws");
    }

    #[test]
    fn preserves_case_and_keeps_dashes_in_name() {
        let id = parse_repository("HashiCorp/terraform-AWS-Vpc-Endpoints").expect("valid module");
        assert_eq!(id.namespace, "HashiCorp");
        assert_eq!(id.target_system, "AWS");
        assert_eq!(id.name, "Vpc-Endpoints");
    }

    #[test]
    fn rejects_non_matching_names() {
        for raw in [
            "",
            "hashicorp",
            "hashicorp/vpc",
            "hashicorp/terraform-aws",
            "hashicorp/terraform-aws-",
            "terraform-aws-modules/terraform-aws-vpc",
            "hashicorp/terraform-aws-vpc/extra",
            "https://github.com/hashicorp/terraform-aws-vpc",
        ] {
            let err = parse_repository(raw).expect_err(raw);
            assert!(matches!(err, SubmitError::Parse { .. }), "{raw}");
        }
    }

    #[test]
    fn repository_rebuilds_github_name() {
        let id = parse_repository("hashicorp/terraform-aws-vpc").unwrap();
        let repo = id.repository();
        assert_eq!(repo.owner, "hashicorp");
        assert_eq!(repo.name, "terraform-aws-vpc");
        assert_eq!(repo.url(), "https://github.com/hashicorp/terraform-aws-vpc");
    }

    #[test]
    fn address_check_rejects_uppercase_target() {
        let id = parse_repository("hashicorp/terraform-AWS-vpc").unwrap();
        assert!(id.validate_address().is_err());
        let ok = parse_repository("HashiCorp/terraform-aws-vpc").unwrap();
        ok.validate_address().expect("namespace case is allowed");
    }
}
