//! Registry address grammar.
//!
//! Repository-name parsing accepts more than the registry does; these checks
//! run on the composed canonical address. Messages end up verbatim in the
//! `validation` field and name the offending part and the rule it broke.

use thiserror::Error;

const MAX_PART_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid {kind} address {address:?}: expected {expected} parts separated by '/'")]
    PartCount {
        kind: &'static str,
        address: String,
        expected: usize,
    },

    #[error("invalid {part} {value:?}: {rule}")]
    Part {
        part: &'static str,
        value: String,
        rule: &'static str,
    },
}

/// Validate a module address of the form `namespace/name/target_system`.
pub fn validate_module_address(address: &str) -> Result<(), AddressError> {
    let parts: Vec<&str> = address.split('/').collect();
    let [namespace, name, target] = parts.as_slice() else {
        return Err(AddressError::PartCount {
            kind: "module",
            address: address.to_string(),
            expected: 3,
        });
    };

    check_module_label("module namespace", namespace)?;
    check_module_label("module name", name)?;

    if target.is_empty()
        || target.len() > MAX_PART_LEN
        || !target
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(part_error(
            "module target system",
            target,
            "must be between one and 64 lowercase ASCII letters or digits",
        ));
    }
    Ok(())
}

/// Validate a provider address of the form `namespace/type`.
pub fn validate_provider_address(address: &str) -> Result<(), AddressError> {
    let parts: Vec<&str> = address.split('/').collect();
    let [namespace, provider_type] = parts.as_slice() else {
        return Err(AddressError::PartCount {
            kind: "provider",
            address: address.to_string(),
            expected: 2,
        });
    };

    check_provider_label("provider namespace", namespace)?;
    check_provider_label("provider type", provider_type)?;
    Ok(())
}

fn check_module_label(part: &'static str, value: &str) -> Result<(), AddressError> {
    const RULE: &str = "must be between one and 64 ASCII letters, digits, dashes or underscores, \
                        starting and ending with a letter or digit";

    if value.is_empty() || value.len() > MAX_PART_LEN {
        return Err(part_error(part, value, RULE));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
    {
        return Err(part_error(part, value, RULE));
    }
    if !starts_and_ends_alphanumeric(value) {
        return Err(part_error(part, value, RULE));
    }
    Ok(())
}

fn check_provider_label(part: &'static str, value: &str) -> Result<(), AddressError> {
    const RULE: &str = "must be between one and 64 ASCII letters, digits or dashes, \
                        and may not start or end with a dash";

    if value.is_empty() || value.len() > MAX_PART_LEN {
        return Err(part_error(part, value, RULE));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(part_error(part, value, RULE));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(part_error(part, value, RULE));
    }
    if value.contains("--") {
        return Err(part_error(part, value, "cannot use multiple consecutive dashes"));
    }
    Ok(())
}

fn starts_and_ends_alphanumeric(value: &str) -> bool {
    let first = value.chars().next();
    let last = value.chars().last();
    matches!((first, last), (Some(a), Some(b)) if a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric())
}

fn part_error(part: &'static str, value: &str, rule: &'static str) -> AddressError {
    AddressError::Part {
        part,
        value: value.to_string(),
        rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_address_accepts_registry_shapes() {
        for address in [
            "hashicorp/vpc/aws",
            "Azure/compute_vm/azurerm",
            "terraform-aws-modules/security-group/aws",
            "a/b/c1",
        ] {
            validate_module_address(address).expect(address);
        }
    }

    #[test]
    fn module_target_system_must_be_lowercase() {
        let err = validate_module_address("hashicorp/vpc/AWS").unwrap_err();
        assert!(matches!(
            err,
            AddressError::Part {
                part: "module target system",
                ..
            }
        ));
        assert!(err.to_string().contains("\"AWS\""));
    }

    #[test]
    fn module_labels_reject_edge_dashes_and_length() {
        assert!(validate_module_address("-ns/vpc/aws").is_err());
        assert!(validate_module_address("ns/vpc-/aws").is_err());
        let long = "a".repeat(65);
        assert!(validate_module_address(&format!("{long}/vpc/aws")).is_err());
        assert!(validate_module_address("ns/vpc").is_err());
        assert!(validate_module_address("ns/vpc/aws/extra").is_err());
    }

    #[test]
    fn provider_address_rules() {
        validate_provider_address("hashicorp/aws").expect("plain provider");
        validate_provider_address("opentofu/google-beta").expect("dashed type");

        assert!(validate_provider_address("hashicorp/aws-").is_err());
        assert!(validate_provider_address("hashicorp/").is_err());
        assert!(validate_provider_address("hashicorp/aws_ext").is_err());
        let doubled = validate_provider_address("hashicorp/foo--bar").unwrap_err();
        assert_eq!(
            doubled.to_string(),
            "invalid provider type \"foo--bar\": cannot use multiple consecutive dashes"
        );
        assert!(validate_provider_address("xn--abc/aws").is_err());
        assert!(matches!(
            validate_provider_address("a/b/c"),
            Err(AddressError::PartCount { expected: 2, .. })
        ));
    }
}
