//! Mapping between identifiers and catalog paths.

use crate::identity::Identifier;
use crate::module::ModuleIdentifier;
use crate::provider::ProviderIdentifier;
use crate::schema::{MODULE_DOCUMENT_SCHEMA, PROVIDER_DOCUMENT_SCHEMA};
use std::path::{Path, PathBuf};

pub const DOCUMENT_EXTENSION: &str = "json";

pub trait CatalogLayout: Identifier {
    /// Number of path components below the catalog root, file included.
    const DEPTH: usize;

    /// Embedded JSON Schema every stored document must satisfy.
    const DOCUMENT_SCHEMA: &'static str;

    /// Path components below the root; the last one is the file stem.
    fn components(&self) -> Vec<String>;

    /// Rebuild an identifier from path components (file stem last).
    ///
    /// Returns `None` for paths that do not follow the layout.
    fn from_components(components: &[&str]) -> Option<Self>;

    fn relative_path(&self) -> PathBuf {
        let mut components = self.components();
        let stem = components.pop().unwrap_or_default();
        let mut path: PathBuf = components.iter().collect();
        path.push(format!("{stem}.{DOCUMENT_EXTENSION}"));
        path
    }

    fn path_under(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

fn shard(namespace: &str) -> String {
    namespace
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase().to_string())
        .unwrap_or_default()
}

fn in_shard(shard_dir: &str, namespace: &str) -> bool {
    !namespace.is_empty() && shard(namespace) == shard_dir
}

impl CatalogLayout for ModuleIdentifier {
    const DEPTH: usize = 4;
    const DOCUMENT_SCHEMA: &'static str = MODULE_DOCUMENT_SCHEMA;

    fn components(&self) -> Vec<String> {
        vec![
            shard(&self.namespace),
            self.namespace.to_lowercase(),
            self.name.to_lowercase(),
            self.target_system.to_lowercase(),
        ]
    }

    fn from_components(components: &[&str]) -> Option<Self> {
        let [shard_dir, namespace, name, target] = components else {
            return None;
        };
        if !in_shard(shard_dir, namespace) || name.is_empty() || target.is_empty() {
            return None;
        }
        Some(ModuleIdentifier {
            namespace: namespace.to_string(),
            name: name.to_string(),
            target_system: target.to_string(),
        })
    }
}

impl CatalogLayout for ProviderIdentifier {
    const DEPTH: usize = 3;
    const DOCUMENT_SCHEMA: &'static str = PROVIDER_DOCUMENT_SCHEMA;

    fn components(&self) -> Vec<String> {
        vec![
            shard(&self.namespace),
            self.namespace.to_lowercase(),
            self.provider_name.to_lowercase(),
        ]
    }

    fn from_components(components: &[&str]) -> Option<Self> {
        let [shard_dir, namespace, name] = components else {
            return None;
        };
        if !in_shard(shard_dir, namespace) || name.is_empty() {
            return None;
        }
        Some(ProviderIdentifier {
            namespace: namespace.to_string(),
            provider_name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_path_is_sharded_and_lowercased() {
        let id = ModuleIdentifier {
            namespace: "HashiCorp".to_string(),
            name: "VPC".to_string(),
            target_system: "aws".to_string(),
        };
        assert_eq!(id.relative_path(), PathBuf::from("h/hashicorp/vpc/aws.json"));
        assert_eq!(
            id.path_under(Path::new("/data/modules")),
            PathBuf::from("/data/modules/h/hashicorp/vpc/aws.json")
        );
    }

    #[test]
    fn provider_path_round_trips_through_components() {
        let id = ProviderIdentifier {
            namespace: "opentofu".to_string(),
            provider_name: "google-beta".to_string(),
        };
        assert_eq!(id.relative_path(), PathBuf::from("o/opentofu/google-beta.json"));
        let parts = id.components();
        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        assert_eq!(ProviderIdentifier::from_components(&refs), Some(id));
    }

    #[test]
    fn components_outside_layout_are_rejected() {
        assert!(ModuleIdentifier::from_components(&["x", "hashicorp", "vpc", "aws"]).is_none());
        assert!(ModuleIdentifier::from_components(&["h", "hashicorp", "vpc"]).is_none());
        assert!(ProviderIdentifier::from_components(&["h", "hashicorp", "aws", "extra"]).is_none());
    }
}
