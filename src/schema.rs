//! Compiled JSON Schemas for documents this crate writes.
//!
//! Schemas ship inside the binary (see `schema/`), so a catalog directory can
//! never be populated with a document shape the registry does not accept.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

pub const MODULE_DOCUMENT_SCHEMA: &str = include_str!("../schema/module_document.schema.json");
pub const PROVIDER_DOCUMENT_SCHEMA: &str =
    include_str!("../schema/provider_document.schema.json");
pub const OUTPUT_SCHEMA: &str = include_str!("../schema/output.schema.json");

pub struct DocumentSchema {
    label: &'static str,
    compiled: JSONSchema,
}

impl DocumentSchema {
    /// Parse and compile an embedded schema.
    pub fn compile(label: &'static str, raw: &str) -> Result<Self> {
        let schema: Value = serde_json::from_str(raw)
            .map_err(|err| anyhow!("parsing {label} schema: {err}"))?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| anyhow!("compiling {label} schema: {err}"))?;
        Ok(Self { label, compiled })
    }

    /// Validate `instance`, reporting every violation at once.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {err}", err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{} failed schema validation:\n{details}", self.label);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_schemas_compile() {
        DocumentSchema::compile("module document", MODULE_DOCUMENT_SCHEMA).unwrap();
        DocumentSchema::compile("provider document", PROVIDER_DOCUMENT_SCHEMA).unwrap();
        DocumentSchema::compile("output", OUTPUT_SCHEMA).unwrap();
    }

    #[test]
    fn module_document_requires_versions() {
        let schema = DocumentSchema::compile("module document", MODULE_DOCUMENT_SCHEMA).unwrap();
        schema
            .validate(&json!({"versions": [{"version": "v1.0.0"}]}))
            .expect("valid document");

        let err = schema.validate(&json!({"versions": []})).unwrap_err();
        assert!(err.to_string().contains("module document"));
        assert!(schema.validate(&json!({"versions": [{}]})).is_err());
    }
}
