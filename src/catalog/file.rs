//! Directory-backed catalog.
//!
//! Listing walks the tree on every call and rebuilds identifiers from path
//! components. Anything that does not sit at the layout's depth with a
//! `.json` extension is ignored rather than treated as an error, since
//! catalog directories also hold READMEs and tooling files.

use crate::catalog::layout::DOCUMENT_EXTENSION;
use crate::catalog::{Catalog, CatalogDocument, CatalogLayout};
use crate::files::write_json_atomic;
use crate::schema::DocumentSchema;
use crate::submission::Submission;
use anyhow::{Context, Result};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct FileCatalog<I> {
    root: PathBuf,
    _kind: PhantomData<I>,
}

impl<I: CatalogLayout> FileCatalog<I> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            _kind: PhantomData,
        }
    }

    /// Read back a stored document.
    pub fn load(&self, identifier: &I) -> Result<CatalogDocument<I::Version>> {
        let path = self.path(identifier);
        let data =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
    }
}

impl<I: CatalogLayout> Catalog<I> for FileCatalog<I> {
    fn list(&self) -> Result<Vec<I>> {
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "catalog root missing, treating as empty");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        collect_documents(&self.root, &mut files)?;
        files.sort();

        let mut identifiers = Vec::new();
        for file in files {
            let Ok(relative) = file.strip_prefix(&self.root) else {
                continue;
            };
            if let Some(identifier) = identifier_from_relative::<I>(relative) {
                identifiers.push(identifier);
            }
        }
        debug!(
            root = %self.root.display(),
            entries = identifiers.len(),
            "listed catalog"
        );
        Ok(identifiers)
    }

    fn path(&self, identifier: &I) -> PathBuf {
        identifier.path_under(&self.root)
    }

    fn save(&self, submission: &Submission<I>) -> Result<()> {
        let path = self.path(&submission.identifier);
        let document = CatalogDocument {
            versions: submission.versions.clone(),
        };
        let value = serde_json::to_value(&document)
            .with_context(|| format!("serializing {}", submission.address()))?;
        DocumentSchema::compile("catalog document", I::DOCUMENT_SCHEMA)?.validate(&value)?;

        write_json_atomic(&path, &value)?;
        info!(
            address = %submission.address(),
            file = %path.display(),
            versions = submission.versions.len(),
            "saved catalog entry"
        );
        Ok(())
    }
}

fn collect_documents(dir: &Path, acc: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_documents(&path, acc)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION) {
            acc.push(path);
        }
    }
    Ok(())
}

fn identifier_from_relative<I: CatalogLayout>(relative: &Path) -> Option<I> {
    let mut parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    if parts.len() != I::DEPTH {
        return None;
    }
    let file_name = parts.pop()?;
    let stem = file_name.strip_suffix(&format!(".{DOCUMENT_EXTENSION}"))?;
    parts.push(stem);
    I::from_components(&parts)
}
