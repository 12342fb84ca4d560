//! Documentation providers: sources of the keyword-name → doc-text mapping.
//!
//! The fingerprint builder is decoupled from any particular object model or
//! reflection mechanism behind the [`DocumentationProvider`] trait. A doc
//! text may be absent at this layer (upstream sources can expose
//! undocumented units); the builder decides whether that is fatal.

use crate::errors::{DriftError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A source of keyword documentation.
pub trait DocumentationProvider {
    /// Enumerate documentable units and their documentation text.
    ///
    /// Pseudo-keywords (`__init__`, `__intro__`) are ordinary entries here
    /// if the source carries them; providers add no special handling.
    ///
    /// # Errors
    ///
    /// Provider-specific read or parse failures.
    fn keyword_docs(&self) -> Result<BTreeMap<String, Option<String>>>;
}

/// In-memory provider, for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    docs: BTreeMap<String, Option<String>>,
}

impl StaticProvider {
    pub fn new(docs: BTreeMap<String, Option<String>>) -> Self {
        StaticProvider { docs }
    }
}

impl DocumentationProvider for StaticProvider {
    fn keyword_docs(&self) -> Result<BTreeMap<String, Option<String>>> {
        Ok(self.docs.clone())
    }
}

/// Provider backed by JSON doc-dump files.
///
/// The base file is a JSON object mapping keyword name to documentation
/// text (or `null` for an undocumented unit). Extension dumps are merged
/// over the base in the order they were added, later files winning on name
/// collision, so plugin keywords can shadow or extend the base library's.
#[derive(Debug, Clone)]
pub struct JsonDocProvider {
    path: PathBuf,
    extensions: Vec<PathBuf>,
}

impl JsonDocProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonDocProvider {
            path: path.into(),
            extensions: Vec::new(),
        }
    }

    /// Add an extension doc dump, merged after the base file.
    pub fn with_extension(mut self, path: impl Into<PathBuf>) -> Self {
        self.extensions.push(path.into());
        self
    }

    fn read_dump(path: &Path) -> Result<BTreeMap<String, Option<String>>> {
        let text = std::fs::read_to_string(path).map_err(|e| DriftError::DocSourceRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| DriftError::MalformedDocSource {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl DocumentationProvider for JsonDocProvider {
    fn keyword_docs(&self) -> Result<BTreeMap<String, Option<String>>> {
        let mut docs = Self::read_dump(&self.path)?;
        for extension in &self.extensions {
            let extension_docs = Self::read_dump(extension)?;
            tracing::debug!(
                path = %extension.display(),
                keywords = extension_docs.len(),
                "merging extension doc dump"
            );
            docs.extend(extension_docs);
        }
        Ok(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_docs() {
        let mut docs = BTreeMap::new();
        docs.insert("click".to_string(), Some("Clicks.".to_string()));
        docs.insert("undocumented".to_string(), None);
        let provider = StaticProvider::new(docs.clone());
        assert_eq!(provider.keyword_docs().unwrap(), docs);
    }
}
