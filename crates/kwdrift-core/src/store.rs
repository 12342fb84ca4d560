//! Persisted translation snapshot reader.
//!
//! Read-only by design: nothing in this crate writes translation files.

use crate::errors::{DriftError, Result};
use crate::snapshot::Snapshot;
use std::path::Path;

/// Load the persisted translation snapshot from a JSON file.
///
/// The file root is an object mapping keyword name to
/// `{ "name": …, "doc": …, "sha256": … }`, with `doc` and `sha256`
/// optionally absent in legacy entries.
///
/// # Errors
///
/// - `DriftError::TranslationRead` — file missing or unreadable
/// - `DriftError::MalformedTranslation` — not valid JSON, or the root is
///   not an object of records
pub fn load_translation(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path).map_err(|e| DriftError::TranslationRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let snapshot: Snapshot =
        serde_json::from_str(&text).map_err(|e| DriftError::MalformedTranslation {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    tracing::debug!(
        path = %path.display(),
        keywords = snapshot.len(),
        "loaded persisted translation"
    );
    Ok(snapshot)
}
