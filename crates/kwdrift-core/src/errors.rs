use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DriftError
pub type Result<T> = std::result::Result<T, DriftError>;

/// Error taxonomy for the drift-detection core.
///
/// Only fatal conditions are errors. The four drift outcomes
/// (missing translation, missing checksum, documentation changed, keyword
/// gone from the library) are classification results carried as data in
/// [`crate::drift::DriftReason`], never raised as failures.
#[derive(Debug, Error)]
pub enum DriftError {
    // ===== Builder Errors =====
    /// Documentation text absent while building a reference fingerprint.
    /// Indicates an upstream extraction defect; not recoverable here.
    #[error("Missing documentation for keyword: {keyword}")]
    MissingDocumentation { keyword: String },

    // ===== Documentation Source Errors =====
    /// Doc-dump file could not be read
    #[error("Failed to read documentation source {path}: {message}")]
    DocSourceRead { path: PathBuf, message: String },

    /// Doc-dump file is not valid JSON of the expected shape
    #[error("Malformed documentation source {path}: {message}")]
    MalformedDocSource { path: PathBuf, message: String },

    // ===== Translation Store Errors =====
    /// Persisted translation file could not be read
    #[error("Failed to read translation file {path}: {message}")]
    TranslationRead { path: PathBuf, message: String },

    /// Persisted translation file is not valid JSON of the expected shape
    #[error("Malformed translation file {path}: {message}")]
    MalformedTranslation { path: PathBuf, message: String },

    // ===== Integration =====
    /// Serialization or deserialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for DriftError {
    fn from(err: serde_json::Error) -> Self {
        DriftError::Serialization {
            message: err.to_string(),
        }
    }
}
