//! kwdrift Core - Keyword documentation translation drift detection
//!
//! This crate provides the comparison kernel for the documentation-translation
//! workflow, including:
//! - Snapshot model keyed by keyword name, with pseudo-keyword conventions
//! - Stable SHA256 fingerprinting of documentation text (UTF-16 encoded)
//! - Drift classification between a reference and a persisted snapshot
//! - Deterministic fixed-width table rendering of the drift report
//! - Documentation providers and the persisted-translation file reader
//!
//! The core is a pure function over two in-memory snapshots: it never writes
//! translation files and reports discrepancies as data, not as errors.

pub mod drift;
pub mod errors;
pub mod fingerprint;
pub mod logging;
pub mod provider;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use drift::{compute_drift, render_drift_table, DriftEntry, DriftReason};
pub use errors::{DriftError, Result};
pub use fingerprint::{build_reference, fingerprint};
pub use provider::{DocumentationProvider, JsonDocProvider, StaticProvider};
pub use snapshot::{KeywordRecord, Snapshot, INIT_PSEUDO_KEYWORD, INTRO_PSEUDO_KEYWORD};
pub use store::load_translation;
