//! Drift classification engine.
//!
//! The core entry point is [`compute_drift`], which accepts the freshly
//! built reference snapshot and the persisted translation snapshot and
//! produces an ordered list of [`DriftEntry`] rows. An empty result means
//! the translation is fully in sync.

use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Why a keyword appears in the drift report.
///
/// These are classification outcomes carried as data, never errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriftReason {
    /// Fingerprints differ: source documentation changed since translation
    DocumentationChanged,
    /// Keyword exists only in the persisted snapshot
    NoLibraryKeyword,
    /// Keyword exists only in the reference snapshot
    MissingTranslation,
    /// Persisted entry exists but carries no fingerprint
    MissingChecksum,
}

impl DriftReason {
    /// The fixed report literal for this reason.
    ///
    /// Reproduced verbatim from the established report format, including
    /// the misspelled checksum message. Downstream tooling matches on
    /// exact text, so the wording must not be corrected here.
    pub fn label(&self) -> &'static str {
        match self {
            DriftReason::DocumentationChanged => "Documentation update needed",
            DriftReason::NoLibraryKeyword => "Keyword not found from library",
            DriftReason::MissingTranslation => "Keyword is missing translation",
            DriftReason::MissingChecksum => "Keyword tranlsaton is missing checksum",
        }
    }

    /// All four reason literals, for width computation.
    pub fn all_labels() -> [&'static str; 4] {
        [
            DriftReason::DocumentationChanged.label(),
            DriftReason::NoLibraryKeyword.label(),
            DriftReason::MissingTranslation.label(),
            DriftReason::MissingChecksum.label(),
        ]
    }
}

/// One row of the drift report: a keyword and why it drifted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriftEntry {
    pub name: String,
    pub reason: DriftReason,
}

/// Classify every keyword across both snapshots.
///
/// Each name in the union of reference and persisted keys is evaluated
/// exactly once:
///
/// 1. Names in `reference`, in iteration order:
///    - absent from `persisted` → [`DriftReason::MissingTranslation`]
///    - persisted fingerprint absent → [`DriftReason::MissingChecksum`]
///    - fingerprints unequal (exact string comparison) →
///      [`DriftReason::DocumentationChanged`]
///    - otherwise: a match, excluded from the result
/// 2. Names only in `persisted`, in iteration order, appended after all
///    step-1 entries → [`DriftReason::NoLibraryKeyword`]
///
/// Pure and total over the two in-memory snapshots; no I/O, no retries.
pub fn compute_drift(reference: &Snapshot, persisted: &Snapshot) -> Vec<DriftEntry> {
    let mut entries = Vec::new();

    for (name, ref_record) in reference.iter() {
        let Some(persisted_record) = persisted.get(name) else {
            entries.push(DriftEntry {
                name: name.clone(),
                reason: DriftReason::MissingTranslation,
            });
            continue;
        };
        let Some(persisted_sha) = persisted_record.sha256.as_deref() else {
            entries.push(DriftEntry {
                name: name.clone(),
                reason: DriftReason::MissingChecksum,
            });
            continue;
        };
        if Some(persisted_sha) != ref_record.sha256.as_deref() {
            entries.push(DriftEntry {
                name: name.clone(),
                reason: DriftReason::DocumentationChanged,
            });
        }
    }

    for (name, _) in persisted.iter() {
        if !reference.contains(name) {
            entries.push(DriftEntry {
                name: name.clone(),
                reason: DriftReason::NoLibraryKeyword,
            });
        }
    }

    tracing::debug!(
        reference = reference.len(),
        persisted = persisted.len(),
        drifted = entries.len(),
        "computed drift"
    );
    entries
}
