//! Fingerprint builder: stable content hashes over documentation text.
//!
//! The fingerprint is a hex-encoded SHA256 digest of the documentation text
//! encoded as UTF-16 with a byte-order mark, which keeps the digests
//! byte-compatible with translation snapshots produced by other tooling in
//! the workflow. Same text, same fingerprint, across runs and
//! implementations.

use crate::errors::{DriftError, Result};
use crate::snapshot::{KeywordRecord, Snapshot};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Encode text as UTF-16: a `FF FE` byte-order mark followed by
/// little-endian code units (surrogate pairs for non-BMP scalars).
pub fn utf16_bytes(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.push(0xFF);
    bytes.push(0xFE);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Compute the fingerprint of a documentation text.
///
/// Returns a 64-character lowercase hex SHA256 digest over [`utf16_bytes`].
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(utf16_bytes(text));
    hex::encode(hasher.finalize())
}

/// Build the reference snapshot from extracted keyword documentation.
///
/// Every produced record carries `doc: Some` and `sha256: Some`.
/// Pure transformation; no I/O.
///
/// # Errors
///
/// Returns `DriftError::MissingDocumentation` if any entry has an absent
/// doc text. The reference snapshot may never contain an undocumented
/// entry; an absent doc is a precondition violation of the upstream
/// documentation provider, not a recoverable condition here.
pub fn build_reference(docs: &BTreeMap<String, Option<String>>) -> Result<Snapshot> {
    let mut snapshot = Snapshot::new();
    for (name, doc) in docs {
        let doc = doc.as_ref().ok_or_else(|| DriftError::MissingDocumentation {
            keyword: name.clone(),
        })?;
        snapshot.insert(KeywordRecord::new(
            name,
            Some(doc.clone()),
            Some(fingerprint(doc)),
        ));
    }
    tracing::debug!(keywords = snapshot.len(), "built reference snapshot");
    Ok(snapshot)
}
