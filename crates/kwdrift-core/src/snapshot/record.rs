//! Keyword record: one documented unit within a snapshot.

use serde::{Deserialize, Serialize};

/// Reserved name for constructor-level documentation.
///
/// Pseudo-keywords are ordinary snapshot entries with well-known names;
/// nothing downstream treats them specially.
pub const INIT_PSEUDO_KEYWORD: &str = "__init__";

/// Reserved name for library-level documentation.
pub const INTRO_PSEUDO_KEYWORD: &str = "__intro__";

/// One documented unit: a real keyword or one of the two pseudo-keywords.
///
/// In records produced by the fingerprint builder, `doc` and `sha256` are
/// always `Some`. Records loaded from a persisted translation file may lack
/// either (legacy/incomplete entries); a missing `sha256` there is a
/// reportable drift outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordRecord {
    /// Keyword name, unique within a snapshot
    #[serde(default)]
    pub name: String,
    /// Documentation text
    #[serde(default)]
    pub doc: Option<String>,
    /// Hex-encoded SHA256 fingerprint of `doc`
    #[serde(default)]
    pub sha256: Option<String>,
}

impl KeywordRecord {
    pub fn new(name: &str, doc: Option<String>, sha256: Option<String>) -> Self {
        KeywordRecord {
            name: name.to_string(),
            doc,
            sha256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_entry_without_checksum_deserializes() {
        // Persisted files may carry entries with no sha256 (or nothing at all)
        let record: KeywordRecord = serde_json::from_str(r#"{"name":"click","doc":"Clicks."}"#).unwrap();
        assert_eq!(record.name, "click");
        assert_eq!(record.doc.as_deref(), Some("Clicks."));
        assert_eq!(record.sha256, None);

        let empty: KeywordRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.name, "");
        assert_eq!(empty.sha256, None);
    }

    #[test]
    fn test_pseudo_keyword_names() {
        assert_eq!(INIT_PSEUDO_KEYWORD, "__init__");
        assert_eq!(INTRO_PSEUDO_KEYWORD, "__intro__");
    }
}
