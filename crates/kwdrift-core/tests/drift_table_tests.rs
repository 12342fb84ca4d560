//! Drift table rendering integration tests
//!
//! These tests pin the exact report format: header literals, separator,
//! column widths, the verbatim reason strings, and the empty-report law.

use kwdrift_core::drift::{compute_drift, render_drift_table, DriftEntry, DriftReason};
use kwdrift_core::fingerprint::build_reference;
use kwdrift_core::snapshot::{KeywordRecord, Snapshot};
use std::collections::BTreeMap;

fn reference_of(docs: &[(&str, &str)]) -> Snapshot {
    let map: BTreeMap<String, Option<String>> = docs
        .iter()
        .map(|(name, doc)| (name.to_string(), Some(doc.to_string())))
        .collect();
    build_reference(&map).unwrap()
}

#[test]
fn test_in_sync_snapshots_render_empty_report() {
    // Scenario: identical name→fingerprint sets on both sides
    // Then: render(diff(..)) is an empty sequence, no header emitted

    let reference = reference_of(&[("click", "Clicks.")]);
    let persisted = reference.clone();

    let entries = compute_drift(&reference, &persisted);
    let lines = render_drift_table(&entries, &reference);
    assert!(lines.is_empty());
}

#[test]
fn test_missing_translation_row_exact_format() {
    // Scenario: single untranslated keyword, names shorter than the header
    // Then: name column is header width (12), reason column is 38

    let reference = reference_of(&[("click", "Clicks.")]);
    let persisted = Snapshot::new();

    let lines = render_drift_table(&compute_drift(&reference, &persisted), &reference);
    assert_eq!(
        lines,
        vec![
            "| Keyword name | Reason                                 |".to_string(),
            "| ------------ | -------------------------------------- |".to_string(),
            "| click        | Keyword is missing translation         |".to_string(),
        ]
    );
}

#[test]
fn test_reason_literals_verbatim() {
    // The checksum message misspelling is part of the format contract
    assert_eq!(
        DriftReason::DocumentationChanged.label(),
        "Documentation update needed"
    );
    assert_eq!(
        DriftReason::NoLibraryKeyword.label(),
        "Keyword not found from library"
    );
    assert_eq!(
        DriftReason::MissingTranslation.label(),
        "Keyword is missing translation"
    );
    assert_eq!(
        DriftReason::MissingChecksum.label(),
        "Keyword tranlsaton is missing checksum"
    );
}

#[test]
fn test_long_name_widens_all_rows_without_truncation() {
    // Scenario: a 40-character keyword name in the reference snapshot
    // Then: every line pads the name column to 40, nothing truncated

    let long_name = "wait_until_network_is_idle_and_page_done";
    assert_eq!(long_name.len(), 40);

    let reference = reference_of(&[(long_name, "Waits."), ("click", "Clicks.")]);
    let persisted = Snapshot::new();

    let lines = render_drift_table(&compute_drift(&reference, &persisted), &reference);
    assert_eq!(lines.len(), 4);
    // "| " + 40 + " | " + 38 + " |"
    assert!(lines.iter().all(|line| line.len() == 85));
    assert!(lines[2].contains(long_name));
}

#[test]
fn test_persisted_only_name_longer_than_any_reference_name() {
    // Scenario: the widest printed name comes from the persisted snapshot
    // Then: the width covers it even though the width source is the reference

    let reference = reference_of(&[("click", "Clicks.")]);
    let mut persisted = Snapshot::new();
    persisted.insert(KeywordRecord::new(
        "a_very_long_legacy_keyword_name_indeed",
        None,
        Some("X".into()),
    ));

    let lines = render_drift_table(&compute_drift(&reference, &persisted), &reference);
    let width = lines[0].len();
    assert!(lines.iter().all(|line| line.len() == width));
    assert!(lines
        .iter()
        .any(|line| line.contains("a_very_long_legacy_keyword_name_indeed ")));
}

#[test]
fn test_name_wider_than_width_source_gets_no_padding() {
    // Width source deliberately narrower than a printed name: must not
    // crash or truncate, the over-wide row just breaks alignment
    let entries = vec![DriftEntry {
        name: "this_name_is_wider_than_the_width_source".to_string(),
        reason: DriftReason::NoLibraryKeyword,
    }];
    let lines = render_drift_table(&entries, &Snapshot::new());
    assert_eq!(lines.len(), 3);
    assert!(lines[2].contains("this_name_is_wider_than_the_width_source"));
}

#[test]
fn test_render_is_idempotent() {
    // Scenario: same snapshots rendered twice
    // Then: byte-identical output

    let reference = reference_of(&[("click", "New."), ("hover", "Hovers.")]);
    let mut persisted = Snapshot::new();
    persisted.insert(KeywordRecord::new("click", Some("Old.".into()), Some("Y".into())));
    persisted.insert(KeywordRecord::new("gone", None, Some("X".into())));

    let first = render_drift_table(&compute_drift(&reference, &persisted), &reference);
    let second = render_drift_table(&compute_drift(&reference, &persisted), &reference);
    assert_eq!(first, second);
}
