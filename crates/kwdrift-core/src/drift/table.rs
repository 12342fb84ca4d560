//! Fixed-width table renderer for drift reports.

use crate::drift::engine::{DriftEntry, DriftReason};
use crate::snapshot::Snapshot;

const NAME_HEADER: &str = "Keyword name";
const REASON_HEADER: &str = "Reason";

/// Render drift entries as a Markdown-style fixed-width table.
///
/// Returns one string per output line, in order: header, separator, then
/// one row per entry. An empty `entries` slice yields an empty `Vec` with
/// no header, signalling "fully in sync".
///
/// The name column width is the maximum of the header literal, the longest
/// name in `width_source` and the longest name actually printed, so
/// persisted-only names longer than any reference name still align. The
/// reason column width is the longest of the four fixed reason literals.
/// Padding is right-padding with spaces; names wider than the computed
/// width are never truncated (they simply get no padding).
///
/// Output is byte-identical for identical inputs.
pub fn render_drift_table(entries: &[DriftEntry], width_source: &Snapshot) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let name_width = width_source
        .max_name_len()
        .max(entries.iter().map(|e| e.name.len()).max().unwrap_or(0))
        .max(NAME_HEADER.len());
    let reason_width = DriftReason::all_labels()
        .iter()
        .map(|label| label.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!(
        "| {:<name_width$} | {:<reason_width$} |",
        NAME_HEADER, REASON_HEADER
    ));
    lines.push(format!(
        "| {} | {} |",
        "-".repeat(name_width),
        "-".repeat(reason_width)
    ));
    for entry in entries {
        lines.push(format!(
            "| {:<name_width$} | {:<reason_width$} |",
            entry.name,
            entry.reason.label()
        ));
    }
    lines
}
