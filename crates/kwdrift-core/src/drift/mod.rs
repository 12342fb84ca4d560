//! Drift detection between a reference and a persisted snapshot.
//!
//! [`engine`] classifies every keyword into one of four drift outcomes;
//! [`table`] renders the non-matching entries as a fixed-width table.
//!
//! ```no_run
//! use kwdrift_core::snapshot::Snapshot;
//!
//! let reference = Snapshot::new();
//! let persisted = Snapshot::new();
//! let entries = kwdrift_core::drift::compute_drift(&reference, &persisted);
//! let lines = kwdrift_core::drift::render_drift_table(&entries, &reference);
//! assert!(lines.is_empty()); // fully in sync
//! ```

pub mod engine;
pub mod table;

pub use engine::{compute_drift, DriftEntry, DriftReason};
pub use table::render_drift_table;
