//! Check command
//!
//! Usage: kwdrift check --docs <doc-dump.json> --translation <translation.json>
//!        [--extension <ext.json>]... [--log <profile>]

use clap::Args;
use kwdrift_core::drift::{compute_drift, render_drift_table};
use kwdrift_core::fingerprint::build_reference;
use kwdrift_core::provider::DocumentationProvider;
use kwdrift_core::store::load_translation;
use std::path::PathBuf;

use super::LogProfile;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Doc-dump JSON file (keyword name -> documentation text)
    #[arg(long)]
    pub docs: PathBuf,

    /// Persisted translation snapshot JSON file
    #[arg(long)]
    pub translation: PathBuf,

    /// Extension doc dumps, merged over the base in order
    #[arg(long = "extension")]
    pub extensions: Vec<PathBuf>,

    /// Logging profile
    #[arg(long, value_enum, default_value_t = LogProfile::Off)]
    pub log: LogProfile,
}

pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    super::init_logging(args.log);

    let docs = super::doc_provider(&args.docs, &args.extensions).keyword_docs()?;
    let reference = build_reference(&docs)?;
    let persisted = load_translation(&args.translation)?;

    let entries = compute_drift(&reference, &persisted);
    let lines = render_drift_table(&entries, &reference);
    if lines.is_empty() {
        println!("Translation is in sync with library documentation.");
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }
    // Drift is a report, not a failure: exit 0 either way
    Ok(())
}
