//! Fingerprint command
//!
//! Usage: kwdrift fingerprint --docs <doc-dump.json> [--extension <ext.json>]...
//!
//! Prints the freshly computed reference snapshot as pretty JSON to stdout.
//! Inspection only; never writes a file.

use clap::Args;
use kwdrift_core::fingerprint::build_reference;
use kwdrift_core::provider::DocumentationProvider;
use std::path::PathBuf;

use super::LogProfile;

#[derive(Debug, Args)]
pub struct FingerprintArgs {
    /// Doc-dump JSON file (keyword name -> documentation text)
    #[arg(long)]
    pub docs: PathBuf,

    /// Extension doc dumps, merged over the base in order
    #[arg(long = "extension")]
    pub extensions: Vec<PathBuf>,

    /// Logging profile
    #[arg(long, value_enum, default_value_t = LogProfile::Off)]
    pub log: LogProfile,
}

pub fn execute(args: FingerprintArgs) -> Result<(), Box<dyn std::error::Error>> {
    super::init_logging(args.log);

    let docs = super::doc_provider(&args.docs, &args.extensions).keyword_docs()?;
    let reference = build_reference(&docs)?;
    println!("{}", serde_json::to_string_pretty(&reference)?);
    Ok(())
}
