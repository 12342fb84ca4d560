//! CLI command modules

pub mod check;
pub mod fingerprint;

use clap::ValueEnum;
use kwdrift_core::logging::{self, Profile};
use kwdrift_core::provider::JsonDocProvider;
use std::path::{Path, PathBuf};

/// Logging profile selection for the `--log` flag.
///
/// Defaults to `off` so report output stays clean for piping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Development,
    Production,
    Off,
}

pub fn init_logging(profile: LogProfile) {
    match profile {
        LogProfile::Development => logging::init(Profile::Development),
        LogProfile::Production => logging::init(Profile::Production),
        LogProfile::Off => {}
    }
}

/// Build the doc-dump provider from the shared `--docs`/`--extension` flags.
pub fn doc_provider(docs: &Path, extensions: &[PathBuf]) -> JsonDocProvider {
    let mut provider = JsonDocProvider::new(docs);
    for extension in extensions {
        provider = provider.with_extension(extension);
    }
    provider
}
