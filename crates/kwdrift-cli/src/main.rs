//! kwdrift CLI
//!
//! Command-line interface for keyword documentation translation drift checks

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "kwdrift")]
#[command(about = "kwdrift - Keyword documentation translation drift checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare library documentation against a translation snapshot
    Check(commands::check::CheckArgs),
    /// Print the freshly computed reference snapshot as JSON
    Fingerprint(commands::fingerprint::FingerprintArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::Fingerprint(args) => commands::fingerprint::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
