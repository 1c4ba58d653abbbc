//! stalkcd CLI
//!
//! Command-line interface for validating generated pipelines

use clap::{Parser, Subcommand};
use stalkcd_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "stalkcd")]
#[command(about = "stalkcd - Validate generated pipelines against their references", long_about = None)]
struct Cli {
    /// Logging profile (development or production); logs go to stderr
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Structurally compare two YAML or JSON documents
    Compare(commands::compare::CompareArgs),
    /// Print the canonical form of a pipeline script
    Normalize(commands::normalize::NormalizeArgs),
    /// Classify how a generated script diverges from its reference
    Classify(commands::classify::ClassifyArgs),
    /// Run a corpus manifest and check it against a golden profile
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Normalize(args) => commands::normalize::execute(args),
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
