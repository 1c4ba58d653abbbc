//! Normalize command
//!
//! Usage: stalkcd normalize <FILE>

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Pipeline script to canonicalize
    pub file: PathBuf,
}

/// Execute normalize command
pub fn execute(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = super::read_text(&args.file, "normalize")?;
    println!("{}", stalkcd_core::normalize(&raw));
    Ok(())
}
