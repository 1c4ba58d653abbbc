//! Compare command
//!
//! Usage: stalkcd compare <EXPECTED> <ACTUAL>

use clap::Args;
use stalkcd_core::compare::compare_structures;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference document; only its keys are checked
    pub expected: PathBuf,

    /// Document under test
    pub actual: PathBuf,
}

/// Execute compare command
///
/// Prints the categorized errors as JSON and fails when there are any.
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let expected = super::load_structure(&args.expected)?;
    let actual = super::load_structure(&args.actual)?;

    let errors = compare_structures(&expected, &actual);
    println!("{}", serde_json::to_string_pretty(&errors)?);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} difference(s) found", errors.total()).into())
    }
}
