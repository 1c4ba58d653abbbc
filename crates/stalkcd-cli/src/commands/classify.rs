//! Classify command
//!
//! Usage: stalkcd classify <SOURCE> <RESULT> [--json]

use clap::Args;
use stalkcd_core::{classify_divergence, normalize};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Checked-in reference script
    pub source: PathBuf,

    /// Generated script
    pub result: PathBuf,

    /// Print the full classification result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute classify command
///
/// Divergence is a finding, not a failure: the command succeeds either way.
pub fn execute(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = normalize(&super::read_text(&args.source, "classify")?);
    let result = normalize(&super::read_text(&args.result, "classify")?);

    let classification = classify_divergence(
        &args.source.display().to_string(),
        &args.result.display().to_string(),
        &source,
        &result,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else if source == result {
        println!("✓ Scripts match");
    } else {
        println!("main class: {}", classification.main_class());
        for (class, texts) in classification.buckets() {
            println!("  {}: {}", class, texts.len());
        }
        println!();
        println!("{}", classification.summary());
    }

    Ok(())
}
