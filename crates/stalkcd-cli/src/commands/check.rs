//! Check command
//!
//! Usage: stalkcd check <MANIFEST> [--golden <PROFILE>]
//!
//! The manifest is YAML listing reference/generated pairs, with paths
//! relative to the manifest:
//!
//! ```yaml
//! pairs:
//!   - source: build/expected.groovy
//!     target: build/Jenkinsfile
//! ```

use clap::Args;
use serde::Deserialize;
use stalkcd_core::errors::{ExError, ExErrorKind};
use stalkcd_core::{GoldenProfile, StalkError, ValidationRun};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Manifest of script pairs
    pub manifest: PathBuf,

    /// Golden profile (JSON) the run's statistics must match
    #[arg(short, long)]
    pub golden: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    pairs: Vec<ManifestPair>,
}

#[derive(Debug, Deserialize)]
struct ManifestPair {
    source: PathBuf,
    target: PathBuf,
}

fn load_manifest(path: &Path) -> Result<Manifest, ExError> {
    let text = super::read_text(path, "load_manifest")?;
    serde_yaml::from_str(&text).map_err(|e| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op("load_manifest")
            .with_source_id(path.display().to_string())
            .with_message(e.to_string())
    })
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = load_manifest(&args.manifest)?;
    let base = args.manifest.parent().unwrap_or_else(|| Path::new("."));

    let mut run = ValidationRun::new();
    for pair in &manifest.pairs {
        let source_path = base.join(&pair.source);
        let target_path = base.join(&pair.target);
        let source = super::read_text(&source_path, "check")?;
        let target = super::read_text(&target_path, "check")?;
        run.record_pair(
            &pair.source.display().to_string(),
            &pair.target.display().to_string(),
            &source,
            &target,
        );
    }

    let stats = run.finish();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    for result in run.results() {
        eprintln!("{}: {}", result.source_id(), result.main_class());
    }

    if let Some(golden_path) = &args.golden {
        let golden = GoldenProfile::from_json_str(&super::read_text(golden_path, "check")?)?;
        if let Err(mismatch) = run.verify(&golden) {
            eprintln!("{}", mismatch);
            let err = ExError::from(StalkError::from(mismatch)).with_run_id(run.run_id().clone());
            return Err(err.into());
        }
        println!("✓ Matches golden profile ({} pairs, {} identical)", manifest.pairs.len(), run.matched());
    }

    Ok(())
}
