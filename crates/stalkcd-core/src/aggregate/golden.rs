//! Golden profile of expected run statistics and the check against it.

use crate::aggregate::stats::AggregateStats;
use crate::classify::FailureClass;
use crate::errors::{AggregateMismatchError, FieldMismatch, StalkError};
use crate::log_op_error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Persisted expectation for a run's statistics.
///
/// Every field is optional; only the fields present are checked. Fields the
/// profile names but statistics do not carry always mismatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classified: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unclassified: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_class: Option<BTreeMap<FailureClass, usize>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl GoldenProfile {
    /// Parse a profile from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, StalkError> {
        serde_json::from_str(text).map_err(|e| StalkError::InvalidGoldenProfile {
            reason: e.to_string(),
        })
    }

    /// Profile that pins every field of `stats`.
    pub fn pinning(stats: &AggregateStats) -> Self {
        Self {
            total: Some(stats.total),
            classified: Some(stats.classified),
            unclassified: Some(stats.unclassified),
            main_class: Some(stats.histogram.iter().copied().collect()),
            extra: BTreeMap::new(),
        }
    }
}

fn compare_field(out: &mut Vec<FieldMismatch>, field: &str, expected: Option<usize>, actual: usize) {
    if let Some(expected) = expected {
        if expected != actual {
            out.push(FieldMismatch {
                field: field.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
}

/// Check statistics against a golden profile.
///
/// Every mismatched field is reported, not just the first. Histogram entries
/// are compared over the classes named by either side, a missing class
/// counting as zero, and only when the profile names a histogram at all.
pub fn check_against_golden(
    stats: &AggregateStats,
    golden: &GoldenProfile,
) -> Result<(), AggregateMismatchError> {
    let start = Instant::now();
    let mut mismatches = Vec::new();

    compare_field(&mut mismatches, "total", golden.total, stats.total);
    compare_field(&mut mismatches, "classified", golden.classified, stats.classified);
    compare_field(&mut mismatches, "unclassified", golden.unclassified, stats.unclassified);

    if let Some(expected) = &golden.main_class {
        let mut classes: Vec<FailureClass> = expected.keys().copied().collect();
        for (class, _) in &stats.histogram {
            if !expected.contains_key(class) {
                classes.push(*class);
            }
        }
        for class in classes {
            let want = expected.get(&class).copied().unwrap_or(0);
            compare_field(
                &mut mismatches,
                &format!("mainClass.{}", class),
                Some(want),
                stats.count(class),
            );
        }
    }

    for (field, value) in &golden.extra {
        mismatches.push(FieldMismatch {
            field: field.clone(),
            expected: match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
            actual: "undefined".to_string(),
        });
    }

    if mismatches.is_empty() {
        tracing::info!(op = "check_against_golden", total = stats.total as u64, "run matches golden profile");
        return Ok(());
    }

    let err = AggregateMismatchError { mismatches };
    log_op_error!(
        "check_against_golden",
        StalkError::from(err.clone()),
        duration_ms = start.elapsed().as_millis() as u64,
        mismatch_count = err.mismatches.len() as u64
    );
    Err(err)
}
