//! Failure reasons and the sparse error report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why a single structural comparison failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    UnequalKeyCount,
    TypeMismatch,
    UnequalString,
    UnequalBoolean,
    UnequalNumber,
    UnequalUnknownType,
}

impl FailureReason {
    pub const ALL: [FailureReason; 6] = [
        FailureReason::UnequalKeyCount,
        FailureReason::TypeMismatch,
        FailureReason::UnequalString,
        FailureReason::UnequalBoolean,
        FailureReason::UnequalNumber,
        FailureReason::UnequalUnknownType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::UnequalKeyCount => "UNEQUAL_KEY_COUNT",
            FailureReason::TypeMismatch => "TYPE_MISMATCH",
            FailureReason::UnequalString => "UNEQUAL_STRING",
            FailureReason::UnequalBoolean => "UNEQUAL_BOOLEAN",
            FailureReason::UnequalNumber => "UNEQUAL_NUMBER",
            FailureReason::UnequalUnknownType => "UNEQUAL_UNKNOWN_TYPE",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison report: reason → context messages, in traversal order.
///
/// Only reasons with at least one entry are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedErrors {
    entries: BTreeMap<FailureReason, Vec<String>>,
}

impl CategorizedErrors {
    /// Group an ordered list of findings into the sparse report.
    pub(crate) fn from_findings(findings: Vec<(FailureReason, String)>) -> Self {
        let mut entries: BTreeMap<FailureReason, Vec<String>> = BTreeMap::new();
        for (reason, context) in findings {
            entries.entry(reason).or_default().push(context);
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all reasons
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn get(&self, reason: FailureReason) -> Option<&[String]> {
        self.entries.get(&reason).map(Vec::as_slice)
    }

    pub fn reasons(&self) -> impl Iterator<Item = FailureReason> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FailureReason, &[String])> + '_ {
        self.entries.iter().map(|(r, v)| (*r, v.as_slice()))
    }

    /// Every message, grouped by reason
    pub fn all_messages(&self) -> Vec<&str> {
        self.entries
            .values()
            .flat_map(|v| v.iter().map(String::as_str))
            .collect()
    }
}
