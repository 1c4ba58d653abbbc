//! Classification of a diverging source/result script pair.

use crate::classify::class::FailureClass;
use crate::classify::rules::RuleSet;
use crate::diff::{diff_words, render_annotated_summary, DiffSegment};
use crate::{log_op_end, log_op_start};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Outcome of classifying one pair of normalized scripts.
///
/// Buckets hold the removed texts per class, in diff order; a bucket is
/// present only when it holds at least one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    source_id: String,
    target_id: String,
    main_class: FailureClass,
    classification: BTreeMap<FailureClass, Vec<String>>,
    summary: String,
}

impl ClassificationResult {
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// Class of the first classified removal, or `Unknown`
    pub fn main_class(&self) -> FailureClass {
        self.main_class
    }

    /// Removed texts filed under `class`; empty when none were.
    pub fn bucket(&self, class: FailureClass) -> &[String] {
        self.classification
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty buckets in class order
    pub fn buckets(&self) -> impl Iterator<Item = (FailureClass, &[String])> + '_ {
        self.classification.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Annotated diff text
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn is_classified(&self) -> bool {
        self.main_class.is_known()
    }
}

/// Classify the divergence between two normalized scripts with the
/// standard rule set.
pub fn classify_divergence(
    source_id: &str,
    target_id: &str,
    normalized_source: &str,
    normalized_result: &str,
) -> ClassificationResult {
    classify_divergence_with(
        &RuleSet::standard(),
        source_id,
        target_id,
        normalized_source,
        normalized_result,
    )
}

/// Classify with a caller-supplied rule set.
///
/// Removed segments are the text of the source missing from the result.
/// Added segments are recorded only in the summary.
pub fn classify_divergence_with(
    rules: &RuleSet,
    source_id: &str,
    target_id: &str,
    normalized_source: &str,
    normalized_result: &str,
) -> ClassificationResult {
    let start = Instant::now();
    log_op_start!(
        "classify_divergence",
        source_id = source_id,
        target_id = target_id
    );

    let segments = diff_words(normalized_source, normalized_result);
    let mut classes: Vec<Option<FailureClass>> = vec![None; segments.len()];
    let mut classification: BTreeMap<FailureClass, Vec<String>> = BTreeMap::new();
    let mut main_class = FailureClass::Unknown;

    for (i, segment) in segments.iter().enumerate() {
        let DiffSegment::Removed(text) = segment else {
            continue;
        };
        let class = rules.classify(text, i);
        classification.entry(class).or_default().push(text.clone());
        if class.is_known() {
            classes[i] = Some(class);
            if main_class == FailureClass::Unknown {
                main_class = class;
            }
        }
    }

    let summary = render_annotated_summary(&segments, |i| classes[i].and_then(|c| c.banner()));

    log_op_end!(
        "classify_divergence",
        duration_ms = start.elapsed().as_millis() as u64,
        main_class = main_class.as_str(),
        segment_count = segments.len() as u64
    );

    ClassificationResult {
        source_id: source_id.to_string(),
        target_id: target_id.to_string(),
        main_class,
        classification,
        summary,
    }
}
