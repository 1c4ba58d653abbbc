//! Caller-owned validation run over a corpus of script pairs.
//!
//! A run normalizes each source/result pair, keeps a classification for
//! every pair that still diverges, and folds the kept results into
//! [`AggregateStats`] at the end.

use crate::aggregate::{aggregate, check_against_golden, AggregateStats, GoldenProfile};
use crate::classify::{classify_divergence_with, ClassificationResult, RuleSet};
use crate::errors::AggregateMismatchError;
use crate::normalize::normalize;
use stalkcd_core_types::RunId;

/// What happened to one recorded pair.
#[derive(Debug, PartialEq, Eq)]
pub enum PairOutcome<'a> {
    /// Both sides normalize to the same text
    Match,
    /// The sides diverge; the stored classification
    Diverged(&'a ClassificationResult),
}

/// Ordered collection of classification results for one run.
#[derive(Debug)]
pub struct ValidationRun {
    run_id: RunId,
    rules: RuleSet,
    matched: usize,
    results: Vec<ClassificationResult>,
}

impl ValidationRun {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::standard())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            run_id: RunId::new(),
            rules,
            matched: 0,
            results: Vec::new(),
        }
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    /// Normalize and compare one pair, classifying it when it diverges.
    pub fn record_pair(
        &mut self,
        source_id: &str,
        target_id: &str,
        raw_source: &str,
        raw_result: &str,
    ) -> PairOutcome<'_> {
        let source = normalize(raw_source);
        let result = normalize(raw_result);

        if source == result {
            self.matched += 1;
            tracing::debug!(run_id = %self.run_id, source_id, target_id, "pair matches");
            return PairOutcome::Match;
        }

        let classification =
            classify_divergence_with(&self.rules, source_id, target_id, &source, &result);
        tracing::debug!(
            run_id = %self.run_id,
            source_id,
            target_id,
            main_class = classification.main_class().as_str(),
            "pair diverges"
        );
        let index = self.results.len();
        self.results.push(classification);
        PairOutcome::Diverged(&self.results[index])
    }

    /// Pairs that normalized to identical text
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Diverging pairs, in recording order
    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }

    pub fn finish(&self) -> AggregateStats {
        let stats = aggregate(&self.results);
        tracing::info!(
            run_id = %self.run_id,
            result_count = stats.total as u64,
            matched = self.matched as u64,
            classified = stats.classified as u64,
            "validation run finished"
        );
        stats
    }

    /// Aggregate the run and check it against `golden`.
    pub fn verify(&self, golden: &GoldenProfile) -> Result<AggregateStats, AggregateMismatchError> {
        let stats = self.finish();
        check_against_golden(&stats, golden)?;
        Ok(stats)
    }
}

impl Default for ValidationRun {
    fn default() -> Self {
        Self::new()
    }
}
