//! Corpus-level statistics over classification results.

use crate::classify::{ClassificationResult, FailureClass};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Counts over a run's classification results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Number of results
    pub total: usize,
    /// Results whose main class is not `unknown`
    pub classified: usize,
    /// Results whose main class is `unknown`
    pub unclassified: usize,
    /// Main-class counts, in order of first encounter
    #[serde(rename = "mainClass", serialize_with = "serialize_histogram")]
    pub histogram: Vec<(FailureClass, usize)>,
}

impl AggregateStats {
    /// Count recorded for `class`, zero when it never occurred.
    pub fn count(&self, class: FailureClass) -> usize {
        self.histogram
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

fn serialize_histogram<S>(histogram: &[(FailureClass, usize)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(histogram.len()))?;
    for (class, count) in histogram {
        map.serialize_entry(class.as_str(), count)?;
    }
    map.end()
}

/// Fold results into statistics. Pure; input order only affects the
/// histogram order.
pub fn aggregate<'a, I>(results: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a ClassificationResult>,
{
    results
        .into_iter()
        .fold(AggregateStats::default(), |mut stats, result| {
            let class = result.main_class();
            stats.total += 1;
            if class.is_known() {
                stats.classified += 1;
            } else {
                stats.unclassified += 1;
            }
            match stats.histogram.iter_mut().find(|(c, _)| *c == class) {
                Some((_, n)) => *n += 1,
                None => stats.histogram.push((class, 1)),
            }
            stats
        })
}
