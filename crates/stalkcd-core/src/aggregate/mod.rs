//! Aggregation of classification results and the golden-profile check.

pub mod golden;
pub mod stats;

pub use golden::{check_against_golden, GoldenProfile};
pub use stats::{aggregate, AggregateStats};
