//! stalkcd core - conversion validation engine
//!
//! Proves that a generated pipeline artifact matches its checked-in
//! reference, and explains the mismatch when it does not:
//! - [`compare`]: recursive structural comparison with a categorized report
//! - [`normalize`]: canonical form of a generated script
//! - [`diff`] and [`classify`]: word diff plus heuristic failure classes
//! - [`aggregate`]: corpus statistics and the golden-profile check
//! - [`harness`]: a caller-owned validation run tying the above together
//!
//! Everything here is synchronous and free of I/O.

pub mod aggregate;
pub mod classify;
pub mod compare;
pub mod diff;
pub mod errors;
pub mod harness;
pub mod logging_facility;
pub mod normalize;

pub use stalkcd_core_types as core_types;

// Re-export commonly used types
pub use aggregate::{aggregate, check_against_golden, AggregateStats, GoldenProfile};
pub use classify::{classify_divergence, classify_divergence_with, ClassificationResult, FailureClass, RuleSet};
pub use compare::{compare_structures, compare_structures_with, CategorizedErrors, FailureReason, Node};
pub use errors::{AggregateMismatchError, ExError, ExErrorKind, StalkError};
pub use harness::{PairOutcome, ValidationRun};
pub use normalize::normalize;
