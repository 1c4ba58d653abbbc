//! Heuristic classification of diverging pipeline scripts.
//!
//! A word diff of the normalized source against the normalized result is
//! computed, and every removed segment is tagged by the first matching rule
//! of a [`RuleSet`]. The class of the first tagged removal becomes the
//! result's main class, which is what corpus-wide triage counts.

pub mod class;
pub mod engine;
pub mod rules;

pub use class::FailureClass;
pub use engine::{classify_divergence, classify_divergence_with, ClassificationResult};
pub use rules::{ClassificationRule, RuleSet};
