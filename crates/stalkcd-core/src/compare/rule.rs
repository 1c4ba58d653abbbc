//! Custom equivalence overrides and their fail-open invocation.
//!
//! An override can declare two fields equivalent when plain equality would
//! not, e.g. a trigger written as a string on one side and a one-element list
//! on the other. A broken override must never abort a comparison: faults,
//! panics and missing verdicts all fall through to the default rules.

use crate::compare::node::Node;
use crate::compare::path::ContextPath;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;

/// Fault raised by an override while judging a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("override fault: {0}")]
pub struct OverrideFault(pub String);

/// Verdict of an override: `Ok(Some(b))` is a decision, `Ok(None)` means the
/// override declined to decide.
pub type OverrideVerdict = Result<Option<bool>, OverrideFault>;

/// Custom equivalence rule consulted for every visited key.
pub trait EquivalenceOverride {
    fn judge(&self, path: &ContextPath, expected: &Node, actual: Option<&Node>) -> OverrideVerdict;
}

impl<F> EquivalenceOverride for F
where
    F: Fn(&ContextPath, &Node, Option<&Node>) -> OverrideVerdict,
{
    fn judge(&self, path: &ContextPath, expected: &Node, actual: Option<&Node>) -> OverrideVerdict {
        self(path, expected, actual)
    }
}

/// Outcome of a guarded override call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideOutcome {
    /// The override returned a boolean verdict
    Accepted(bool),
    /// The override faulted, panicked or gave no verdict
    Rejected,
}

impl OverrideOutcome {
    /// Only an explicit `true` skips the key.
    pub fn skips_key(&self) -> bool {
        matches!(self, OverrideOutcome::Accepted(true))
    }
}

/// Invoke an override, mapping every failure mode to `Rejected`.
pub fn safe_invoke(
    rule: &dyn EquivalenceOverride,
    path: &ContextPath,
    expected: &Node,
    actual: Option<&Node>,
) -> OverrideOutcome {
    match catch_unwind(AssertUnwindSafe(|| rule.judge(path, expected, actual))) {
        Ok(Ok(Some(verdict))) => OverrideOutcome::Accepted(verdict),
        Ok(Ok(None)) => OverrideOutcome::Rejected,
        Ok(Err(fault)) => {
            tracing::debug!(path = %path, %fault, "override faulted; using default comparison");
            OverrideOutcome::Rejected
        }
        Err(_) => {
            tracing::debug!(path = %path, "override panicked; using default comparison");
            OverrideOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> ContextPath {
        ContextPath::root().child("on")
    }

    #[test]
    fn test_boolean_verdicts_are_accepted() {
        let yes = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict { Ok(Some(true)) };
        let no = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict { Ok(Some(false)) };
        let node = Node::from("push");

        assert_eq!(safe_invoke(&yes, &path(), &node, None), OverrideOutcome::Accepted(true));
        assert_eq!(safe_invoke(&no, &path(), &node, None), OverrideOutcome::Accepted(false));
    }

    #[test]
    fn test_fault_and_missing_verdict_are_rejected() {
        let fault = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict {
            Err(OverrideFault("boom".into()))
        };
        let silent = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict { Ok(None) };
        let node = Node::from("push");

        assert_eq!(safe_invoke(&fault, &path(), &node, None), OverrideOutcome::Rejected);
        assert_eq!(safe_invoke(&silent, &path(), &node, None), OverrideOutcome::Rejected);
    }

    #[test]
    fn test_panic_is_rejected() {
        let panicky = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict {
            panic!("override bug")
        };
        let outcome = safe_invoke(&panicky, &path(), &Node::Null, None);
        assert_eq!(outcome, OverrideOutcome::Rejected);
        assert!(!outcome.skips_key());
    }
}
