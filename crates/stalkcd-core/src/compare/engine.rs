//! Recursive structural comparison.
//!
//! `expected` is the reference: only its keys are visited. Keys present only
//! in `actual` surface solely through the key-count check of their parent.

use crate::compare::node::{Node, NodeKind};
use crate::compare::path::ContextPath;
use crate::compare::reason::{CategorizedErrors, FailureReason};
use crate::compare::rule::{safe_invoke, EquivalenceOverride};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Compare two structures and report why they diverge.
///
/// Never fails: every divergence is returned as an entry of the report.
pub fn compare_structures(expected: &Node, actual: &Node) -> CategorizedErrors {
    run(expected, actual, None)
}

/// Like [`compare_structures`], consulting `rule` for every visited key.
pub fn compare_structures_with(
    expected: &Node,
    actual: &Node,
    rule: &dyn EquivalenceOverride,
) -> CategorizedErrors {
    run(expected, actual, Some(rule))
}

fn run(expected: &Node, actual: &Node, rule: Option<&dyn EquivalenceOverride>) -> CategorizedErrors {
    let start = Instant::now();
    log_op_start!("compare_structures", with_override = rule.is_some());

    let mut walker = Walker {
        rule,
        findings: Vec::new(),
    };
    let root = ContextPath::root();
    if expected.is_composite() && actual.is_composite() {
        walker.compare_node(&root, expected, actual);
    } else {
        walker.compare_value(&root, expected, Some(actual));
    }

    let errors = CategorizedErrors::from_findings(walker.findings);
    log_op_end!(
        "compare_structures",
        duration_ms = start.elapsed().as_millis() as u64,
        error_count = errors.total() as u64
    );
    errors
}

struct Walker<'r> {
    rule: Option<&'r dyn EquivalenceOverride>,
    findings: Vec<(FailureReason, String)>,
}

impl Walker<'_> {
    fn push(&mut self, reason: FailureReason, context: String) {
        self.findings.push((reason, context));
    }

    /// Walk a node whose kind already matched its counterpart.
    fn compare_node(&mut self, path: &ContextPath, expected: &Node, actual: &Node) {
        if expected.key_count() != actual.key_count() {
            self.push(FailureReason::UnequalKeyCount, path.to_string());
        }

        for key in expected.keys() {
            let Some(expected_child) = expected.child(&key) else {
                continue;
            };
            let actual_child = actual.child(&key);
            let child_path = path.child(key);

            if let Some(rule) = self.rule {
                if safe_invoke(rule, &child_path, expected_child, actual_child).skips_key() {
                    continue;
                }
            }

            self.compare_value(&child_path, expected_child, actual_child);
        }
    }

    fn compare_value(&mut self, path: &ContextPath, expected: &Node, actual: Option<&Node>) {
        let expected_kind = expected.kind();
        let actual_kind = NodeKind::of(actual);
        if expected_kind != actual_kind {
            self.push(
                FailureReason::TypeMismatch,
                format!("{} type: {} --> actual: {}", path, expected_kind, actual_kind),
            );
            return;
        }
        let Some(actual) = actual else {
            return;
        };

        let reason = match (expected, actual) {
            (Node::Null, Node::Null) | (Node::Callable(_), Node::Callable(_)) => return,
            (Node::String(e), Node::String(a)) if e == a => return,
            (Node::String(_), Node::String(_)) => FailureReason::UnequalString,
            (Node::Bool(e), Node::Bool(a)) if e == a => return,
            (Node::Bool(_), Node::Bool(_)) => FailureReason::UnequalBoolean,
            (Node::Number(e), Node::Number(a)) if e == a => return,
            (Node::Number(_), Node::Number(_)) => FailureReason::UnequalNumber,
            (e, a) if e.is_composite() && a.is_composite() => {
                self.compare_node(path, e, a);
                return;
            }
            (e, a) if e == a => return,
            _ => FailureReason::UnequalUnknownType,
        };
        self.push(
            reason,
            format!("{} = {} --> actual = {}", path, expected, actual),
        );
    }
}
