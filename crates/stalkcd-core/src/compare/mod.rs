//! Structural comparison of nested data.
//!
//! [`compare_structures`] walks an expected structure against an actual one
//! and returns a [`CategorizedErrors`] report grouped by [`FailureReason`].
//! Divergence is data, never an error.
//!
//! ```
//! use stalkcd_core::compare::{compare_structures, FailureReason, Node};
//!
//! let expected = Node::record([("wrongValue", Node::from("that"))]);
//! let actual = Node::record([("wrongValue", Node::from("this"))]);
//! let errors = compare_structures(&expected, &actual);
//! assert_eq!(
//!     errors.get(FailureReason::UnequalString),
//!     Some(&["obj[wrongValue] = that --> actual = this".to_string()][..])
//! );
//! ```

pub mod engine;
pub mod node;
pub mod path;
pub mod reason;
pub mod rule;

pub use engine::{compare_structures, compare_structures_with};
pub use node::{Node, NodeKind};
pub use path::ContextPath;
pub use reason::{CategorizedErrors, FailureReason};
pub use rule::{safe_invoke, EquivalenceOverride, OverrideFault, OverrideOutcome, OverrideVerdict};
