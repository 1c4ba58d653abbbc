//! Word-level diff of normalized scripts.
//!
//! ```
//! use stalkcd_core::diff::{diff_words, DiffSegment};
//!
//! let segments = diff_words("agent{label'x'}", "agent{docker'x'}");
//! assert_eq!(segments[1], DiffSegment::Removed("label".to_string()));
//! ```

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{diff_words, tokenize};
pub use human_summary::render_annotated_summary;
pub use model::DiffSegment;
