//! Word diff output types.

use serde::{Deserialize, Serialize};

/// One span of a word-level diff, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DiffSegment {
    /// Present in both texts
    Unchanged(String),
    /// Present only in the second text
    Added(String),
    /// Present only in the first text
    Removed(String),
}

impl DiffSegment {
    pub fn text(&self) -> &str {
        match self {
            DiffSegment::Unchanged(t) | DiffSegment::Added(t) | DiffSegment::Removed(t) => t,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DiffSegment::Removed(_))
    }

    pub fn is_added(&self) -> bool {
        matches!(self, DiffSegment::Added(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, DiffSegment::Unchanged(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let seg = DiffSegment::Removed("script{".into());
        let json = serde_json::to_value(&seg).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "removed", "text": "script{"}));
    }
}
