//! Location of a field inside a compared structure.

use std::fmt;

/// Ordered keys from the comparison root to the current field.
///
/// Renders as `obj[k1][k2]…`; the root renders as `obj[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContextPath {
    keys: Vec<String>,
}

impl ContextPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path one level deeper; `self` is left untouched.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut keys = self.keys.clone();
        keys.push(key.into());
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn depth(&self) -> usize {
        self.keys.len()
    }

    /// Last key, if not at the root
    pub fn leaf(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }
}

impl fmt::Display for ContextPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj[{}]", self.keys.join("]["))
    }
}
