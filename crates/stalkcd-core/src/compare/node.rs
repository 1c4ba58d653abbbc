//! Structure model walked by the comparator.
//!
//! Record keys are visited in byte-wise lexical order, including keys that
//! look like integers: `{"2": .., "10": ..}` reports `obj[10]` before
//! `obj[2]`. Sequences are visited in index order.
//!
//! Numbers render in plain decimal notation with no exponent, so `1e21`
//! prints as `1000000000000000000000`. Negative zero prints as `0`.

use std::collections::BTreeMap;
use std::fmt;

/// A nested value built from records, sequences and scalars.
///
/// Record keys live in a `BTreeMap` so traversal order is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<Node>),
    Record(BTreeMap<String, Node>),
    /// A behavior-valued field; only its label is kept.
    Callable(String),
    /// A value the comparator has no dedicated rule for (e.g. a YAML tag).
    Tagged { tag: String, value: Box<Node> },
}

/// Runtime category of a node, as named in comparison messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Object,
    Function,
    Tagged,
}

impl NodeKind {
    /// Kind of an optional node; absence is `undefined`.
    pub fn of(node: Option<&Node>) -> Self {
        match node {
            None => NodeKind::Undefined,
            Some(Node::Null) => NodeKind::Null,
            Some(Node::Bool(_)) => NodeKind::Boolean,
            Some(Node::Number(_)) => NodeKind::Number,
            Some(Node::String(_)) => NodeKind::String,
            Some(Node::Sequence(_)) | Some(Node::Record(_)) => NodeKind::Object,
            Some(Node::Callable(_)) => NodeKind::Function,
            Some(Node::Tagged { .. }) => NodeKind::Tagged,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Undefined => "undefined",
            NodeKind::Null => "null",
            NodeKind::Boolean => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Object => "object",
            NodeKind::Function => "function",
            NodeKind::Tagged => "tagged",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        NodeKind::of(Some(self))
    }

    /// Records and sequences; both are walked as key → value mappings.
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Record(_) | Node::Sequence(_))
    }

    /// Own keys in traversal order. Sequence indices render as decimal keys.
    /// Scalars have no keys.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Node::Record(map) => map.keys().cloned().collect(),
            Node::Sequence(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn key_count(&self) -> usize {
        match self {
            Node::Record(map) => map.len(),
            Node::Sequence(items) => items.len(),
            _ => 0,
        }
    }

    /// Child lookup by key. A sequence answers only to canonical decimal
    /// indices, so `"01"` is absent just like an out-of-range index.
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Record(map) => map.get(key),
            Node::Sequence(items) => key
                .parse::<usize>()
                .ok()
                .filter(|i| i.to_string() == key)
                .and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Build a record from `(key, value)` pairs.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Record(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Number(n) if *n == 0.0 => f.write_str("0"),
            Node::Number(n) => write!(f, "{}", n),
            Node::String(s) => f.write_str(s),
            Node::Sequence(items) => {
                let rendered: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Node::Record(map) => {
                let rendered: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Node::Callable(label) => write!(f, "function {}", label),
            Node::Tagged { tag, value } => write!(f, "!{} {}", tag, value),
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n as f64)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Record(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect()),
        }
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => Node::Record(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Node::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => {
                let tagged = *tagged;
                Node::Tagged {
                    tag: tagged.tag.to_string().trim_start_matches('!').to_string(),
                    value: Box::new(Node::from(tagged.value)),
                }
            }
        }
    }
}

/// Mapping keys are coerced to strings the way an object key would be.
fn yaml_key(key: serde_yaml::Value) -> String {
    match Node::from(key) {
        Node::String(s) => s,
        Node::Null => "null".to_string(),
        other => other.to_string(),
    }
}
