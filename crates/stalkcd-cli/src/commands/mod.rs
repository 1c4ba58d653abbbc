//! Subcommands and the file loading they share

pub mod check;
pub mod classify;
pub mod compare;
pub mod normalize;

use stalkcd_core::compare::Node;
use stalkcd_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Read a text file, reporting failures as `ERR_IO`
pub fn read_text(path: &Path, op: &str) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op(op)
            .with_source_id(path.display().to_string())
            .with_message(e.to_string())
    })
}

/// Load a structure from a `.json` file or, otherwise, YAML
pub fn load_structure(path: &Path) -> Result<Node, ExError> {
    let text = read_text(path, "load_structure")?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str::<serde_json::Value>(&text)
            .map(Node::from)
            .map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<serde_yaml::Value>(&text)
            .map(Node::from)
            .map_err(|e| e.to_string())
    };

    parsed.map_err(|message| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("load_structure")
            .with_source_id(path.display().to_string())
            .with_message(message)
    })
}
