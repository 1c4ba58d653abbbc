//! Failure classes for diverging scripts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of divergence a removed diff segment points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureClass {
    /// `parallel(` or `wrapCommands(` near the segment start
    ComplexStep,
    /// A section block (`agent{`, `steps{`, ...) in the wrong place
    MisplacedSection,
    /// `properties(` ahead of the pipeline block
    PrePipelineProperties,
    Script,
    Expression,
    /// Groovy definitions, imports and library annotations
    GroovyDef,
    ScriptedPipeline,
    UnsupportedEnvironment,
    Unknown,
}

impl FailureClass {
    pub const ALL: [FailureClass; 9] = [
        FailureClass::ComplexStep,
        FailureClass::MisplacedSection,
        FailureClass::PrePipelineProperties,
        FailureClass::Script,
        FailureClass::Expression,
        FailureClass::GroovyDef,
        FailureClass::ScriptedPipeline,
        FailureClass::UnsupportedEnvironment,
        FailureClass::Unknown,
    ];

    /// Serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureClass::ComplexStep => "complexStep",
            FailureClass::MisplacedSection => "misplacedSection",
            FailureClass::PrePipelineProperties => "prePipelineProperties",
            FailureClass::Script => "script",
            FailureClass::Expression => "expression",
            FailureClass::GroovyDef => "groovyDef",
            FailureClass::ScriptedPipeline => "scriptedPipeline",
            FailureClass::UnsupportedEnvironment => "unsupportedEnvironment",
            FailureClass::Unknown => "unknown",
        }
    }

    /// Banner shown in annotated summaries. `Unknown` has none.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            FailureClass::ComplexStep => Some("COMPLEX STEP"),
            FailureClass::MisplacedSection => Some("MISPLACED"),
            FailureClass::PrePipelineProperties => Some("PRE PROPERTIES"),
            FailureClass::Script => Some("SCRIPT"),
            FailureClass::Expression => Some("EXPRESSION"),
            FailureClass::GroovyDef => Some("GROOVY DEF"),
            FailureClass::ScriptedPipeline => Some("SCRIPTED PIPELINE"),
            FailureClass::UnsupportedEnvironment => Some("UNSUPPORTED ENV"),
            FailureClass::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != FailureClass::Unknown
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureClass::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown failure class '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for class in FailureClass::ALL {
            assert_eq!(class.as_str().parse::<FailureClass>(), Ok(class));
        }
        assert!("nope".parse::<FailureClass>().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&FailureClass::PrePipelineProperties).unwrap();
        assert_eq!(json, "\"prePipelineProperties\"");
    }

    #[test]
    fn test_only_unknown_lacks_banner() {
        for class in FailureClass::ALL {
            assert_eq!(class.banner().is_none(), class == FailureClass::Unknown);
        }
    }
}
