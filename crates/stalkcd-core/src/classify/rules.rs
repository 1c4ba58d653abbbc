//! Declarative rule cascade for removed diff segments.

use crate::classify::class::FailureClass;
use regex::Regex;
use std::sync::LazyLock;

/// A pattern tried against the start of a removed segment.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    class: FailureClass,
    pattern: Regex,
}

impl ClassificationRule {
    /// Compile a rule. The pattern is anchored at the segment start.
    pub fn new(class: FailureClass, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self { class, pattern })
    }

    pub fn class(&self) -> FailureClass {
        self.class
    }

    pub fn matches(&self, segment: &str) -> bool {
        self.pattern.is_match(segment)
    }
}

static STANDARD: LazyLock<RuleSet> = LazyLock::new(|| {
    let rule = |class: FailureClass, pattern: &str| ClassificationRule::new(class, pattern).unwrap();
    RuleSet {
        rules: vec![
            rule(FailureClass::ComplexStep, r".{0,30}(parallel|wrapCommands)\("),
            rule(
                FailureClass::MisplacedSection,
                r".{0,5}(agent|options|steps?|stages|parallel)\{",
            ),
            rule(FailureClass::PrePipelineProperties, r"properties\("),
            rule(FailureClass::Script, r"[^a-zA-Z]*script\{"),
            rule(FailureClass::Expression, r"[^a-zA-Z]*expression\{"),
            rule(FailureClass::GroovyDef, r".{0,5}(def|import|@Library)"),
            rule(FailureClass::ScriptedPipeline, r"node"),
            rule(FailureClass::UnsupportedEnvironment, r"[0-9A-Za-z_]+\{"),
        ],
    }
});

/// Ordered rules; the first match wins.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
}

impl RuleSet {
    /// The standard cascade for generated pipeline scripts.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: ClassificationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Class of a removed segment at position `index` of the diff.
    ///
    /// With no matching rule, a diff that opens with a removal is taken to
    /// start with a Groovy prelude; anything else is `Unknown`.
    pub fn classify(&self, segment: &str, index: usize) -> FailureClass {
        self.rules
            .iter()
            .find(|r| r.matches(segment))
            .map(ClassificationRule::class)
            .unwrap_or(if index == 0 {
                FailureClass::GroovyDef
            } else {
                FailureClass::Unknown
            })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(segment: &str) -> FailureClass {
        RuleSet::standard().classify(segment, 3)
    }

    #[test]
    fn test_standard_cascade() {
        let cases = [
            ("parallel(a:{", FailureClass::ComplexStep),
            ("}}}wrapCommands(", FailureClass::ComplexStep),
            ("agent{", FailureClass::MisplacedSection),
            ("}step{", FailureClass::MisplacedSection),
            ("properties([", FailureClass::PrePipelineProperties),
            ("}}script{", FailureClass::Script),
            ("expression{", FailureClass::Expression),
            ("defx=1", FailureClass::GroovyDef),
            ("@Library('lib')", FailureClass::GroovyDef),
            ("node('linux')", FailureClass::ScriptedPipeline),
            ("dockerfile{", FailureClass::UnsupportedEnvironment),
            ("'x'", FailureClass::Unknown),
        ];
        for (segment, expected) in cases {
            assert_eq!(classify(segment), expected, "segment {:?}", segment);
        }
    }

    #[test]
    fn test_first_match_wins() {
        // Also a misplaced `steps{`, but the complex step rule comes first.
        assert_eq!(classify("steps{parallel("), FailureClass::ComplexStep);
    }

    #[test]
    fn test_rules_are_anchored() {
        assert_eq!(classify("echo'node'"), FailureClass::Unknown);
        assert_eq!(classify("abcxyzscript{"), FailureClass::UnsupportedEnvironment);
    }

    #[test]
    fn test_leading_fallback_is_groovy_def() {
        let rules = RuleSet::standard();
        assert_eq!(rules.classify("'x'", 0), FailureClass::GroovyDef);
        assert_eq!(rules.classify("'x'", 1), FailureClass::Unknown);
    }

    #[test]
    fn test_with_rule_appends() {
        let rules = RuleSet::empty()
            .with_rule(ClassificationRule::new(FailureClass::Script, "sh").unwrap());
        assert_eq!(rules.rules().len(), 1);
        assert_eq!(rules.classify("sh'x'", 2), FailureClass::Script);
        assert_eq!(rules.classify("bat'x'", 2), FailureClass::Unknown);
    }
}
