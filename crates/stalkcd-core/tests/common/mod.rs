use stalkcd_core::compare::Node;

/// Build a comparison node from a JSON literal
#[allow(dead_code)]
pub fn node(value: serde_json::Value) -> Node {
    Node::from(value)
}

/// Build a comparison node from YAML text
#[allow(dead_code)]
pub fn yaml_node(text: &str) -> Node {
    let value: serde_yaml::Value = serde_yaml::from_str(text).expect("test YAML must parse");
    Node::from(value)
}

/// A generated declarative pipeline used across classifier tests
#[allow(dead_code)]
pub const REFERENCE_PIPELINE: &str = r#"
// Generated from .github/workflows/build.yml
pipeline {
    agent any
    stages {
        stage("Build") {
            steps {
                script {
                    sh 'make all';
                }
            }
        }
    }
}
"#;
