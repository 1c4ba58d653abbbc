#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{node, yaml_node};
use serde_json::json;
use stalkcd_core::compare::{
    compare_structures, compare_structures_with, ContextPath, FailureReason, Node, OverrideFault,
    OverrideVerdict,
};

fn full() -> Node {
    node(json!({
        "myString": "myValue",
        "list": [1, 2, 3],
        "myNumber": 5,
        "myBoolean": true,
        "myBoolean2": false,
        "myObject": {"key": "myValue", "list": [1, 2, 3], "myNumber": 5, "myBoolean": true, "myBoolean2": false}
    }))
}

#[test]
fn test_identical_structures_have_no_errors() {
    assert!(compare_structures(&full(), &full()).is_empty());

    let list = node(json!({"list": [{"myVal": "val"}, {"myVal": "val"}]}));
    assert!(compare_structures(&list, &list.clone()).is_empty());
}

#[test]
fn test_key_count_on_nested_sequence_element() {
    let expected = node(json!([{"myVal": "val"}, {"myVal": "val"}]));
    let actual = node(json!([{"myVal": "val"}, {"myVal": "val", "mySecondVal": "val"}]));

    let errors = compare_structures(&expected, &actual);

    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"UNEQUAL_KEY_COUNT": ["obj[1]"]})
    );
}

#[test]
fn test_unequal_string() {
    let errors = compare_structures(
        &node(json!({"wrongValue": "that"})),
        &node(json!({"wrongValue": "this"})),
    );
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"UNEQUAL_STRING": ["obj[wrongValue] = that --> actual = this"]})
    );
}

#[test]
fn test_missing_key_is_type_mismatch_against_undefined() {
    let errors = compare_structures(
        &node(json!({"wrongKey": "that"})),
        &node(json!({"reallyWrongKey": "that"})),
    );
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"TYPE_MISMATCH": ["obj[wrongKey] type: string --> actual: undefined"]})
    );
}

#[test]
fn test_unequal_boolean_and_number() {
    let errors = compare_structures(
        &node(json!({"myBoolean": true})),
        &node(json!({"myBoolean": false})),
    );
    assert_eq!(
        errors.get(FailureReason::UnequalBoolean),
        Some(&["obj[myBoolean] = true --> actual = false".to_string()][..])
    );

    let errors = compare_structures(&node(json!({"myNumber": 1})), &node(json!({"myNumber": 5})));
    assert_eq!(
        errors.get(FailureReason::UnequalNumber),
        Some(&["obj[myNumber] = 1 --> actual = 5".to_string()][..])
    );
}

#[test]
fn test_record_with_index_key_against_sequence() {
    let errors = compare_structures(
        &node(json!({"myObject": {"1": "val"}})),
        &node(json!({"myObject": ["val"]})),
    );
    assert_eq!(
        errors.all_messages(),
        vec!["obj[myObject][1] type: string --> actual: undefined"]
    );
}

#[test]
fn test_root_null_handling() {
    let errors = compare_structures(&Node::Null, &node(json!({"a": 1})));
    assert_eq!(
        errors.get(FailureReason::TypeMismatch),
        Some(&["obj[] type: null --> actual: object".to_string()][..])
    );

    assert!(compare_structures(&Node::Null, &Node::Null).is_empty());
}

#[test]
fn test_actual_only_keys_surface_only_through_key_count() {
    // Expected is the reference: extra keys in actual are never visited.
    let expected = node(json!({"jobs": {"build": {"runs-on": "ubuntu"}}}));
    let actual = node(json!({
        "jobs": {"build": {"runs-on": "ubuntu", "timeout": 5}, "deploy": {"runs-on": "x"}}
    }));

    let errors = compare_structures(&expected, &actual);

    assert_eq!(errors.total(), 2);
    assert_eq!(
        errors.get(FailureReason::UnequalKeyCount),
        Some(&["obj[jobs]".to_string(), "obj[jobs][build]".to_string()][..])
    );
}

#[test]
fn test_comparison_is_asymmetric() {
    let small = node(json!({"a": 1}));
    let large = node(json!({"a": 1, "b": 2}));

    let forward = compare_structures(&small, &large);
    let backward = compare_structures(&large, &small);

    assert_eq!(forward.all_messages(), vec!["obj[]"]);
    assert_eq!(
        backward.get(FailureReason::TypeMismatch),
        Some(&["obj[b] type: number --> actual: undefined".to_string()][..])
    );
}

#[test]
fn test_messages_keep_traversal_order_within_reason() {
    let expected = node(json!({"a": "1", "b": {"c": "2"}, "d": "3"}));
    let actual = node(json!({"a": "x", "b": {"c": "y"}, "d": "z"}));
    let errors = compare_structures(&expected, &actual);
    assert_eq!(
        errors.get(FailureReason::UnequalString).unwrap(),
        &[
            "obj[a] = 1 --> actual = x".to_string(),
            "obj[b][c] = 2 --> actual = y".to_string(),
            "obj[d] = 3 --> actual = z".to_string(),
        ]
    );
}

#[test]
fn test_yaml_workflow_structures() {
    let expected = yaml_node("on: [push]\njobs:\n  build:\n    runs-on: ubuntu-latest\n");
    let actual = yaml_node("on: [push, pull_request]\njobs:\n  build:\n    runs-on: windows-latest\n");

    let errors = compare_structures(&expected, &actual);

    assert_eq!(
        errors.get(FailureReason::UnequalKeyCount),
        Some(&["obj[on]".to_string()][..])
    );
    assert_eq!(
        errors.get(FailureReason::UnequalString),
        Some(&["obj[jobs][build][runs-on] = ubuntu-latest --> actual = windows-latest".to_string()][..])
    );
}

#[test]
fn test_override_true_skips_key() {
    let expected = node(json!({"on": "push", "name": "ci"}));
    let actual = node(json!({"on": ["push"], "name": "build"}));

    let trigger_shorthand = |path: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict {
        Ok(Some(path.leaf() == Some("on")))
    };
    let errors = compare_structures_with(&expected, &actual, &trigger_shorthand);

    assert_eq!(errors.all_messages(), vec!["obj[name] = ci --> actual = build"]);
}

#[test]
fn test_override_false_falls_through() {
    let expected = node(json!({"on": "push"}));
    let actual = node(json!({"on": ["push"]}));
    let never = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict { Ok(Some(false)) };

    assert_eq!(
        compare_structures_with(&expected, &actual, &never),
        compare_structures(&expected, &actual)
    );
}

#[test]
fn test_faulting_override_is_fail_open() {
    let expected = full();
    let actual = node(json!({
        "myString": "other",
        "list": [1, 2],
        "myNumber": 5,
        "myBoolean": false,
        "myObject": {"key": "myValue"}
    }));

    let faulting = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict {
        Err(OverrideFault("cannot judge".into()))
    };
    let panicking = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict {
        panic!("override bug")
    };
    let undecided = |_: &ContextPath, _: &Node, _: Option<&Node>| -> OverrideVerdict { Ok(None) };

    let baseline = compare_structures(&expected, &actual);
    assert!(!baseline.is_empty());
    assert_eq!(compare_structures_with(&expected, &actual, &faulting), baseline);
    assert_eq!(compare_structures_with(&expected, &actual, &panicking), baseline);
    assert_eq!(compare_structures_with(&expected, &actual, &undecided), baseline);
}

#[test]
fn test_override_sees_missing_actual_as_none() {
    use std::cell::RefCell;

    let seen = RefCell::new(Vec::new());
    let recorder = |path: &ContextPath, _: &Node, actual: Option<&Node>| -> OverrideVerdict {
        seen.borrow_mut().push((path.to_string(), actual.is_some()));
        Ok(None)
    };
    compare_structures_with(
        &node(json!({"a": 1, "b": 2})),
        &node(json!({"a": 1})),
        &recorder,
    );

    assert_eq!(
        seen.into_inner(),
        vec![("obj[a]".to_string(), true), ("obj[b]".to_string(), false)]
    );
}
