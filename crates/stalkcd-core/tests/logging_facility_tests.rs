#![allow(clippy::unwrap_used, clippy::expect_used)]

use stalkcd_core::compare::{compare_structures, Node};
use stalkcd_core::errors::{AggregateMismatchError, ExErrorKind, FieldMismatch, StalkError};
use stalkcd_core::logging_facility::test_capture::init_test_capture;
use stalkcd_core::{classify_divergence, log_op_end, log_op_error, log_op_start, ValidationRun};
use stalkcd_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERROR_COUNT,
    FIELD_MAIN_CLASS, FIELD_RESULT_COUNT, FIELD_RUN_ID, FIELD_SEGMENT_COUNT, FIELD_SOURCE_ID,
    FIELD_TARGET_ID,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = StalkError::InvalidGoldenProfile {
        reason: "empty".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    let event = &error_events[0];
    assert_eq!(
        event.field("err_kind"),
        Some(format!("{:?}", ExErrorKind::InvalidGoldenProfile).as_str())
    );
    assert_eq!(event.field("err_code"), Some("ERR_INVALID_GOLDEN_PROFILE"));
    assert_eq!(event.level, tracing::Level::ERROR);
}

#[test]
fn test_comparison_logs_error_count() {
    let capture = init_test_capture();

    compare_structures(
        &Node::record([("log_marker_cmp", Node::from("a"))]),
        &Node::record([("log_marker_cmp", Node::from("b"))]),
    );

    let count = capture.count_events(|e| {
        e.op.as_deref() == Some("compare_structures")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_ERROR_COUNT) == Some("1")
    });
    assert!(count >= 1, "comparison end event with error_count=1 not captured");
}

#[test]
fn test_classification_logs_main_class() {
    let capture = init_test_capture();
    let source_id = "log_marker_classify.groovy";

    classify_divergence(source_id, "out", "steps{script{x}}", "steps{x}");

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("classify_divergence")
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_SOURCE_ID) == Some(source_id)
            && e.field(FIELD_TARGET_ID) == Some("out")
    });
    assert_eq!(starts, 1);
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("classify_divergence")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_MAIN_CLASS) == Some("script")
            && e.field(FIELD_SEGMENT_COUNT).is_some()
    });
    assert!(ends >= 1);
}

#[test]
fn test_golden_mismatch_logs_end_error() {
    let capture = init_test_capture();
    let stats = stalkcd_core::AggregateStats {
        total: 7_777,
        ..Default::default()
    };
    let golden = stalkcd_core::GoldenProfile {
        total: Some(1),
        ..Default::default()
    };

    let err: AggregateMismatchError = stalkcd_core::check_against_golden(&stats, &golden).unwrap_err();
    assert_eq!(
        err.mismatches,
        vec![FieldMismatch {
            field: "total".into(),
            expected: "1".into(),
            actual: "7777".into(),
        }]
    );

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("check_against_golden")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err_code") == Some("ERR_AGGREGATE_MISMATCH")
    });
    assert!(errors >= 1);
}

#[test]
fn test_validation_run_finish_logs_run_id_and_result_count() {
    let capture = init_test_capture();
    let mut run = ValidationRun::new();
    run.record_pair("a", "b", "steps { script { x } }", "steps { x }");
    run.record_pair("c", "d", "steps { x }", "steps { x }");

    run.finish();

    let run_id = run.run_id().as_str().to_string();
    let finished = capture.count_events(|e| {
        e.field(FIELD_RUN_ID) == Some(run_id.as_str()) && e.field(FIELD_RESULT_COUNT) == Some("1")
    });
    assert_eq!(finished, 1);
}
