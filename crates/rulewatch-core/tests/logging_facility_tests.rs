#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::NaiveDate;
use common::FakeSource;
use rulewatch_core::errors::RuleWatchError;
use rulewatch_core::fingerprint::DetailLinkTemplate;
use rulewatch_core::logging_facility::test_capture::init_test_capture;
use rulewatch_core::rulewatch_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CATEGORY, FIELD_CODE, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND,
};
use rulewatch_core::rulewatch_core_types::Sensitive;
use rulewatch_core::{
    log_op_end, log_op_error, log_op_start, run, Category, RunConfig, RunContext, SnapshotStore,
    TrackedItem,
};
use std::collections::BTreeMap;
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "rulewatch_log_start_unique_1";

    log_op_start!(op_name, code = "NFPC101");

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "rulewatch_log_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .expect("end event");
    assert_eq!(end.fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_stable_code() {
    let capture = init_test_capture();
    let op_name = "rulewatch_log_error_unique_3";

    log_op_error!(op_name, RuleWatchError::MissingCredential, duration_ms = 3);

    let events = capture.events();
    let err = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event");
    assert_eq!(err.level, Level::ERROR);
    assert_eq!(
        err.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_MISSING_CREDENTIAL".to_string())
    );
    assert_eq!(
        err.fields.get(FIELD_ERR_KIND),
        Some(&"MissingCredential".to_string())
    );
}

#[test]
fn test_per_code_failure_logs_warning() {
    let capture = init_test_capture();
    let mut tracked = BTreeMap::new();
    tracked.insert(
        Category::Nfpc,
        vec![TrackedItem::new("NFPC_LOG_UNIQUE_4", "로그 확인용")],
    );
    let config = RunConfig::new(DetailLinkTemplate::law_go_kr(Sensitive::default()));
    let ctx = RunContext::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

    run(&tracked, &SnapshotStore::new(), &FakeSource::new(), &config, &ctx);

    let warnings = capture.count_events(|e| {
        e.level == Level::WARN
            && e.fields.get(FIELD_CODE).map(String::as_str) == Some("NFPC_LOG_UNIQUE_4")
    });
    assert_eq!(warnings, 1);
}

#[test]
fn test_item_without_code_logs_invalid_input() {
    let capture = init_test_capture();
    let mut tracked = BTreeMap::new();
    tracked.insert(
        Category::Nftc,
        vec![TrackedItem::new(" ", "코드 없는 항목 로그 확인용")],
    );
    let config = RunConfig::new(DetailLinkTemplate::law_go_kr(Sensitive::default()));
    let ctx = RunContext::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

    let out = run(&tracked, &SnapshotStore::new(), &FakeSource::new(), &config, &ctx);
    assert!(out.snapshot.is_empty());

    let warnings = capture.count_events(|e| {
        e.level == Level::WARN
            && e.fields.get(FIELD_CATEGORY).map(String::as_str) == Some("nftc")
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_INVALID_INPUT")
            && e
                .fields
                .get("message")
                .is_some_and(|m| m.contains("코드 없는 항목 로그 확인용"))
    });
    assert_eq!(warnings, 1);
}
