#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::NaiveDate;
use common::{nfa_candidate, payload, FakeSource};
use rulewatch_core::fingerprint::DetailLinkTemplate;
use rulewatch_core::rulewatch_core_types::Sensitive;
use rulewatch_core::{
    run, Category, FailureKind, RunConfig, RunContext, RunResult, SnapshotEntry, SnapshotStore,
    Stage, TrackedItem, TransportError,
};
use std::collections::BTreeMap;

fn config() -> RunConfig {
    RunConfig::new(DetailLinkTemplate::law_go_kr(Sensitive::new("oc".to_string())))
}

fn ctx(day: u32) -> RunContext {
    RunContext::new(NaiveDate::from_ymd_opt(2026, 3, day).unwrap())
}

fn tracked() -> BTreeMap<Category, Vec<TrackedItem>> {
    let mut map = BTreeMap::new();
    map.insert(
        Category::Nftc,
        vec![TrackedItem::new("NFTC101", "소화기구 기술기준")],
    );
    map.insert(
        Category::Nfpc,
        vec![
            TrackedItem::new("NFPC101", "소화기구 성능기준"),
            TrackedItem::new("NFPC102", "옥내소화전 성능기준"),
        ],
    );
    map
}

fn healthy_source() -> FakeSource {
    FakeSource::new()
        .with_search("소화기구 성능기준", vec![nfa_candidate("1")])
        .with_search("옥내소화전 성능기준", vec![nfa_candidate("2")])
        .with_search("소화기구 기술기준", vec![nfa_candidate("3")])
        .with_detail("1", payload("제2026-1호", "본문1"))
        .with_detail("2", payload("제2026-2호", "본문2"))
        .with_detail("3", payload("제2026-3호", "본문3"))
}

#[test]
fn test_first_run_is_baseline() {
    let source = healthy_source();
    let out = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1));

    assert_eq!(out.snapshot.len(), 3);
    assert_eq!(out.report.result, RunResult::Unchanged);
    assert_eq!(out.report.summary, "전일 대비 변경 감지 없음");
    assert!(out.report.changes.is_empty());
    assert!(out.report.errors.is_empty());
}

#[test]
fn test_rerun_on_identical_input_is_idempotent() {
    let source = healthy_source();
    let first = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1));
    let second = run(&tracked(), &first.snapshot, &source, &config(), &ctx(1));
    let third = run(&tracked(), &first.snapshot, &source, &config(), &ctx(1));

    assert!(second.report.changes.is_empty());
    assert_eq!(second.snapshot, first.snapshot);
    assert_eq!(second, third);
}

#[test]
fn test_body_change_produces_change_record() {
    let source = healthy_source();
    let first = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1));

    source.set_detail("2", Ok(payload("제2026-2호", "본문2 개정")));
    let second = run(&tracked(), &first.snapshot, &source, &config(), &ctx(2));

    assert_eq!(second.report.result, RunResult::Changed);
    assert_eq!(second.report.summary, "자동 감지: 1건 변경(원문 확인 권장)");
    let change = &second.report.changes[0];
    assert_eq!(change.code, "NFPC102");
    assert_eq!(change.diff_keys, vec!["bodyHash".to_string()]);
    assert_eq!(change.reason, "자동 감지: 메타/본문 해시 변경(bodyHash)");
    assert_eq!(change.impact.len(), 3);
    assert_eq!(change.refs[0].label, "법제처(원문/DRF)");
}

#[test]
fn test_no_results_is_isolated_to_its_code() {
    let source = healthy_source();
    let first = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1));

    source.set_search("소화기구 성능기준", Ok(Vec::new()));
    let second = run(&tracked(), &first.snapshot, &source, &config(), &ctx(2));

    assert_eq!(second.report.errors.len(), 1);
    let err = &second.report.errors[0];
    assert_eq!(err.code.as_deref(), Some("NFPC101"));
    assert_eq!(err.stage, Stage::Search);
    assert_eq!(err.kind, FailureKind::NoResults);

    assert_eq!(
        second.snapshot.get(Category::Nfpc, "NFPC102"),
        first
            .snapshot
            .get(Category::Nfpc, "NFPC102")
            .map(|e| SnapshotEntry {
                checked_at: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                ..e.clone()
            })
            .as_ref()
    );
    assert!(second.report.changes.is_empty());
    assert_eq!(second.report.result, RunResult::Unchanged);
}

#[test]
fn test_failure_keeps_last_known_good_and_recovery_reports_error_key() {
    let source = healthy_source();
    let day1 = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1));
    let good = day1
        .snapshot
        .get(Category::Nftc, "NFTC101")
        .and_then(|e| e.fingerprint())
        .cloned()
        .unwrap();

    source.set_detail(
        "3",
        Err(TransportError::new(FailureKind::NotJson, "https://fake.test/detail?ID=3")
            .with_status(200)
            .with_content_type("text/html")),
    );
    let day2 = run(&tracked(), &day1.snapshot, &source, &config(), &ctx(2));
    let failed = day2.snapshot.get(Category::Nftc, "NFTC101").unwrap();
    assert!(failed.is_error());
    assert_eq!(failed.last_known_good(), Some(&good));
    assert_eq!(failed.error().unwrap().remote_id.as_deref(), Some("3"));

    let day3 = run(&tracked(), &day2.snapshot, &source, &config(), &ctx(3));
    assert_eq!(
        day3.snapshot.get(Category::Nftc, "NFTC101").unwrap().last_known_good(),
        Some(&good)
    );

    source.set_detail("3", Ok(payload("제2026-3호", "본문3")));
    let day4 = run(&tracked(), &day3.snapshot, &source, &config(), &ctx(4));
    assert_eq!(day4.report.changes.len(), 1);
    assert_eq!(day4.report.changes[0].diff_keys, vec!["error".to_string()]);
}

#[test]
fn test_untracked_codes_are_kept() {
    let source = healthy_source();
    let mut previous = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1)).snapshot;
    let legacy = previous.get(Category::Nfpc, "NFPC101").cloned().unwrap();
    previous.insert(
        Category::Nfpc,
        SnapshotEntry {
            code: "NFPC999".to_string(),
            ..legacy
        },
    );

    let out = run(&tracked(), &previous, &source, &config(), &ctx(2));
    assert!(out.snapshot.get(Category::Nfpc, "NFPC999").is_some());
    assert_eq!(out.snapshot.len(), 4);
}

#[test]
fn test_items_without_code_are_skipped() {
    let source = healthy_source();
    let mut items = tracked();
    items
        .get_mut(&Category::Nfpc)
        .unwrap()
        .push(TrackedItem::new("", "코드 없음"));

    let out = run(&items, &SnapshotStore::new(), &source, &config(), &ctx(1));
    assert_eq!(out.snapshot.len(), 3);
    assert_eq!(source.search_calls.get(), 3);
}

#[test]
fn test_processing_order_is_nfpc_then_nftc() {
    let source = FakeSource::new();
    let out = run(&tracked(), &SnapshotStore::new(), &source, &config(), &ctx(1));

    let codes: Vec<_> = out
        .report
        .errors
        .iter()
        .map(|e| e.code.clone().unwrap())
        .collect();
    assert_eq!(codes, vec!["NFPC101", "NFPC102", "NFTC101"]);
}
