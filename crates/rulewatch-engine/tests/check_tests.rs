#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use rulewatch_core::rulewatch_core_types::Sensitive;
use rulewatch_core::{
    Category, DetailPayload, ExErrorKind, FailureKind, RemoteCandidate, RemoteSource, ReportSink,
    RunResult, SnapshotPersistence, Stage, TransportError,
};
use rulewatch_engine::commands::report::find_report;
use rulewatch_engine::commands::snapshot::list_entries;
use rulewatch_engine::{check, CheckOutcome, CheckPorts, CheckRequest};
use rulewatch_lawgo::MockSource;
use rulewatch_store::{JsonReportLog, JsonSnapshotFile, StandardsFiles};
use std::cell::Cell;
use std::path::Path;
use tempfile::TempDir;

/// Wraps another source and counts calls.
struct Counting<S> {
    inner: S,
    calls: Cell<usize>,
}

impl<S> Counting<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl<S: RemoteSource> RemoteSource for Counting<S> {
    fn search(&self, q: &str, k: u32, d: u32) -> Result<Vec<RemoteCandidate>, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.search(q, k, d)
    }

    fn fetch_detail(&self, id: &str) -> Result<DetailPayload, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch_detail(id)
    }
}

/// Mock data for every query except one, which finds nothing.
struct OneMissing(&'static str);

impl RemoteSource for OneMissing {
    fn search(&self, q: &str, k: u32, d: u32) -> Result<Vec<RemoteCandidate>, TransportError> {
        if q == self.0 {
            Ok(Vec::new())
        } else {
            MockSource.search(q, k, d)
        }
    }

    fn fetch_detail(&self, id: &str) -> Result<DetailPayload, TransportError> {
        MockSource.fetch_detail(id)
    }
}

/// Mock data with a replaced article body.
struct Revised(&'static str);

impl RemoteSource for Revised {
    fn search(&self, q: &str, k: u32, d: u32) -> Result<Vec<RemoteCandidate>, TransportError> {
        MockSource.search(q, k, d)
    }

    fn fetch_detail(&self, id: &str) -> Result<DetailPayload, TransportError> {
        let mut payload = MockSource.fetch_detail(id)?;
        payload.article_text = Some(self.0.to_string());
        Ok(payload)
    }
}

struct Fixture {
    dir: TempDir,
    items: StandardsFiles,
    snapshots: JsonSnapshotFile,
    reports: JsonReportLog,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        write(
            &dir.path().join("standards_nfpc.json"),
            r#"{"items": [
                {"code": "NFPC101", "title": "소화기구 및 자동소화장치의 화재안전성능기준"},
                {"code": "NFPC102", "title": "옥내소화전설비의 화재안전성능기준"}
            ]}"#,
        );
        write(
            &dir.path().join("standards_nftc.json"),
            r#"{"items": [{"code": "NFTC101", "title": "소화기구 및 자동소화장치의 화재안전기술기준"}]}"#,
        );
        let items = StandardsFiles::new(
            dir.path().join("standards_nfpc.json"),
            dir.path().join("standards_nftc.json"),
        );
        let snapshots = JsonSnapshotFile::new(dir.path().join("snapshot.json"));
        let reports = JsonReportLog::new(dir.path().join("data.json"));
        Self {
            dir,
            items,
            snapshots,
            reports,
        }
    }

    fn ports<'a>(&'a self, remote: &'a dyn RemoteSource) -> CheckPorts<'a> {
        CheckPorts {
            items: &self.items,
            snapshots: &self.snapshots,
            reports: &self.reports,
            remote,
        }
    }
}

fn write(path: &Path, text: &str) {
    std::fs::write(path, text).unwrap();
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[test]
fn test_missing_credential_writes_only_error_report() {
    let fx = Fixture::new();
    let remote = Counting::new(MockSource);

    let outcome = check(
        CheckRequest::new(day(1), Sensitive::new("  ".to_string())),
        &fx.ports(&remote),
    )
    .unwrap();

    assert!(matches!(outcome, CheckOutcome::MissingCredential { .. }));
    assert_eq!(remote.calls.get(), 0);
    assert!(!fx.snapshots.path().exists());

    let log = fx.reports.load().unwrap();
    assert_eq!(log.records.len(), 1);
    let report = &log.records[0];
    assert_eq!(report.result, RunResult::Error);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].stage, Stage::Runtime);
    assert_eq!(report.errors[0].kind, FailureKind::MissingCredential);
    assert_eq!(log.last_run, Some(day(1)));
}

#[test]
fn test_missing_credential_leaves_existing_snapshot_untouched() {
    let fx = Fixture::new();
    let remote = MockSource;
    check(
        CheckRequest::new(day(1), Sensitive::default()).with_mock(true),
        &fx.ports(&remote),
    )
    .unwrap();
    let before = std::fs::read(fx.snapshots.path()).unwrap();

    check(
        CheckRequest::new(day(2), Sensitive::default()),
        &fx.ports(&remote),
    )
    .unwrap();

    assert_eq!(std::fs::read(fx.snapshots.path()).unwrap(), before);
    assert_eq!(fx.reports.load().unwrap().records.len(), 2);
}

#[test]
fn test_mock_check_writes_snapshot_and_report() {
    let fx = Fixture::new();
    let remote = MockSource;

    let outcome = check(
        CheckRequest::new(day(1), Sensitive::default())
            .with_mock(true)
            .with_meta("standards_nfpc", "standards_nfpc.json"),
        &fx.ports(&remote),
    )
    .unwrap();

    let CheckOutcome::Completed { outcome, mock } = outcome else {
        panic!("expected a completed run");
    };
    assert!(mock);
    assert_eq!(outcome.snapshot.len(), 3);
    assert_eq!(outcome.report.result, RunResult::Unchanged);
    assert_eq!(outcome.report.meta["mock"], serde_json::Value::Bool(true));
    assert_eq!(outcome.report.meta["standards_nfpc"], "standards_nfpc.json");

    let stored = fx.snapshots.load().unwrap();
    assert_eq!(stored, outcome.snapshot);
    assert!(fx.dir.path().join("data.json").exists());
}

#[test]
fn test_same_day_rerun_replaces_report() {
    let fx = Fixture::new();
    let remote = MockSource;
    let request = CheckRequest::new(day(1), Sensitive::default()).with_mock(true);

    check(request.clone(), &fx.ports(&remote)).unwrap();
    check(request.clone(), &fx.ports(&remote)).unwrap();
    check(
        CheckRequest::new(day(2), Sensitive::default()).with_mock(true),
        &fx.ports(&remote),
    )
    .unwrap();
    check(request, &fx.ports(&remote)).unwrap();

    let log = fx.reports.load().unwrap();
    assert_eq!(log.records.len(), 2);
    assert_eq!(log.records[0].date, day(1));
    assert_eq!(log.records[1].date, day(2));
    assert!(log.records.iter().all(|r| r.changes.is_empty()));
}

#[test]
fn test_per_code_failure_is_reported_not_fatal() {
    let fx = Fixture::new();
    let remote = OneMissing("옥내소화전설비의 화재안전성능기준");

    let outcome = check(
        CheckRequest::new(day(1), Sensitive::new("oc".to_string())),
        &fx.ports(&remote),
    )
    .unwrap();

    let report = outcome.report();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code.as_deref(), Some("NFPC102"));
    assert_eq!(report.errors[0].stage, Stage::Search);
    assert_eq!(report.errors[0].kind, FailureKind::NoResults);

    let entries = list_entries(&fx.snapshots, Some(Category::Nfpc)).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|(_, e)| e.code == "NFPC102" && e.is_error()));
    assert_eq!(list_entries(&fx.snapshots, None).unwrap().len(), 3);
}

#[test]
fn test_malformed_snapshot_aborts_with_serialization_error() {
    let fx = Fixture::new();
    write(fx.snapshots.path(), "{ broken");
    let remote = Counting::new(MockSource);

    let err = check(
        CheckRequest::new(day(1), Sensitive::default()).with_mock(true),
        &fx.ports(&remote),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Serialization);
    assert!(err.run_id().is_some());
    assert_eq!(remote.calls.get(), 0);
    assert!(fx.reports.load().unwrap().records.is_empty());
}

#[test]
fn test_malformed_report_log_leaves_snapshot_untouched() {
    let fx = Fixture::new();
    let request = |d| CheckRequest::new(day(d), Sensitive::new("oc".to_string()));
    check(request(1), &fx.ports(&Revised("v1"))).unwrap();
    let before = std::fs::read(fx.snapshots.path()).unwrap();

    write(fx.reports.path(), "{ broken");
    let remote = Counting::new(Revised("v2"));
    let err = check(request(2), &fx.ports(&remote)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Serialization);
    assert_eq!(remote.calls.get(), 0);
    assert_eq!(std::fs::read(fx.snapshots.path()).unwrap(), before);

    write(fx.reports.path(), "{}");
    let outcome = check(request(2), &fx.ports(&Revised("v2"))).unwrap();
    assert_eq!(outcome.report().changes.len(), 3);
    assert!(outcome
        .report()
        .changes
        .iter()
        .all(|c| c.diff_keys == vec!["bodyHash".to_string()]));
}

#[test]
fn test_find_report_by_date_and_latest() {
    let fx = Fixture::new();
    let remote = MockSource;
    for d in [1, 2] {
        check(
            CheckRequest::new(day(d), Sensitive::default()).with_mock(true),
            &fx.ports(&remote),
        )
        .unwrap();
    }

    assert_eq!(find_report(&fx.reports, None).unwrap().date, day(2));
    assert_eq!(find_report(&fx.reports, Some(day(1))).unwrap().date, day(1));
    let err = find_report(&fx.reports, Some(day(9))).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}
