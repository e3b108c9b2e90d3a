//! Run aggregator.
//!
//! Walks every tracked code in category order, resolves and fingerprints it,
//! diffs it against the previous entry and folds the outcome into the new
//! snapshot store and the day's report. Per-code failures are isolated: they
//! become failed entries and error records, never an `Err`.

use crate::diff::{detect_change, ChangeDetection};
use crate::errors::{ExError, FailureKind, RuleWatchError};
use crate::fingerprint::{build_fingerprint, DetailLinkTemplate};
use crate::model::{
    Category, ChangeRecord, ErrorRecord, Fingerprint, RefLink, Report, RunResult, SnapshotEntry,
    SnapshotStore, TrackedItem,
};
use crate::ports::RemoteSource;
use crate::resolver::{resolve, ScoringWeights};
use chrono::NaiveDate;
use rulewatch_core_types::RunId;
use std::collections::BTreeMap;

pub const DEFAULT_DISPLAY_LIMIT: u32 = 20;
pub const DEFAULT_SCOPE: &str = "NFPC / NFTC (법제처 OPEN API: 행정규칙)";

pub const SUMMARY_UNCHANGED: &str = "전일 대비 변경 감지 없음";
pub const SUMMARY_MISSING_CREDENTIAL: &str =
    "LAWGO_OC 미설정 (LAWGO_MOCK=1 또는 LAWGO_OC 필요)";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "LAWGO_OC empty";

const SUPPLEMENTARY_NOTE: &str = "부칙/경과규정은 원문 확인";
const IMPACT_NOTES: [&str; 3] = [
    "설계: 시행일 기준 적용(도서·시방서에 적용기준 명시)",
    "시공: 자재/설비 선정 시 개정기준 충족 여부 확인",
    "유지관리: 점검대장에 적용기준/이력 기록",
];
const SOURCE_REF_LABEL: &str = "법제처(원문/DRF)";

/// Tunables for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub weights: ScoringWeights,
    pub display_limit: u32,
    pub links: DetailLinkTemplate,
    pub scope: String,
}

impl RunConfig {
    pub fn new(links: DetailLinkTemplate) -> Self {
        Self {
            weights: ScoringWeights::default(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            links,
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

/// Per-run values fixed at start: the run date and correlation id.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub today: NaiveDate,
    pub run_id: RunId,
}

impl RunContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            run_id: RunId::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub snapshot: SnapshotStore,
    pub report: Report,
}

impl RunOutcome {
    pub fn change_count(&self) -> usize {
        self.report.changes.len()
    }

    pub fn error_count(&self) -> usize {
        self.report.errors.len()
    }
}

/// Check every tracked item against `previous` and produce the new store
/// plus the day's report.
///
/// Codes in `previous` that are no longer tracked are carried over as-is.
pub fn run(
    tracked: &BTreeMap<Category, Vec<TrackedItem>>,
    previous: &SnapshotStore,
    source: &dyn RemoteSource,
    config: &RunConfig,
    ctx: &RunContext,
) -> RunOutcome {
    let span = tracing::info_span!("run", run_id = %ctx.run_id, date = %ctx.today);
    let _guard = span.enter();

    let mut snapshot = previous.clone();
    let mut changes = Vec::new();
    let mut errors = Vec::new();

    for (category, items) in tracked {
        for item in items {
            if item.code.trim().is_empty() {
                let err = ExError::from(RuleWatchError::TrackedItemWithoutCode {
                    title: item.title.clone(),
                });
                tracing::warn!(
                    category = %category,
                    err.kind = ?err.kind(),
                    err.code = err.code(),
                    "skipping: {}",
                    err
                );
                continue;
            }

            let prev = previous.get(*category, &item.code);
            let current = check_item(source, item, prev, config, ctx.today);

            if let Some(error) = current.error() {
                tracing::warn!(
                    category = %category,
                    code = %item.code,
                    stage = error.stage.as_str(),
                    kind = %error.kind,
                    status = ?error.status,
                    "tracked code failed"
                );
                errors.push(ErrorRecord::for_entry(&item.code, &item.title, error));
            } else if let Some(fp) = current.fingerprint() {
                let detection = detect_change(prev, &current);
                tracing::debug!(
                    category = %category,
                    code = %item.code,
                    changed = detection.changed,
                    "tracked code checked"
                );
                if detection.changed {
                    changes.push(change_record(item, fp, &detection));
                }
            }

            snapshot.insert(*category, current);
        }
    }

    let report = build_report(ctx.today, &config.scope, changes, errors);
    RunOutcome { snapshot, report }
}

fn check_item(
    source: &dyn RemoteSource,
    item: &TrackedItem,
    prev: Option<&SnapshotEntry>,
    config: &RunConfig,
    today: NaiveDate,
) -> SnapshotEntry {
    let outcome = resolve(source, item, &config.weights, config.display_limit)
        .and_then(|resolved| build_fingerprint(source, &resolved, item, &config.links));

    match outcome {
        Ok(fp) => SnapshotEntry::observed(&item.code, &item.title, today, fp),
        Err(error) => SnapshotEntry::failed(&item.code, &item.title, today, error, prev),
    }
}

fn change_record(item: &TrackedItem, fp: &Fingerprint, detection: &ChangeDetection) -> ChangeRecord {
    let diff_keys = detection.key_names();
    ChangeRecord {
        code: item.code.clone(),
        title: item.title.clone(),
        notice_no: fp.notice_no.clone(),
        announce_date: fp.announce_date.clone(),
        effective_date: fp.effective_date.clone(),
        reason: format!("자동 감지: 메타/본문 해시 변경({})", diff_keys.join(", ")),
        diff_keys,
        supplementary: SUPPLEMENTARY_NOTE.to_string(),
        impact: IMPACT_NOTES.iter().map(|s| s.to_string()).collect(),
        refs: vec![RefLink {
            label: SOURCE_REF_LABEL.to_string(),
            url: fp.html_url.clone(),
        }],
    }
}

fn build_report(
    today: NaiveDate,
    scope: &str,
    changes: Vec<ChangeRecord>,
    errors: Vec<ErrorRecord>,
) -> Report {
    let (result, summary) = if changes.is_empty() {
        (RunResult::Unchanged, SUMMARY_UNCHANGED.to_string())
    } else {
        (
            RunResult::Changed,
            format!("자동 감지: {}건 변경(원문 확인 권장)", changes.len()),
        )
    };
    let mut report = Report::new(today, scope, result).with_summary(summary);
    report.changes = changes;
    report.errors = errors;
    report
}

/// Single error report written when the credential precondition fails.
pub fn missing_credential_report(today: NaiveDate, scope: &str) -> Report {
    let mut report =
        Report::new(today, scope, RunResult::Error).with_summary(SUMMARY_MISSING_CREDENTIAL);
    report.errors.push(ErrorRecord::runtime(
        FailureKind::MissingCredential,
        MISSING_CREDENTIAL_MESSAGE,
    ));
    report
}
