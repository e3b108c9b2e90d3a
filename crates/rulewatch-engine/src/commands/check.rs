//! `check` command: one full run for a date.
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for the run:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Core and store use only `debug!`/`warn!` for per-code detail.

#![allow(clippy::result_large_err)]

use chrono::NaiveDate;
use rulewatch_core::errors::{ExError, Result, RuleWatchError};
use rulewatch_core::rulewatch_core_types::Sensitive;
use rulewatch_core::{
    log_op_end, log_op_error, log_op_start, missing_credential_report, run, Category,
    DetailLinkTemplate, RemoteSource, Report, ReportSink, RunConfig, RunContext, RunOutcome,
    SnapshotPersistence, TrackedItemSource,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Inputs fixed before the run starts.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub today: NaiveDate,
    pub credential: Sensitive<String>,
    pub mock: bool,
    /// Extra report metadata, e.g. the standards file paths
    pub meta: BTreeMap<String, Value>,
}

impl CheckRequest {
    pub fn new(today: NaiveDate, credential: Sensitive<String>) -> Self {
        Self {
            today,
            credential,
            mock: false,
            meta: BTreeMap::new(),
        }
    }

    pub fn with_mock(mut self, mock: bool) -> Self {
        self.mock = mock;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Mock mode waives the credential.
    pub fn credential_missing(&self) -> bool {
        !self.mock && self.credential.is_blank()
    }
}

/// Collaborators used by one run.
pub struct CheckPorts<'a> {
    pub items: &'a dyn TrackedItemSource,
    pub snapshots: &'a dyn SnapshotPersistence,
    pub reports: &'a dyn ReportSink,
    pub remote: &'a dyn RemoteSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Precondition failed; only the error report was written.
    MissingCredential { report: Report },
    Completed { outcome: RunOutcome, mock: bool },
}

impl CheckOutcome {
    pub fn report(&self) -> &Report {
        match self {
            CheckOutcome::MissingCredential { report } => report,
            CheckOutcome::Completed { outcome, .. } => &outcome.report,
        }
    }
}

/// Run the check for `request.today`.
///
/// ## Errors
///
/// - `Io` / `Serialization`: a standards, snapshot or report file cannot be read
/// - `Persistence`: the snapshot or report file cannot be written
///
/// Per-code remote failures are not errors; they are recorded in the report.
pub fn check(request: CheckRequest, ports: &CheckPorts<'_>) -> Result<CheckOutcome> {
    let ctx = RunContext::new(request.today);
    log_op_start!(
        "check",
        date = %request.today,
        run_id = %ctx.run_id,
        mock = request.mock
    );
    let start = std::time::Instant::now();

    let result = check_impl(request, ports, &ctx).map_err(|e| {
        let e = e.with_run_id(ctx.run_id.clone());
        log_op_error!(
            "check",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let report = result.report();
    log_op_end!(
        "check",
        duration_ms = start.elapsed().as_millis() as u64,
        result = report.result.as_str(),
        changes = report.changes.len() as u64,
        errors = report.errors.len() as u64
    );

    Ok(result)
}

fn check_impl(request: CheckRequest, ports: &CheckPorts<'_>, ctx: &RunContext) -> Result<CheckOutcome> {
    let config = RunConfig::new(DetailLinkTemplate::law_go_kr(request.credential.clone()));

    if request.credential_missing() {
        let err = ExError::from(RuleWatchError::MissingCredential);
        tracing::warn!(
            date = %ctx.today,
            err.code = err.code(),
            "{}; writing error report only",
            err
        );
        let report = missing_credential_report(ctx.today, &config.scope);
        upsert_report(ports.reports, report.clone())?;
        return Ok(CheckOutcome::MissingCredential { report });
    }

    let mut tracked = BTreeMap::new();
    for category in Category::ALL {
        tracked.insert(category, ports.items.load(category)?);
    }
    let previous = ports.snapshots.load()?;
    let mut log = ports.reports.load()?;

    let mut outcome = run(&tracked, &previous, ports.remote, &config, ctx);
    outcome
        .report
        .meta
        .insert("mock".to_string(), Value::Bool(request.mock));
    outcome.report.meta.extend(request.meta);

    log.upsert(outcome.report.clone());
    ports.snapshots.save(&outcome.snapshot)?;
    ports.reports.save(&log)?;

    tracing::info!(
        date = %ctx.today,
        result = outcome.report.result.as_str(),
        changes = outcome.change_count(),
        errors = outcome.error_count(),
        "check complete"
    );

    Ok(CheckOutcome::Completed {
        outcome,
        mock: request.mock,
    })
}

fn upsert_report(sink: &dyn ReportSink, report: Report) -> std::result::Result<(), ExError> {
    let mut log = sink.load()?;
    log.upsert(report);
    sink.save(&log)
}
