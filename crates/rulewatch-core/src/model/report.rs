//! Daily report and the persisted report log.

use crate::errors::FailureKind;
use crate::model::entry::{EntryError, Stage};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunResult {
    Changed,
    Unchanged,
    Error,
}

impl RunResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunResult::Changed => "changed",
            RunResult::Unchanged => "unchanged",
            RunResult::Error => "error",
        }
    }
}

impl std::fmt::Display for RunResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefLink {
    pub label: String,
    pub url: String,
}

/// A detected change for one code in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub code: String,
    pub title: String,
    pub notice_no: Option<String>,
    pub announce_date: Option<String>,
    pub effective_date: Option<String>,
    pub diff_keys: Vec<String>,
    pub reason: String,
    pub supplementary: String,
    pub impact: Vec<String>,
    pub refs: Vec<RefLink>,
}

/// One failed code, or the fatal run precondition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "where")]
    pub stage: Stage,
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorRecord {
    /// Error record for a tracked code whose entry failed.
    pub fn for_entry(code: &str, title: &str, error: &EntryError) -> Self {
        Self {
            code: Some(code.to_string()),
            title: Some(title.to_string()),
            stage: error.stage,
            kind: error.kind,
            status: error.status,
            content_type: error.content_type.clone(),
            head: error.head.clone(),
            url: error.url.clone(),
            query: error.query.clone(),
            message: error.message.clone(),
        }
    }

    /// Run-level error with no code attached.
    pub fn runtime(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            code: None,
            title: None,
            stage: Stage::Runtime,
            kind,
            status: None,
            content_type: None,
            head: None,
            url: None,
            query: None,
            message: Some(message.into()),
        }
    }
}

/// One report per run date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub date: NaiveDate,
    pub scope: String,
    pub result: RunResult,
    pub summary: String,
    pub changes: Vec<ChangeRecord>,
    pub errors: Vec<ErrorRecord>,
    #[serde(default)]
    pub refs: Vec<RefLink>,
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
}

impl Report {
    pub fn new(date: NaiveDate, scope: impl Into<String>, result: RunResult) -> Self {
        Self {
            id: date.format("%Y-%m-%d").to_string(),
            date,
            scope: scope.into(),
            result,
            summary: String::new(),
            changes: Vec::new(),
            errors: Vec::new(),
            refs: Vec::new(),
            meta: BTreeMap::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }
}

/// Persisted list of reports, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLog {
    #[serde(default)]
    pub last_run: Option<NaiveDate>,
    #[serde(default)]
    pub records: Vec<Report>,
}

impl ReportLog {
    /// Replace any report for the same date and put `report` first.
    pub fn upsert(&mut self, report: Report) {
        self.records.retain(|r| r.date != report.date);
        self.last_run = Some(report.date);
        self.records.insert(0, report);
    }

    pub fn find(&self, date: NaiveDate) -> Option<&Report> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn latest(&self) -> Option<&Report> {
        self.records.first()
    }
}
