//! Read-only report queries.

#![allow(clippy::result_large_err)]

use chrono::NaiveDate;
use rulewatch_core::errors::{Result, RuleWatchError};
use rulewatch_core::{Report, ReportSink};

/// Stored report for `date`, or the newest one when `date` is `None`.
///
/// ## Errors
///
/// - `NotFound`: no report for that date (or the log is empty)
/// - `Io` / `Serialization`: the report file cannot be read
pub fn find_report(sink: &dyn ReportSink, date: Option<NaiveDate>) -> Result<Report> {
    let log = sink.load()?;
    let found = match date {
        Some(d) => log.find(d),
        None => log.latest(),
    };
    found.cloned().ok_or_else(|| {
        RuleWatchError::ReportNotFound {
            date: date.map_or_else(|| "latest".to_string(), |d| d.to_string()),
        }
        .into()
    })
}
