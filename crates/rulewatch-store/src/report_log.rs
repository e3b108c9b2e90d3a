//! Report log file (`{ "lastRun": date|null, "records": [...] }`)

use crate::errors::Result;
use crate::fs::{load_or_default, save_pretty};
use rulewatch_core::{ReportLog, ReportSink};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonReportLog {
    path: PathBuf,
}

impl JsonReportLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for JsonReportLog {
    fn load(&self) -> Result<ReportLog> {
        load_or_default(&self.path)
    }

    fn save(&self, log: &ReportLog) -> Result<()> {
        save_pretty(&self.path, log)
    }
}
