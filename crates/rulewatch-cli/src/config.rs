//! Flags shared by every subcommand, each with an environment fallback

use chrono::{FixedOffset, NaiveDate, Utc};
use clap::Args;
use rulewatch_core::rulewatch_core_types::Sensitive;
use rulewatch_core::{OfflineSource, RemoteSource};
use rulewatch_lawgo::{LawGoClient, LawGoConfig, MockSource};
use rulewatch_store::{JsonReportLog, JsonSnapshotFile, StandardsFiles};
use std::path::PathBuf;

const KST_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Report log file
    #[arg(long, env = "OUTPUT_DATA", default_value = "data.json", global = true)]
    pub data: PathBuf,

    /// Snapshot store file
    #[arg(long, env = "OUTPUT_SNAPSHOT", default_value = "snapshot.json", global = true)]
    pub snapshot: PathBuf,

    /// Tracked NFPC items
    #[arg(long, env = "STANDARDS_NFPC", default_value = "standards_nfpc.json", global = true)]
    pub standards_nfpc: PathBuf,

    /// Tracked NFTC items
    #[arg(long, env = "STANDARDS_NFTC", default_value = "standards_nftc.json", global = true)]
    pub standards_nftc: PathBuf,

    /// law.go.kr API credential
    #[arg(long, env = "LAWGO_OC", default_value = "", hide_env_values = true, global = true)]
    pub oc: String,

    /// Use fixed offline responses instead of the live API (`LAWGO_MOCK=1`)
    #[arg(
        long,
        env = "LAWGO_MOCK",
        action = clap::ArgAction::SetTrue,
        value_parser = mock_switch,
        global = true
    )]
    pub mock: bool,

    /// Log output: `pretty` or `json`
    #[arg(long, env = "RULEWATCH_LOG", default_value = "pretty", global = true)]
    pub log_format: String,
}

impl GlobalArgs {
    pub fn credential(&self) -> Sensitive<String> {
        Sensitive::new(self.oc.trim().to_string())
    }

    pub fn standards(&self) -> StandardsFiles {
        StandardsFiles::new(&self.standards_nfpc, &self.standards_nftc)
    }

    pub fn snapshot_file(&self) -> JsonSnapshotFile {
        JsonSnapshotFile::new(&self.snapshot)
    }

    pub fn report_log(&self) -> JsonReportLog {
        JsonReportLog::new(&self.data)
    }

    /// Mock source, live client, or an offline source when there is no
    /// credential (the engine makes no remote calls in that case).
    pub fn remote_source(&self) -> Result<Box<dyn RemoteSource>, Box<dyn std::error::Error>> {
        let credential = self.credential();
        if self.mock {
            Ok(Box::new(MockSource))
        } else if credential.is_blank() {
            Ok(Box::new(OfflineSource))
        } else {
            Ok(Box::new(LawGoClient::new(LawGoConfig::new(credential))?))
        }
    }
}

/// `1` (or `true` from the bare flag) turns mock mode on; any other value,
/// including an empty one, leaves it off.
fn mock_switch(value: &str) -> Result<bool, std::convert::Infallible> {
    let value = value.trim();
    Ok(value == "1" || value.eq_ignore_ascii_case("true"))
}

/// Today's date in Korea Standard Time.
pub fn today_kst() -> NaiveDate {
    let now = Utc::now();
    match FixedOffset::east_opt(KST_OFFSET_SECS) {
        Some(kst) => now.with_timezone(&kst).date_naive(),
        None => now.date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_switch_only_one_or_true_is_on() {
        assert_eq!(mock_switch("1"), Ok(true));
        assert_eq!(mock_switch(" true "), Ok(true));
        for off in ["", "0", "2", "false", "yes"] {
            assert_eq!(mock_switch(off), Ok(false), "value {:?}", off);
        }
    }
}
