//! `check` subcommand

use crate::config::{today_kst, GlobalArgs};
use chrono::NaiveDate;
use clap::Args;
use rulewatch_engine::{check, CheckOutcome, CheckPorts, CheckRequest};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Run date (YYYY-MM-DD); defaults to today in KST
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn execute(global: &GlobalArgs, args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today = args.date.unwrap_or_else(today_kst);

    let items = global.standards();
    let snapshots = global.snapshot_file();
    let reports = global.report_log();
    let remote = global.remote_source()?;

    let request = CheckRequest::new(today, global.credential())
        .with_mock(global.mock)
        .with_meta("standards_nfpc", global.standards_nfpc.display().to_string())
        .with_meta("standards_nftc", global.standards_nftc.display().to_string());
    let ports = CheckPorts {
        items: &items,
        snapshots: &snapshots,
        reports: &reports,
        remote: remote.as_ref(),
    };

    match check(request, &ports)? {
        CheckOutcome::MissingCredential { .. } => {
            println!("Done (missing credential).");
        }
        CheckOutcome::Completed { outcome, mock } => {
            println!(
                "Done. date={} changes={} errors={} mock={}",
                today,
                outcome.change_count(),
                outcome.error_count(),
                mock
            );
        }
    }

    Ok(())
}
