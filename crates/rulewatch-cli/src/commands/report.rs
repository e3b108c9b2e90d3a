//! `report` subcommand

use crate::config::GlobalArgs;
use chrono::NaiveDate;
use clap::Args;
use rulewatch_core::render_report_markdown;
use rulewatch_engine::commands::report::find_report;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report date (YYYY-MM-DD); defaults to the latest report
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the stored JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

pub fn execute(global: &GlobalArgs, args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = find_report(&global.report_log(), args.date)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report_markdown(&report));
    }

    Ok(())
}
