//! `snapshot` subcommand

use crate::config::GlobalArgs;
use clap::Args;
use rulewatch_core::{Category, EntryState, SnapshotEntry};
use rulewatch_engine::commands::snapshot::list_entries;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Only this category (nfpc or nftc)
    #[arg(long)]
    pub category: Option<Category>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(global: &GlobalArgs, args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entries = list_entries(&global.snapshot_file(), args.category)?;

    if args.json {
        let rows: Vec<serde_json::Value> = entries
            .iter()
            .map(|(category, entry)| serde_json::json!({ "category": category, "entry": entry }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (category, entry) in &entries {
        println!("{}", format_row(*category, entry));
    }
    Ok(())
}

/// `category  code  state  noticeNo  effectiveDate`, tab separated.
fn format_row(category: Category, entry: &SnapshotEntry) -> String {
    let state = match &entry.state {
        EntryState::Observed(_) => "ok".to_string(),
        EntryState::Failed { error, .. } => format!("error:{}", error.kind),
    };
    let fp = entry.last_known_good();
    let notice_no = fp.and_then(|f| f.notice_no.as_deref()).unwrap_or("-");
    let effective = fp.and_then(|f| f.effective_date.as_deref()).unwrap_or("-");
    format!(
        "{}\t{}\t{}\t{}\t{}",
        category, entry.code, state, notice_no, effective
    )
}
