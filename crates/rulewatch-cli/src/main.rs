//! rulewatch CLI
//!
//! Daily change detection for tracked NFPC / NFTC administrative rules on
//! law.go.kr

use clap::{Parser, Subcommand};
use rulewatch_core::logging_facility::{self, Profile};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "rulewatch")]
#[command(about = "rulewatch - fire-safety rule change detector", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: config::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check every tracked rule and record today's report
    Check(commands::check::CheckArgs),
    /// Show a stored report
    Report(commands::report::ReportArgs),
    /// List stored snapshot entries
    Snapshot(commands::snapshot::SnapshotArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging_facility::init(Profile::from_format(&cli.global.log_format));

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(&cli.global, args),
        Commands::Report(args) => commands::report::execute(&cli.global, args),
        Commands::Snapshot(args) => commands::snapshot::execute(&cli.global, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
