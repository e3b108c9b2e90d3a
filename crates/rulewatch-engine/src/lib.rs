//! rulewatch engine - orchestration layer
//!
//! Coordinates the core aggregator with its collaborators (tracked-item
//! source, snapshot persistence, report log, remote source) for one CLI
//! command at a time.

pub mod commands;

pub use commands::check::{check, CheckOutcome, CheckPorts, CheckRequest};
