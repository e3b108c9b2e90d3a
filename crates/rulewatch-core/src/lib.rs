//! rulewatch core - snapshot-diff engine for tracked administrative rules
//!
//! This crate owns everything with design content:
//! - Data model (tracked items, snapshot entries, reports)
//! - Remote record resolution (search + scored disambiguation)
//! - Fingerprint building (date normalization, content hashes, links)
//! - Change detection against the previous snapshot entry
//! - The run aggregator that ties the above together per tracked code
//!
//! Transport, persistence and the CLI are collaborators reached through the
//! traits in [`ports`].

pub mod diff;
pub mod errors;
pub mod fingerprint;
pub mod logging_facility;
pub mod model;
pub mod ports;
pub mod resolver;
pub mod run;

pub use rulewatch_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, FailureKind, Result, RuleWatchError, TransportError};
pub use model::{
    Category, ChangeRecord, DetailPayload, EntryError, EntryState, ErrorRecord, Fingerprint,
    RemoteCandidate, Report, ReportLog, RunResult, SnapshotEntry, SnapshotStore, Stage,
    TrackedItem,
};
pub use diff::{detect_change, render_report_markdown, ChangeDetection, DiffKey};
pub use fingerprint::DetailLinkTemplate;
pub use ports::{OfflineSource, RemoteSource, ReportSink, SnapshotPersistence, TrackedItemSource};
pub use resolver::ScoringWeights;
pub use run::{missing_credential_report, run, RunConfig, RunContext, RunOutcome};
