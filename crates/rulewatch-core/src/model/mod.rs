//! Data model for the snapshot-diff engine.
//!
//! - `tracked.rs`: tracked items and their categories (configuration input)
//! - `remote.rs`: ephemeral search candidates and detail payloads
//! - `entry.rs`: snapshot entries, fingerprints and the snapshot store
//! - `report.rs`: change/error records, the daily report and the report log
//!
//! Types here are data only: no network or filesystem side effects. The
//! camelCase JSON field names are part of the persisted file format.

pub mod entry;
pub mod remote;
pub mod report;
pub mod tracked;

pub use entry::{EntryError, EntryState, Fingerprint, SnapshotEntry, SnapshotStore, Stage};
pub use remote::{DetailPayload, RemoteCandidate};
pub use report::{ChangeRecord, ErrorRecord, RefLink, Report, ReportLog, RunResult};
pub use tracked::{Category, TrackedItem};

use serde::{Deserialize, Deserializer};

/// Reads `null` as an empty string; older files write missing titles that way.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
