//! rulewatch-store - JSON file persistence
//!
//! Every file is UTF-8 pretty-printed JSON written atomically. A missing
//! file loads as the empty default; a file that exists but does not parse is
//! an `ERR_SERIALIZATION` error, never silently replaced.
//!
//! - [`JsonSnapshotFile`]: the snapshot store (`snapshot.json`)
//! - [`JsonReportLog`]: the daily report log (`data.json`)
//! - [`StandardsFiles`]: tracked items per category (`standards_*.json`)

#![allow(clippy::result_large_err)]

pub mod errors;
pub mod fs;
pub mod report_log;
pub mod snapshot_file;
pub mod standards;

pub use report_log::JsonReportLog;
pub use snapshot_file::JsonSnapshotFile;
pub use standards::{StandardsDocument, StandardsFiles};
