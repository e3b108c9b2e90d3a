//! Command orchestration layer.
//!
//! - `check` mutates: one run, report upsert, snapshot save
//! - `report` / `snapshot` are read-only queries over stored files

pub mod check;
pub mod report;
pub mod snapshot;
