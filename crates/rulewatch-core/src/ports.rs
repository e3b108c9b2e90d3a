//! Collaborator interfaces used by the run aggregator and the engine.
//!
//! Transport and persistence live in their own crates; the core only sees
//! these traits.

use crate::errors::{ExError, FailureKind, TransportError};
use crate::model::{Category, DetailPayload, RemoteCandidate, ReportLog, SnapshotStore, TrackedItem};

/// Remote regulatory database.
pub trait RemoteSource {
    /// Search for candidates matching `query` within remote rule category
    /// `knd`, returning at most `display` items.
    ///
    /// # Errors
    ///
    /// Returns the final [`TransportError`] once the transport's own retries
    /// are exhausted.
    fn search(
        &self,
        query: &str,
        knd: u32,
        display: u32,
    ) -> Result<Vec<RemoteCandidate>, TransportError>;

    /// Fetch the detail payload for one remote record.
    ///
    /// # Errors
    ///
    /// Returns the final [`TransportError`] once retries are exhausted.
    fn fetch_detail(&self, remote_id: &str) -> Result<DetailPayload, TransportError>;
}

/// Durable snapshot store.
#[allow(clippy::result_large_err)]
pub trait SnapshotPersistence {
    /// # Errors
    ///
    /// Returns `ExErrorKind::Io` or `ExErrorKind::Serialization` if the
    /// stored snapshot cannot be read.
    fn load(&self) -> Result<SnapshotStore, ExError>;

    /// # Errors
    ///
    /// Returns `ExErrorKind::Persistence` if the snapshot cannot be written.
    fn save(&self, store: &SnapshotStore) -> Result<(), ExError>;
}

/// Static list of tracked items per category.
#[allow(clippy::result_large_err)]
pub trait TrackedItemSource {
    /// # Errors
    ///
    /// Returns `ExErrorKind::Io` or `ExErrorKind::Serialization` if the
    /// item list cannot be read.
    fn load(&self, category: Category) -> Result<Vec<TrackedItem>, ExError>;
}

/// Daily report log.
#[allow(clippy::result_large_err)]
pub trait ReportSink {
    /// # Errors
    ///
    /// Returns `ExErrorKind::Io` or `ExErrorKind::Serialization` if the log
    /// cannot be read.
    fn load(&self) -> Result<ReportLog, ExError>;

    /// # Errors
    ///
    /// Returns `ExErrorKind::Persistence` if the log cannot be written.
    fn save(&self, log: &ReportLog) -> Result<(), ExError>;
}

/// Source that fails every call; used where no remote access is allowed.
pub struct OfflineSource;

impl RemoteSource for OfflineSource {
    fn search(&self, query: &str, _: u32, _: u32) -> Result<Vec<RemoteCandidate>, TransportError> {
        Err(TransportError::new(
            FailureKind::RequestException,
            format!("offline://search?query={}", query),
        )
        .with_message("remote access disabled"))
    }

    fn fetch_detail(&self, remote_id: &str) -> Result<DetailPayload, TransportError> {
        Err(TransportError::new(
            FailureKind::RequestException,
            format!("offline://detail?ID={}", remote_id),
        )
        .with_message("remote access disabled"))
    }
}
