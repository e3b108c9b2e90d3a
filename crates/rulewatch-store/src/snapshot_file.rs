//! Snapshot store file (`{ "nfpc": {code: entry}, "nftc": {...} }`)

use crate::errors::Result;
use crate::fs::{load_or_default, save_pretty};
use rulewatch_core::{SnapshotPersistence, SnapshotStore};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotPersistence for JsonSnapshotFile {
    fn load(&self) -> Result<SnapshotStore> {
        load_or_default(&self.path)
    }

    fn save(&self, store: &SnapshotStore) -> Result<()> {
        save_pretty(&self.path, store)
    }
}
