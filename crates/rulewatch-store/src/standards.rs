//! Tracked-item ("standards") files, one per category

use crate::errors::Result;
use crate::fs::load_or_default;
use rulewatch_core::{Category, TrackedItem, TrackedItemSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk shape `{ "items": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardsDocument {
    #[serde(default)]
    pub items: Vec<TrackedItem>,
}

/// Standards file paths for both categories.
#[derive(Debug, Clone)]
pub struct StandardsFiles {
    nfpc: PathBuf,
    nftc: PathBuf,
}

impl StandardsFiles {
    pub fn new(nfpc: impl Into<PathBuf>, nftc: impl Into<PathBuf>) -> Self {
        Self {
            nfpc: nfpc.into(),
            nftc: nftc.into(),
        }
    }

    pub fn path(&self, category: Category) -> &Path {
        match category {
            Category::Nfpc => &self.nfpc,
            Category::Nftc => &self.nftc,
        }
    }
}

impl TrackedItemSource for StandardsFiles {
    fn load(&self, category: Category) -> Result<Vec<TrackedItem>> {
        let doc: StandardsDocument = load_or_default(self.path(category))?;
        tracing::debug!(category = %category, items = doc.items.len(), "standards loaded");
        Ok(doc.items)
    }
}
