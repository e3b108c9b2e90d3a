//! Read-only snapshot queries.

#![allow(clippy::result_large_err)]

use rulewatch_core::errors::Result;
use rulewatch_core::{Category, SnapshotEntry, SnapshotPersistence};

/// Stored entries in category order, optionally restricted to one category.
///
/// ## Errors
///
/// - `Io` / `Serialization`: the snapshot file cannot be read
pub fn list_entries(
    persistence: &dyn SnapshotPersistence,
    category: Option<Category>,
) -> Result<Vec<(Category, SnapshotEntry)>> {
    let store = persistence.load()?;
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    Ok(categories
        .into_iter()
        .flat_map(|c| store.entries(c).cloned().map(move |e| (c, e)).collect::<Vec<_>>())
        .collect())
}
