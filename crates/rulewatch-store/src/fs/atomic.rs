//! Atomic write primitives
//!
//! Uses temp→rename so a crash never leaves a half-written report or
//! snapshot behind

use crate::errors::{write_error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error("create_parent_dir", parent, e))?;
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| write_error("write_temp", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| write_error("rename_temp", target_path, e))?;

    Ok(())
}

/// `data.json` → `data.json.tmp`, next to the target
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}
