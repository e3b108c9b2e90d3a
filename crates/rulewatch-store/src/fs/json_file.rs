//! Load-or-default / pretty-save for JSON documents

use crate::errors::{encode_error, io_error, malformed, Result};
use crate::fs::atomic::atomic_write;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse `path`, or return `T::default()` if it does not exist.
pub fn load_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file missing, using default");
            return Ok(T::default());
        }
        Err(e) => return Err(io_error("read_json_file", path, e)),
    };
    serde_json::from_slice(&bytes).map_err(|e| malformed(path, e))
}

/// Write `value` as pretty JSON with a trailing newline, atomically.
pub fn save_pretty<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|e| encode_error(path, e))?;
    bytes.push(b'\n');
    atomic_write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
