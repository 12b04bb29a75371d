//! File output helpers
//!
//! Manifest files are written atomically: content goes to a temporary file
//! in the destination directory, which is then renamed over the target. A
//! crash mid-write never leaves a half-written manifest behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::StackplanResult;

/// Write content to a file atomically (tempfile + rename)
pub fn atomic_write(path: &Path, content: &str) -> StackplanResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    fs::create_dir_all(&parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(&parent)?;
    temp.write_all(content.as_bytes())?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write content to a file directly (non-atomic)
pub fn plain_write(path: &Path, content: &str) -> StackplanResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}
