//! Atomic I/O operations with file locking

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file atomically");

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read a file as a sequence of lines.
///
/// Splits on `\n` and keeps the final empty segment, so a file ending in a
/// newline yields a trailing `""`. A `\r` before the newline is dropped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = read_text(path)?;
    Ok(split_lines(&content))
}

/// Write lines joined with `\n` atomically.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    write_atomic(path, join_lines(lines).as_bytes())
}

/// Split text into lines, the inverse of [`join_lines`].
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Join lines with `\n`.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}
