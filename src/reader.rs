//! File system boundary
//!
//! The core parses in-memory text; these helpers are the only place the
//! library touches the file system. Reading is whole-file and blocking,
//! there is no streaming path.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a whole file into a string
pub fn read_text(path: &Path) -> Result<String> {
    debug!("Reading file: {}", path.display());
    std::fs::read_to_string(path).map_err(|source| Error::io(path.display().to_string(), source))
}

/// List the files in a data directory, sorted by name
///
/// Fails when the directory cannot be read, or when it contains no
/// files at all (subdirectories are ignored).
pub fn list_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory).map_err(|source| Error::NoDataDirectory {
        path: directory.display().to_string(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        return Err(Error::NoDataFile {
            path: directory.display().to_string(),
        });
    }

    files.sort();
    Ok(files)
}
