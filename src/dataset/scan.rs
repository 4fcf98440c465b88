//! Data directory creation and candidate enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HoopdataError, Result};

/// Create the data directory (and parents) if it does not exist yet.
///
/// Idempotent: an already existing directory is not an error.
pub fn ensure_data_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| HoopdataError::DataDirCreate {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("data directory ready at {}", path.display());
    Ok(())
}

/// Enumerate candidate data files directly inside `dir`.
///
/// Matches regular files whose extension equals `extension` ignoring ASCII
/// case, so `games.csv` and `games.CSV` both qualify. Subdirectories are
/// never descended into. Enumeration order is whatever the filesystem
/// yields; callers only report the result, they never depend on order.
pub fn scan_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| HoopdataError::DataDirRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| HoopdataError::DataDirRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            candidates.push(path);
        }
    }

    tracing::debug!(
        "found {} candidate file(s) in {}",
        candidates.len(),
        dir.display()
    );
    Ok(candidates)
}
