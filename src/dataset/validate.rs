//! Size-based validity classification.
//!
//! A candidate is valid when its size could be read and exceeds the
//! dataset's minimum byte floor. Everything else becomes an invalid
//! classification with a human-readable reason; a failing size query is
//! downgraded, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

/// A candidate whose size was read successfully and clears the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFile {
    /// Path of the file inside the data directory.
    pub path: PathBuf,
    /// Size in bytes at classification time.
    pub size: u64,
}

impl ValidFile {
    /// Size in megabytes, for display.
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }

    /// File name, lossily decoded for display.
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// A candidate that is too small or whose size could not be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFile {
    /// Path of the file inside the data directory.
    pub path: PathBuf,
    /// Why the file was rejected.
    pub reason: String,
}

impl InvalidFile {
    /// File name, lossily decoded for display.
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Partition of the candidates into valid and invalid files.
///
/// Input order is preserved within each partition.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Candidates that cleared the size floor.
    pub valid: Vec<ValidFile>,
    /// Candidates rejected with a reason.
    pub invalid: Vec<InvalidFile>,
}

impl ValidationReport {
    /// Whether no candidates were classified at all.
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// Whether at least one candidate is usable.
    pub fn has_valid(&self) -> bool {
        !self.valid.is_empty()
    }

    /// Number of candidates that went into the classification.
    pub fn candidate_count(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Combined size of the valid files, in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.valid.iter().map(|f| f.size).sum()
    }

    /// Combined size of the valid files, in megabytes.
    pub fn total_mb(&self) -> f64 {
        self.total_bytes() as f64 / (1024.0 * 1024.0)
    }
}

/// Classify each candidate path by querying its size.
///
/// - size > `min_valid_bytes` → valid
/// - size ≤ `min_valid_bytes` → invalid, `too small (N bytes)`
/// - size query failed → invalid, `error: <message>`
pub fn validate_files(paths: &[PathBuf], min_valid_bytes: u64) -> ValidationReport {
    let mut report = ValidationReport::default();

    for path in paths {
        match fs::metadata(path) {
            Ok(meta) if meta.len() > min_valid_bytes => {
                report.valid.push(ValidFile {
                    path: path.clone(),
                    size: meta.len(),
                });
            }
            Ok(meta) => {
                report.invalid.push(InvalidFile {
                    path: path.clone(),
                    reason: format!("too small ({} bytes)", meta.len()),
                });
            }
            Err(e) => {
                report.invalid.push(InvalidFile {
                    path: path.clone(),
                    reason: format!("error: {}", e),
                });
            }
        }
    }

    tracing::debug!(
        "classified {} valid / {} invalid file(s)",
        report.valid.len(),
        report.invalid.len()
    );
    report
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_bytes(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, vec![b'x'; len]).unwrap();
        path
    }

    #[test]
    fn file_above_floor_is_valid() {
        let temp = TempDir::new().unwrap();
        let path = write_bytes(&temp, "games.csv", 101);

        let report = validate_files(&[path], 100);
        assert_eq!(report.valid.len(), 1);
        assert!(report.invalid.is_empty());
        assert_eq!(report.valid[0].size, 101);
    }

    #[test]
    fn file_at_floor_is_too_small() {
        let temp = TempDir::new().unwrap();
        let path = write_bytes(&temp, "games.csv", 100);

        let report = validate_files(&[path], 100);
        assert!(report.valid.is_empty());
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].reason, "too small (100 bytes)");
    }

    #[test]
    fn reason_carries_exact_byte_count() {
        let temp = TempDir::new().unwrap();
        let path = write_bytes(&temp, "tiny.csv", 50);

        let report = validate_files(&[path], 100);
        assert_eq!(report.invalid[0].reason, "too small (50 bytes)");
    }

    #[test]
    fn unreadable_file_is_downgraded_not_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone.csv");
        let ok = write_bytes(&temp, "games.csv", 5000);

        let report = validate_files(&[missing, ok], 100);
        assert_eq!(report.valid.len(), 1);
        assert_eq!(report.invalid.len(), 1);
        assert!(report.invalid[0].reason.starts_with("error: "));
    }

    #[test]
    fn input_order_is_preserved_per_partition() {
        let temp = TempDir::new().unwrap();
        let a = write_bytes(&temp, "a.csv", 200);
        let b = write_bytes(&temp, "b.csv", 10);
        let c = write_bytes(&temp, "c.csv", 300);
        let d = write_bytes(&temp, "d.csv", 20);

        let report = validate_files(&[a, b, c, d], 100);
        let valid: Vec<String> = report.valid.iter().map(|f| f.display_name()).collect();
        let invalid: Vec<String> = report.invalid.iter().map(|f| f.display_name()).collect();
        assert_eq!(valid, ["a.csv", "c.csv"]);
        assert_eq!(invalid, ["b.csv", "d.csv"]);
    }

    #[test]
    fn totals_sum_valid_files_only() {
        let temp = TempDir::new().unwrap();
        let a = write_bytes(&temp, "a.csv", 5000);
        let b = write_bytes(&temp, "b.csv", 50);

        let report = validate_files(&[a, b], 100);
        assert_eq!(report.total_bytes(), 5000);
        assert!((report.total_mb() - 0.00476837).abs() < 1e-6);
    }

    #[test]
    fn size_mb_converts_binary_megabytes() {
        let file = ValidFile {
            path: PathBuf::from("x.csv"),
            size: 1024 * 1024,
        };
        assert!((file.size_mb() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn classification_is_stable_across_runs() {
        let temp = TempDir::new().unwrap();
        let a = write_bytes(&temp, "a.csv", 5000);
        let b = write_bytes(&temp, "b.csv", 50);
        let paths = vec![a, b];

        let first = validate_files(&paths, 100);
        let second = validate_files(&paths, 100);
        assert_eq!(first.valid, second.valid);
        assert_eq!(first.invalid, second.invalid);
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = validate_files(&[], 100);
        assert!(report.is_empty());
        assert!(!report.has_valid());
        assert_eq!(report.candidate_count(), 0);
        assert_eq!(report.total_bytes(), 0);
    }
}
