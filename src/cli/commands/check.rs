//! Check command implementation.
//!
//! The `hoopdata check` command ensures the data directory exists, scans it
//! for dataset files, classifies them by size, and reports the outcome.
//! Every classification outcome is a normal result: the command exits 0
//! whether usable data was found or not.

use std::path::{Path, PathBuf};

use crate::dataset::{ensure_data_dir, scan_candidates, validate_files, KAGGLE_BASKETBALL};
use crate::error::Result;
use crate::report::Reporter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    data_dir: PathBuf,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = &KAGGLE_BASKETBALL;
        let reporter = Reporter::new(source, &self.data_dir);

        reporter.print_header(ui);

        ensure_data_dir(&self.data_dir)?;
        let candidates = scan_candidates(&self.data_dir, source.data_extension)?;

        if candidates.is_empty() {
            ui.warning(&format!(
                "No {} files found in {}",
                source.extension_upper(),
                reporter.display_dir().display()
            ));
            reporter.print_instructions(ui);
            return Ok(CommandResult::success());
        }

        let report = validate_files(&candidates, source.min_valid_bytes);
        reporter.print_summary(ui, &report);

        if report.has_valid() {
            reporter.print_next_steps(ui);
        } else {
            reporter.print_instructions(ui);
        }

        Ok(CommandResult::success())
    }
}
