//! Report and instruction rendering.
//!
//! [`Reporter`] turns classification results into console output. It is pure
//! formatting over a [`UserInterface`], so every section can be asserted
//! against [`MockUI`](crate::ui::MockUI) in tests.

use std::path::{Path, PathBuf};

use crate::dataset::{DatasetSource, ValidationReport};
use crate::ui::UserInterface;

/// Renders check results and acquisition guidance for one dataset.
pub struct Reporter<'a> {
    source: &'a DatasetSource,
    data_dir: &'a Path,
}

impl<'a> Reporter<'a> {
    /// Create a reporter for the given dataset and data directory.
    pub fn new(source: &'a DatasetSource, data_dir: &'a Path) -> Self {
        Self { source, data_dir }
    }

    /// Absolute form of the data directory, for display.
    ///
    /// The checker works with the path as given; only printed output uses
    /// the absolute form.
    pub fn display_dir(&self) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(self.data_dir))
                .unwrap_or_else(|_| self.data_dir.to_path_buf())
        }
    }

    /// Print the tool banner and dataset identification.
    pub fn print_header(&self, ui: &mut dyn UserInterface) {
        ui.show_header(&format!("{} data checker", self.source.name));
        ui.message(&format!("Dataset: {}", self.source.slug));
        ui.message("");
    }

    /// Print counts, per-file lines, and totals for a classification.
    pub fn print_summary(&self, ui: &mut dyn UserInterface, report: &ValidationReport) {
        let ext = self.source.extension_upper();
        ui.message(&format!(
            "Found {} {} file(s) in {}",
            report.candidate_count(),
            ext,
            self.display_dir().display()
        ));

        if report.has_valid() {
            ui.message("");
            ui.message(&format!("{} valid file(s):", report.valid.len()));
            let detail = ui.output_mode().shows_detail();
            for file in &report.valid {
                let mut line = format!("{:<40} {:>8.2} MB", file.display_name(), file.size_mb());
                if detail {
                    line.push_str(&format!("  ({} bytes)", file.size));
                }
                ui.success(&line);
            }
            ui.message("");
            ui.message(&format!("Total: {:.2} MB", report.total_mb()));
        }

        if !report.invalid.is_empty() {
            ui.message("");
            ui.warning(&format!(
                "{} file(s) with problems:",
                report.invalid.len()
            ));
            for file in &report.invalid {
                ui.error(&format!("{} ({})", file.display_name(), file.reason));
            }
        }
    }

    /// Print the fixed follow-up actions shown once usable data exists.
    pub fn print_next_steps(&self, ui: &mut dyn UserInterface) {
        ui.message("");
        ui.success("Data ready to use!");
        ui.message("");
        ui.message("Next steps:");
        ui.hint("   1. Run: npm install");
        ui.hint("   2. Run: npm run dev");
        ui.hint("   3. Open http://localhost:3000 and run \"Ingest/Update database\"");
    }

    /// Print the fixed manual-download instruction block.
    ///
    /// The absolute data directory path is the only interpolated value.
    pub fn print_instructions(&self, ui: &mut dyn UserInterface) {
        ui.message("");
        ui.show_header("Manual download instructions");
        ui.message("");
        ui.message("1. Open the dataset page on Kaggle:");
        ui.message(&format!("   {}", self.source.page_url));
        ui.message("");
        ui.message("2. Sign in to Kaggle (a free account is enough)");
        ui.message("");
        ui.message("3. Click the \"Download\" button (top right corner)");
        ui.message("");
        ui.message("4. Extract the downloaded ZIP archive");
        ui.message("");
        ui.message(&format!(
            "5. Copy every {} file into:",
            self.source.extension_upper()
        ));
        ui.message(&format!("   {}", self.display_dir().display()));
        ui.message("");
        ui.message("6. Run this checker again:");
        ui.message("   hoopdata check");
    }
}
