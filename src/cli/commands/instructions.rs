//! Instructions command implementation.
//!
//! The `hoopdata instructions` command prints the manual download steps
//! without touching the filesystem.

use std::path::{Path, PathBuf};

use crate::dataset::KAGGLE_BASKETBALL;
use crate::error::Result;
use crate::report::Reporter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The instructions command implementation.
pub struct InstructionsCommand {
    data_dir: PathBuf,
}

impl InstructionsCommand {
    /// Create a new instructions command.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }
}

impl Command for InstructionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reporter = Reporter::new(&KAGGLE_BASKETBALL, &self.data_dir);
        reporter.print_instructions(ui);
        Ok(CommandResult::success())
    }
}
