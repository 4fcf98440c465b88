//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check) | None => {
                let cmd = super::check::CheckCommand::new(&self.data_dir);
                cmd.execute(ui)
            }
            Some(Commands::Instructions) => {
                let cmd = super::instructions::InstructionsCommand::new(&self.data_dir);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_exposes_data_dir() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/srv/data"));
        assert_eq!(dispatcher.data_dir(), Path::new("/srv/data"));
    }

    #[test]
    fn no_subcommand_runs_check() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("data");
        let dispatcher = CommandDispatcher::new(data_dir.clone());
        let cli = Cli::try_parse_from(["hoopdata"]).unwrap();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        // The default command is the checker, which ensures the directory
        assert!(data_dir.is_dir());
    }

    #[test]
    fn instructions_subcommand_routes() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli::try_parse_from(["hoopdata", "instructions"]).unwrap();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui
            .headers()
            .contains(&"Manual download instructions".to_string()));
    }
}
