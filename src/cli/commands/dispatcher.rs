//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands};
use crate::dataset::loader::load_dataset;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
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
    dataset: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher with an optional dataset override.
    pub fn new(dataset: Option<PathBuf>) -> Self {
        Self { dataset }
    }

    /// Get the dataset override path, if any.
    pub fn dataset(&self) -> Option<&Path> {
        self.dataset.as_deref()
    }

    /// Load and index the dataset this dispatcher points at.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let dataset = load_dataset(self.dataset.as_deref())?;
        Catalog::new(dataset)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Dose(args) => {
                let cmd = super::dose::DoseCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Coverage(args) => {
                let cmd = super::coverage::CoverageCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Empiric(args) => {
                let cmd = super::empiric::EmpiricCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Pathogens(args) => {
                let cmd = super::lookups::PathogensCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Ranges(args) => {
                let cmd = super::lookups::RangesCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Sites(args) => {
                let cmd = super::lookups::SitesCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Institutions(args) => {
                let cmd =
                    super::lookups::InstitutionsCommand::new(self.load_catalog()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Lint(args) => {
                let cmd = super::lint::LintCommand::new(self.dataset.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(Some(PathBuf::from("/data")));
        assert_eq!(dispatcher.dataset(), Some(Path::new("/data")));
    }

    #[test]
    fn dispatcher_loads_builtin_catalog() {
        let dispatcher = CommandDispatcher::new(None);
        let catalog = dispatcher.load_catalog().unwrap();
        assert!(!catalog.antibiotics().is_empty());
    }
}
