//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::context::LaunchContext;
use crate::error::Result;
use crate::shell::{Spawner, SystemSpawner};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    project_root: PathBuf,
    spawner: Box<dyn Spawner>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_spawner(project_root, Box::new(SystemSpawner::new()))
    }

    /// Create a dispatcher that starts programs through `spawner`.
    pub fn with_spawner(project_root: PathBuf, spawner: Box<dyn Spawner>) -> Self {
        Self {
            project_root,
            spawner,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Loads configuration (except for `completions`), routes the CLI
    /// subcommand to the appropriate command implementation and executes it.
    pub fn dispatch(&mut self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            return super::completions::CompletionsCommand::new(args.clone()).execute(ui);
        }

        let ctx = LaunchContext::load(&self.project_root, cli.config.as_deref())?;
        let spawner = self.spawner.as_mut();

        match &cli.command {
            None | Some(Commands::Menu) => {
                super::menu::MenuCommand::new(&ctx, spawner).execute(ui)
            }
            Some(Commands::Install) => {
                super::install::InstallCommand::new(&ctx, spawner).execute(ui)
            }
            Some(Commands::Launch) => {
                super::launch::LaunchCommand::new(&ctx, spawner).execute(ui)
            }
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(&ctx, args.clone()).execute(ui)
            }
            Some(Commands::Config(args)) => {
                super::config::ConfigCommand::new(&ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(_)) => Ok(CommandResult::success()),
        }
    }
}

/// Exit code for a finished collaborator: its own code, or 1 if it had none.
pub(crate) fn exit_code_for(result: &crate::shell::ProcessResult) -> i32 {
    if result.success {
        0
    } else {
        result.exit_code.filter(|code| *code != 0).unwrap_or(1)
    }
}
