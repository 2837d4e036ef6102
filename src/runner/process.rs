//! The process runner.
//!
//! `ProcessRunner` starts the main application bound to the environment
//! and waits for it. It enforces no preconditions; callers check the
//! probe first.

use std::path::{Path, PathBuf};

use crate::environment::{Activation, Environment};
use crate::error::Result;
use crate::shell::{resolve_tool_path, CommandOptions, CommandSpec, ProcessResult, Spawner};
use crate::ui::UserInterface;

/// Starts the application with the environment bound.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner<'a> {
    environment: &'a Environment,
    application: &'a CommandSpec,
    working_dir: &'a Path,
}

impl<'a> ProcessRunner<'a> {
    pub fn new(
        environment: &'a Environment,
        application: &'a CommandSpec,
        working_dir: &'a Path,
    ) -> Self {
        Self {
            environment,
            application,
            working_dir,
        }
    }

    /// The command line and options the application will run with.
    ///
    /// A bare program name is looked up in the environment's bin
    /// directory first and kept as given if it is not there.
    pub fn bound_command(&self) -> Result<(CommandSpec, CommandOptions)> {
        let spec = match self.resolve_program() {
            Some(path) => self
                .application
                .with_program(path.to_string_lossy().into_owned()),
            None => self.application.clone(),
        };

        let mut options = CommandOptions {
            cwd: Some(self.working_dir.to_path_buf()),
            ..Default::default()
        };
        Activation::for_environment(self.environment)?.apply(&mut options);

        Ok((spec, options))
    }

    /// Start the application and block until it exits.
    ///
    /// A non-zero exit is a result, not an error. `Err` means the program
    /// could not be started or the binding could not be computed.
    pub fn run_launch(
        &self,
        spawner: &mut dyn Spawner,
        ui: &mut dyn UserInterface,
    ) -> Result<ProcessResult> {
        let (spec, options) = self.bound_command()?;

        if ui.output_mode().shows_commands() {
            ui.show_command(&spec.to_string());
        }

        let result = spawner.run(&spec, &options)?;
        tracing::info!("Application finished with {}", result.describe());
        Ok(result)
    }

    fn resolve_program(&self) -> Option<PathBuf> {
        let program = self.application.program.as_str();
        if program.contains('/') || program.contains(std::path::MAIN_SEPARATOR) {
            return None;
        }
        let dirs = [std::path::absolute(self.environment.bin_dir()).ok()?];
        resolve_tool_path(program, &dirs)
    }
}
