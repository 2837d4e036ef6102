//! Status command implementation.
//!
//! The `capture-launcher status` command shows where the environment
//! lives and whether it is usable.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::context::LaunchContext;
use crate::environment::EnvironmentStatus;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Machine-readable status.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub app_name: String,
    pub project_root: PathBuf,
    pub environment: PathBuf,
    pub interpreter: PathBuf,
    pub status: EnvironmentStatus,
}

impl StatusReport {
    pub fn collect(ctx: &LaunchContext) -> Self {
        let env = ctx.environment();
        Self {
            app_name: ctx.config().app_name.clone(),
            project_root: ctx.project_root().to_path_buf(),
            environment: env.root().to_path_buf(),
            interpreter: env.interpreter(),
            status: ctx.probe().status(),
        }
    }
}

/// The status command implementation.
pub struct StatusCommand<'a> {
    ctx: &'a LaunchContext,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(ctx: &'a LaunchContext, args: StatusArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = StatusReport::collect(self.ctx);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.print_data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} - Status", report.app_name));
        ui.message(&format!("Environment: {}", report.environment.display()));
        ui.message(&format!("Interpreter: {}", report.interpreter.display()));

        let line = format!("Status: {}", report.status);
        match report.status {
            EnvironmentStatus::Ready => ui.success(&line),
            EnvironmentStatus::Incomplete => {
                ui.warning(&line);
                ui.show_hint("Run 'capture-launcher install' to rebuild it");
            }
            EnvironmentStatus::Absent => {
                ui.message(&line);
                ui.show_hint("Run 'capture-launcher install' to create it");
            }
        }

        Ok(CommandResult::success())
    }
}
