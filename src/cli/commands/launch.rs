//! Launch command implementation.
//!
//! `capture-launcher launch` starts the application once. It refuses
//! with exit code 2 if the environment has not been installed.

use crate::context::LaunchContext;
use crate::error::{LauncherError, Result};
use crate::menu::report_launch;
use crate::shell::Spawner;
use crate::ui::UserInterface;

use super::dispatcher::{exit_code_for, Command, CommandResult};

/// Exit code when there is no environment to launch into.
pub const EXIT_ENVIRONMENT_MISSING: i32 = 2;

/// The launch command implementation.
pub struct LaunchCommand<'a> {
    ctx: &'a LaunchContext,
    spawner: &'a mut dyn Spawner,
}

impl<'a> LaunchCommand<'a> {
    /// Create a new launch command.
    pub fn new(ctx: &'a LaunchContext, spawner: &'a mut dyn Spawner) -> Self {
        Self { ctx, spawner }
    }
}

impl Command for LaunchCommand<'_> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.ctx.probe().exists() {
            let missing = LauncherError::EnvironmentMissing {
                path: self.ctx.environment().root().to_path_buf(),
            };
            ui.error(&missing.to_string());
            ui.show_hint("Run 'capture-launcher install' to create it");
            return Ok(CommandResult::failure(EXIT_ENVIRONMENT_MISSING));
        }

        let result = self.ctx.runner().run_launch(&mut *self.spawner, ui)?;
        report_launch(ui, &self.ctx.config().app_name, &result);

        let code = exit_code_for(&result);
        if code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}
