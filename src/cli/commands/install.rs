//! Install command implementation.
//!
//! `capture-launcher install` performs one provisioning run without the
//! menu and exits with the installer's exit code.

use crate::context::LaunchContext;
use crate::error::Result;
use crate::menu::report_install;
use crate::shell::Spawner;
use crate::ui::UserInterface;

use super::dispatcher::{exit_code_for, Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    ctx: &'a LaunchContext,
    spawner: &'a mut dyn Spawner,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(ctx: &'a LaunchContext, spawner: &'a mut dyn Spawner) -> Self {
        Self { ctx, spawner }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!("{} - Install", self.ctx.config().app_name));

        let report = self.ctx.provisioner().provision(&mut *self.spawner, ui)?;
        report_install(ui, self.ctx.environment(), &report);

        let code = exit_code_for(&report.result);
        if code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}
