//! Menu command implementation.
//!
//! `capture-launcher` with no subcommand (or `capture-launcher menu`)
//! runs the interactive loop until the user quits.

use crate::context::LaunchContext;
use crate::error::Result;
use crate::menu::MenuController;
use crate::shell::Spawner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The menu command implementation.
pub struct MenuCommand<'a> {
    ctx: &'a LaunchContext,
    spawner: &'a mut dyn Spawner,
}

impl<'a> MenuCommand<'a> {
    /// Create a new menu command.
    pub fn new(ctx: &'a LaunchContext, spawner: &'a mut dyn Spawner) -> Self {
        Self { ctx, spawner }
    }
}

impl Command for MenuCommand<'_> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        MenuController::new(self.ctx, &mut *self.spawner).run(ui)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use crate::shell::RecordingSpawner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn quit_exits_zero() {
        let temp = TempDir::new().unwrap();
        let ctx = LaunchContext::from_config(temp.path(), LauncherConfig::default());
        let mut spawner = RecordingSpawner::new();
        let mut ui = MockUI::new();
        ui.queue_inputs(vec!["x", "q"]);

        let result = MenuCommand::new(&ctx, &mut spawner).execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_error("Invalid choice 'x'"));
    }
}
