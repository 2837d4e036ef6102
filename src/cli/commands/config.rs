//! Config command implementation.
//!
//! The `capture-launcher config` command prints the configuration in
//! effect, defaults included.

use crate::cli::args::ConfigArgs;
use crate::config::project_config_path;
use crate::context::LaunchContext;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    ctx: &'a LaunchContext,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(ctx: &'a LaunchContext, args: ConfigArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&mut self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.config();

        if self.args.json {
            let json = serde_json::to_string_pretty(config).map_err(anyhow::Error::from)?;
            ui.print_data(&json);
        } else {
            let file = project_config_path(self.ctx.project_root());
            if file.exists() {
                ui.message(&format!("# {}", file.display()));
            } else {
                ui.message("# built-in defaults");
            }
            let yaml = serde_yaml::to_string(config).map_err(anyhow::Error::from)?;
            ui.print_data(&yaml);
        }

        Ok(CommandResult::success())
    }
}
