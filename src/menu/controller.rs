//! The menu loop.
//!
//! Each call to [`MenuController::step`] performs one transition:
//!
//! ```text
//! Menu ──"1"──> RunningLaunch ──> Menu
//! Menu ──"2"──> RunningInstall ──> Menu
//! Menu ──"q"/EOF──> Terminated
//! Menu ──other──> Menu
//! ```
//!
//! Collaborator failures are reported and the loop carries on. Only a
//! failure to read input ends it with an error.

use crate::context::LaunchContext;
use crate::environment::{Environment, ProvisionReport, RemovalOutcome};
use crate::error::{LauncherError, Result};
use crate::shell::{ProcessResult, Spawner};
use crate::ui::{MenuOption, MenuView, UserInterface};

use super::MenuSelection;

const PROMPT: &str = "Enter your choice";
const ACKNOWLEDGE_PROMPT: &str = "Press any key to return to the menu";

/// Where the loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Showing the menu and waiting for a selection.
    Menu,
    /// Wiping and reinstalling the environment.
    RunningInstall,
    /// Running the application.
    RunningLaunch,
    /// The user quit.
    Terminated,
}

/// Drives the menu until the user quits.
pub struct MenuController<'a> {
    ctx: &'a LaunchContext,
    spawner: &'a mut dyn Spawner,
}

impl<'a> MenuController<'a> {
    pub fn new(ctx: &'a LaunchContext, spawner: &'a mut dyn Spawner) -> Self {
        Self { ctx, spawner }
    }

    /// Loop until Quit or end of input.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut state = MenuState::Menu;
        while state != MenuState::Terminated {
            state = self.step(state, ui)?;
        }
        Ok(())
    }

    /// Perform one transition.
    pub fn step(&mut self, state: MenuState, ui: &mut dyn UserInterface) -> Result<MenuState> {
        tracing::debug!("Menu state: {:?}", state);
        match state {
            MenuState::Menu => self.prompt(ui),
            MenuState::RunningInstall => {
                self.install(ui);
                Ok(MenuState::Menu)
            }
            MenuState::RunningLaunch => {
                self.launch(ui);
                Ok(MenuState::Menu)
            }
            MenuState::Terminated => Ok(MenuState::Terminated),
        }
    }

    /// The menu as it should be rendered right now.
    pub fn view(&self) -> MenuView {
        MenuView {
            title: self.ctx.config().app_name.clone(),
            status: Some(format!("Environment: {}", self.ctx.probe().status())),
            options: vec![
                MenuOption::new("1", "Launch application"),
                MenuOption::new("2", "Install / reinstall environment"),
                MenuOption::new("Q", "Quit"),
            ],
        }
    }

    fn prompt(&mut self, ui: &mut dyn UserInterface) -> Result<MenuState> {
        ui.show_menu(&self.view());

        let Some(input) = ui.read_line(PROMPT)? else {
            tracing::debug!("End of input, quitting");
            return Ok(MenuState::Terminated);
        };

        match MenuSelection::from_input(&input) {
            MenuSelection::Launch => Ok(MenuState::RunningLaunch),
            MenuSelection::Install => Ok(MenuState::RunningInstall),
            MenuSelection::Quit => Ok(MenuState::Terminated),
            MenuSelection::Invalid => {
                ui.error(&format!(
                    "Invalid choice '{}'. Enter 1, 2 or Q.",
                    input.escape_debug()
                ));
                ui.acknowledge(ACKNOWLEDGE_PROMPT)?;
                Ok(MenuState::Menu)
            }
        }
    }

    fn install(&mut self, ui: &mut dyn UserInterface) {
        match self.ctx.provisioner().provision(&mut *self.spawner, ui) {
            Ok(report) => report_install(ui, self.ctx.environment(), &report),
            Err(e) => ui.error(&format!("Install failed: {}", e)),
        }
    }

    fn launch(&mut self, ui: &mut dyn UserInterface) {
        if !self.ctx.probe().exists() {
            report_missing(ui, self.ctx.environment());
            return;
        }

        match self.ctx.runner().run_launch(&mut *self.spawner, ui) {
            Ok(result) => report_launch(ui, &self.ctx.config().app_name, &result),
            Err(e) => ui.error(&format!("Launch failed: {}", e)),
        }
    }
}

/// Tell the user how an install went.
pub fn report_install(
    ui: &mut dyn UserInterface,
    environment: &Environment,
    report: &ProvisionReport,
) {
    if let RemovalOutcome::Failed { .. } = report.removal {
        ui.show_hint("Close any program using the environment and reinstall");
    }

    if report.result.success && report.ready {
        ui.success(&format!(
            "Environment installed at {}",
            environment.root().display()
        ));
    } else if !report.result.success {
        ui.warning(&format!("Installer exited with {}", report.result.describe()));
    } else {
        ui.warning(&format!(
            "Installer finished but {} was not created",
            environment.interpreter().display()
        ));
    }
}

/// Tell the user how the application exited.
pub fn report_launch(ui: &mut dyn UserInterface, app_name: &str, result: &ProcessResult) {
    if result.success {
        ui.success(&format!("{} closed", app_name));
    } else {
        ui.warning(&format!("{} exited with {}", app_name, result.describe()));
    }
}

/// Refuse a launch because nothing is installed.
pub fn report_missing(ui: &mut dyn UserInterface, environment: &Environment) {
    let missing = LauncherError::EnvironmentMissing {
        path: environment.root().to_path_buf(),
    };
    ui.error(&format!("{} (option 2)", missing));
}
