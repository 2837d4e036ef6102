//! Configuration schema definitions.
//!
//! This module contains the structs that map to the optional
//! `launcher.yml` file in the project root.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::shell::CommandSpec;

/// Default display name shown above the menu.
pub const DEFAULT_APP_NAME: &str = "Geforce Hybrid Capture";

/// Default environment root, relative to the project root.
pub const DEFAULT_ENVIRONMENT_PATH: &str = ".venv";

/// Root configuration structure for `launcher.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Isolated environment settings
    pub environment: EnvironmentConfig,

    /// Program that provisions the environment
    pub installer: CommandSpec,

    /// Main application, run inside the environment
    pub application: CommandSpec,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: EnvironmentConfig::default(),
            installer: default_installer(),
            application: default_application(),
        }
    }
}

/// Where the isolated environment lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Environment root (relative paths resolve against the project root)
    pub path: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENVIRONMENT_PATH),
        }
    }
}

/// The installer runs with the system interpreter, since the environment
/// does not exist yet when it starts.
fn default_installer() -> CommandSpec {
    let program = if cfg!(windows) { "python" } else { "python3" };
    CommandSpec::new(program, ["installer.py"])
}

fn default_application() -> CommandSpec {
    CommandSpec::new("python", ["launcher.py"])
}
