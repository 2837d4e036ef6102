//! Configuration file discovery and loading.
//!
//! The launcher runs fine without any configuration file. When
//! `launcher.yml` exists in the project root it overrides the defaults;
//! an explicit `--config` path must exist.

use crate::config::schema::LauncherConfig;
use crate::config::validator::validate;
use crate::error::{LauncherError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-level configuration file.
pub const CONFIG_FILE_NAME: &str = "launcher.yml";

/// Path where the project configuration is looked up.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file and parse it into [`LauncherConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LauncherError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LauncherError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`LauncherConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override, then validate it.
///
/// If `config_override` is provided, that file must exist. Otherwise
/// `launcher.yml` in the project root is used when present, and the
/// built-in defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LauncherConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            let path = project_config_path(project_root);
            if path.is_file() {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                LauncherConfig::default()
            }
        }
    };

    validate(&config, project_root)?;
    Ok(config)
}
