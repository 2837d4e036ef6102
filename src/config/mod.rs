//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use capture_launcher::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("launcher.yml"), "environment:\n  path: env").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.environment.path, std::path::PathBuf::from("env"));
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config <path>` (or `CAPTURE_LAUNCHER_CONFIG`), which must exist
//! 2. `launcher.yml` in the project root
//! 3. Built-in defaults (`.venv`, `installer.py`, `launcher.py`)

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config, project_config_path, CONFIG_FILE_NAME};
pub use schema::{EnvironmentConfig, LauncherConfig, DEFAULT_APP_NAME, DEFAULT_ENVIRONMENT_PATH};
pub use validator::{validate, validate_config, ValidationError};
