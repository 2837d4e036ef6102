//! Configuration validation rules.
//!
//! The environment root is deleted recursively on every install, so its
//! path gets the strictest checks:
//! - Must not be empty
//! - Must not climb out of the project with `..`
//! - Must not be the project root or one of its ancestors
//! - Must resolve inside the project, even when written as an absolute path
//!
//! Collaborator programs must be non-empty.

use std::path::{Component, Path};

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted key of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// All problems are collected rather than stopping at the first one.
pub fn validate_config(config: &LauncherConfig, project_root: &Path) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_environment_path(config, project_root));

    for (field, spec) in [
        ("installer.program", &config.installer),
        ("application.program", &config.application),
    ] {
        if spec.program.trim().is_empty() {
            errors.push(ValidationError {
                field: field.to_string(),
                message: format!("'{}' must not be empty", field),
            });
        }
    }

    errors
}

/// Validate and convert the first error into a [`LauncherError`].
pub fn validate(config: &LauncherConfig, project_root: &Path) -> Result<()> {
    let errors = validate_config(config, project_root);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(LauncherError::ConfigValidationError { message })
}

fn validate_environment_path(config: &LauncherConfig, project_root: &Path) -> Vec<ValidationError> {
    let path = &config.environment.path;
    let field = "environment.path".to_string();

    if path.as_os_str().is_empty() {
        return vec![ValidationError {
            field,
            message: "'environment.path' must not be empty".to_string(),
        }];
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return vec![ValidationError {
            field,
            message: format!(
                "'environment.path' ({}) must not contain '..'",
                path.display()
            ),
        }];
    }

    let resolved = normalize(&project_root.join(path));
    let root = normalize(project_root);
    if root.starts_with(&resolved) {
        return vec![ValidationError {
            field,
            message: format!(
                "'environment.path' ({}) would delete the project directory on install",
                path.display()
            ),
        }];
    }

    if !resolved.starts_with(&root) {
        return vec![ValidationError {
            field,
            message: format!(
                "'environment.path' ({}) must stay inside the project directory",
                path.display()
            ),
        }];
    }

    Vec::new()
}

/// Drop `.` components so `./.venv` and `.venv` compare equal.
fn normalize(path: &Path) -> std::path::PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
