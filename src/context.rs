//! Shared state for every command.
//!
//! A [`LaunchContext`] is built once at start-up. The environment root is
//! fixed for the life of the process.

use std::path::{Path, PathBuf};

use crate::config::{load_config, LauncherConfig};
use crate::environment::{Environment, EnvironmentProbe, EnvironmentProvisioner};
use crate::error::Result;
use crate::runner::ProcessRunner;

/// Project root, loaded configuration and the environment handle.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    project_root: PathBuf,
    config: LauncherConfig,
    environment: Environment,
}

impl LaunchContext {
    /// Load configuration for `project_root` and build the context.
    pub fn load(project_root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let config = load_config(project_root, config_override)?;
        Ok(Self::from_config(project_root, config))
    }

    /// Build a context from an already loaded configuration.
    pub fn from_config(project_root: &Path, config: LauncherConfig) -> Self {
        let environment = Environment::new(project_root.join(&config.environment.path));
        tracing::debug!("Environment root: {}", environment.root().display());
        Self {
            project_root: project_root.to_path_buf(),
            config,
            environment,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn probe(&self) -> EnvironmentProbe<'_> {
        EnvironmentProbe::new(&self.environment)
    }

    /// Provisioner running the configured installer in the project root.
    pub fn provisioner(&self) -> EnvironmentProvisioner<'_> {
        EnvironmentProvisioner::new(
            &self.environment,
            &self.config.installer,
            &self.project_root,
        )
    }

    /// Runner for the configured application, started in the project root.
    pub fn runner(&self) -> ProcessRunner<'_> {
        ProcessRunner::new(
            &self.environment,
            &self.config.application,
            &self.project_root,
        )
    }
}
