//! Environment provisioning.
//!
//! Every install starts from an empty root: whatever is at the
//! environment path is removed first, then the installer runs. A removal
//! failure is reported as [`RemovalOutcome::Failed`] and the installer
//! still runs, so a stale partial environment may survive a failed wipe.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::shell::{CommandOptions, CommandSpec, ProcessResult, Spawner};
use crate::ui::UserInterface;

use super::{Environment, EnvironmentProbe};

/// Removes whatever is at a path.
pub type RemoveFn = fn(&Path) -> io::Result<()>;

/// What happened to the previous environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Nothing was there; no deletion attempted.
    NotPresent,
    /// The old root was deleted.
    Removed,
    /// Deletion failed; the installer ran anyway.
    Failed { message: String },
}

/// Result of one provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    /// What the wipe did.
    pub removal: RemovalOutcome,
    /// The installer's exit status.
    pub result: ProcessResult,
    /// Whether the probe saw the interpreter after the installer exited.
    pub ready: bool,
}

/// Destroys and rebuilds the environment through the installer.
pub struct EnvironmentProvisioner<'a> {
    environment: &'a Environment,
    installer: &'a CommandSpec,
    working_dir: &'a Path,
    remove: RemoveFn,
}

impl<'a> EnvironmentProvisioner<'a> {
    pub fn new(
        environment: &'a Environment,
        installer: &'a CommandSpec,
        working_dir: &'a Path,
    ) -> Self {
        Self {
            environment,
            installer,
            working_dir,
            remove: remove_path,
        }
    }

    /// Replace the removal function (for testing failures).
    pub fn with_remover(mut self, remove: RemoveFn) -> Self {
        self.remove = remove;
        self
    }

    /// Wipe the environment, run the installer, and probe the result.
    ///
    /// Returns `Err` only if the installer could not be started.
    pub fn provision(
        &self,
        spawner: &mut dyn Spawner,
        ui: &mut dyn UserInterface,
    ) -> Result<ProvisionReport> {
        let removal = self.remove_existing(ui);

        if ui.output_mode().shows_commands() {
            ui.show_command(&self.installer.to_string());
        }

        let options = CommandOptions {
            cwd: Some(self.working_dir.to_path_buf()),
            ..Default::default()
        };
        let result = spawner.run(self.installer, &options)?;
        let ready = EnvironmentProbe::new(self.environment).exists();

        tracing::info!(
            "Installer finished with {} (environment ready: {})",
            result.describe(),
            ready
        );

        Ok(ProvisionReport {
            removal,
            result,
            ready,
        })
    }

    /// Delete the root if anything is there. Never fails.
    pub fn remove_existing(&self, ui: &mut dyn UserInterface) -> RemovalOutcome {
        let root = self.environment.root();
        if !self.environment.is_present() {
            tracing::debug!("No environment at {}, nothing to remove", root.display());
            return RemovalOutcome::NotPresent;
        }

        let mut spinner = ui.start_spinner(&format!(
            "Removing existing environment at {}",
            root.display()
        ));

        match (self.remove)(root) {
            Ok(()) => {
                tracing::debug!("Removed {}", root.display());
                spinner.finish_success(&format!("Removed {}", root.display()));
                RemovalOutcome::Removed
            }
            Err(e) => {
                tracing::warn!("Failed to remove {}: {}", root.display(), e);
                spinner.finish_error(&format!("Could not remove {}", root.display()));
                ui.warning(&format!(
                    "Could not fully remove {}: {}. Continuing with install; stale files may remain.",
                    root.display(),
                    e
                ));
                RemovalOutcome::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Remove a directory tree, or a single file or symlink.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
