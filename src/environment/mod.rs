//! The isolated runtime environment and its lifecycle.
//!
//! The environment root is the only state the launcher persists. It is
//! handled through an [`Environment`] handle rather than a raw path:
//!
//! - [`probe`] reads it (is a usable interpreter there?)
//! - [`provisioner`] replaces it (wipe, then run the installer)
//! - [`activation`] binds a child process to it
//!
//! # Example
//!
//! ```
//! use capture_launcher::environment::{Environment, EnvironmentProbe, EnvironmentStatus};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let env = Environment::new(temp.path().join(".venv"));
//!
//! let probe = EnvironmentProbe::new(&env);
//! assert!(!probe.exists());
//! assert_eq!(probe.status(), EnvironmentStatus::Absent);
//! ```

pub mod activation;
pub mod probe;
pub mod provisioner;

pub use activation::Activation;
pub use probe::{EnvironmentProbe, EnvironmentStatus};
pub use provisioner::{EnvironmentProvisioner, ProvisionReport, RemovalOutcome};

use std::path::{Path, PathBuf};

/// Directory layout of an interpreter environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterLayout {
    /// `bin/python`
    Posix,
    /// `Scripts\python.exe`
    Windows,
}

impl InterpreterLayout {
    /// Layout used by environments created on this platform.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Directory holding the interpreter and console scripts.
    pub fn bin_dir(&self) -> &'static str {
        match self {
            Self::Posix => "bin",
            Self::Windows => "Scripts",
        }
    }

    /// File name of the interpreter inside [`bin_dir`](Self::bin_dir).
    pub fn interpreter(&self) -> &'static str {
        match self {
            Self::Posix => "python",
            Self::Windows => "python.exe",
        }
    }
}

/// Handle to the environment root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    root: PathBuf,
    layout: InterpreterLayout,
}

impl Environment {
    /// Environment at `root` with the native layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, InterpreterLayout::native())
    }

    /// Environment at `root` with an explicit layout.
    pub fn with_layout(root: impl Into<PathBuf>, layout: InterpreterLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// The environment root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> InterpreterLayout {
        self.layout
    }

    /// Directory that gets prepended to `PATH` when bound.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(self.layout.bin_dir())
    }

    /// The interpreter whose presence marks the environment usable.
    pub fn interpreter(&self) -> PathBuf {
        self.bin_dir().join(self.layout.interpreter())
    }

    /// Whether anything exists at the root, usable or not.
    ///
    /// Does not follow a symlinked root.
    pub fn is_present(&self) -> bool {
        self.root.symlink_metadata().is_ok()
    }
}
