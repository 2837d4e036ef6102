//! Environment probe.
//!
//! Answers one question: does the environment contain its interpreter?
//! Nothing else is validated (installed packages, versions, pip). The
//! check is a single `stat` and is never cached, so every menu iteration
//! sees the current state of the disk.

use serde::Serialize;

use super::Environment;

/// Coarse state of the environment root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentStatus {
    /// Nothing at the root.
    Absent,
    /// The root exists but the interpreter is missing.
    Incomplete,
    /// The interpreter is present.
    Ready,
}

impl EnvironmentStatus {
    /// Short label for menus and status output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "not installed",
            Self::Incomplete => "incomplete",
            Self::Ready => "ready",
        }
    }
}

impl std::fmt::Display for EnvironmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Checks an [`Environment`] for its interpreter.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentProbe<'a> {
    environment: &'a Environment,
}

impl<'a> EnvironmentProbe<'a> {
    pub fn new(environment: &'a Environment) -> Self {
        Self { environment }
    }

    /// True iff the interpreter file exists inside the root.
    pub fn exists(&self) -> bool {
        let marker = self.environment.interpreter();
        let found = marker.is_file();
        tracing::debug!("Probe {}: {}", marker.display(), found);
        found
    }

    /// Distinguish an absent root from one missing its interpreter.
    pub fn status(&self) -> EnvironmentStatus {
        if self.exists() {
            EnvironmentStatus::Ready
        } else if self.environment.is_present() {
            EnvironmentStatus::Incomplete
        } else {
            EnvironmentStatus::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::InterpreterLayout;
    use std::fs;
    use tempfile::TempDir;

    fn env_in(temp: &TempDir) -> Environment {
        Environment::with_layout(temp.path().join(".venv"), InterpreterLayout::Posix)
    }

    #[test]
    fn absent_root() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        let probe = EnvironmentProbe::new(&env);

        assert!(!probe.exists());
        assert_eq!(probe.status(), EnvironmentStatus::Absent);
    }

    #[test]
    fn root_without_interpreter_is_incomplete() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        fs::create_dir_all(env.bin_dir()).unwrap();
        fs::write(env.bin_dir().join("pip"), "").unwrap();

        let probe = EnvironmentProbe::new(&env);
        assert!(!probe.exists());
        assert_eq!(probe.status(), EnvironmentStatus::Incomplete);
    }

    #[test]
    fn interpreter_present_is_ready() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        fs::create_dir_all(env.bin_dir()).unwrap();
        fs::write(env.interpreter(), "").unwrap();

        let probe = EnvironmentProbe::new(&env);
        assert!(probe.exists());
        assert_eq!(probe.status(), EnvironmentStatus::Ready);
    }

    #[test]
    fn interpreter_directory_does_not_count() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        fs::create_dir_all(env.interpreter()).unwrap();

        assert!(!EnvironmentProbe::new(&env).exists());
    }

    #[test]
    fn probe_is_not_cached() {
        let temp = TempDir::new().unwrap();
        let env = env_in(&temp);
        let probe = EnvironmentProbe::new(&env);
        assert!(!probe.exists());

        fs::create_dir_all(env.bin_dir()).unwrap();
        fs::write(env.interpreter(), "").unwrap();
        assert!(probe.exists());

        fs::remove_dir_all(env.root()).unwrap();
        assert!(!probe.exists());
    }

    #[test]
    fn status_labels() {
        assert_eq!(EnvironmentStatus::Ready.to_string(), "ready");
        assert_eq!(EnvironmentStatus::Absent.label(), "not installed");
        assert_eq!(
            serde_json::to_string(&EnvironmentStatus::Incomplete).unwrap(),
            "\"incomplete\""
        );
    }
}
