//! Delegated program execution.
//!
//! Every subprocess the launcher starts (installer, main application) goes
//! through a [`Spawner`]. The production [`SystemSpawner`] runs the program
//! in the foreground with inherited stdio and blocks until it exits; tests
//! substitute a [`RecordingSpawner`](super::RecordingSpawner).

use crate::error::{LauncherError, Result};
use crate::shell::interrupt::ChildGuard;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,

    /// Arguments passed verbatim (no shell interpretation).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a spec from a program and its arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Same arguments, different program.
    pub fn with_program(&self, program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: self.args.clone(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(part: &str) -> String {
    if part.is_empty() || part.contains(char::is_whitespace) {
        format!("\"{}\"", part)
    } else {
        part.to_string()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with the inherited environment).
    pub env: HashMap<String, OsString>,

    /// Variables removed from the inherited environment.
    pub env_remove: Vec<String>,
}

/// Exit status of a delegated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl ProcessResult {
    /// A successful exit.
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            success: true,
        }
    }

    /// A failed exit with the given code.
    pub fn failure(exit_code: Option<i32>) -> Self {
        Self {
            exit_code,
            success: false,
        }
    }

    /// Build from an exit code, treating 0 as success.
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Self::success()
        } else {
            Self::failure(Some(code))
        }
    }

    /// Build from a finished process.
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            success: status.success(),
        }
    }

    /// Human-readable exit description ("exit code 3", "terminated by signal").
    pub fn describe(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Starts a delegated program and waits for it.
pub trait Spawner {
    /// Run the program to completion.
    ///
    /// Returns `Err(SpawnFailed)` only when the program could not be
    /// started; a non-zero exit is an `Ok` result.
    fn run(&mut self, spec: &CommandSpec, options: &CommandOptions) -> Result<ProcessResult>;
}

/// Spawns real processes in the foreground with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    /// Create a new system spawner.
    pub fn new() -> Self {
        Self
    }
}

impl Spawner for SystemSpawner {
    fn run(&mut self, spec: &CommandSpec, options: &CommandOptions) -> Result<ProcessResult> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        for key in &options.env_remove {
            cmd.env_remove(key);
        }

        for (key, value) in &options.env {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!("Spawning: {}", spec);

        let _running = ChildGuard::enter();
        let status = cmd.status().map_err(|e| LauncherError::SpawnFailed {
            command: spec.to_string(),
            message: e.to_string(),
        })?;

        let result = ProcessResult::from_status(status);
        tracing::debug!("'{}' finished with {}", spec, result.describe());
        Ok(result)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Find `tool` in one of `dirs`.
///
/// On Windows `tool.exe` is tried as well. Returns the first candidate
/// that exists and is executable.
pub fn resolve_tool_path(tool: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        let mut candidates = vec![dir.join(tool)];
        if cfg!(windows) && Path::new(tool).extension().is_none() {
            candidates.push(dir.join(format!("{}.exe", tool)));
        }

        if let Some(found) = candidates
            .into_iter()
            .find(|c| c.is_file() && is_executable(c))
        {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn spec_display_joins_args() {
        let spec = CommandSpec::new("python3", ["installer.py", "--yes"]);
        assert_eq!(spec.to_string(), "python3 installer.py --yes");
    }

    #[test]
    fn spec_display_quotes_whitespace() {
        let spec = CommandSpec::new("C:\\Program Files\\Python\\python.exe", ["launcher.py"]);
        assert_eq!(
            spec.to_string(),
            "\"C:\\Program Files\\Python\\python.exe\" launcher.py"
        );
    }

    #[test]
    fn with_program_keeps_args() {
        let spec = CommandSpec::new("python", ["launcher.py"]);
        let resolved = spec.with_program(".venv/bin/python");
        assert_eq!(resolved.program, ".venv/bin/python");
        assert_eq!(resolved.args, spec.args);
    }

    #[test]
    fn process_result_from_code() {
        assert_eq!(ProcessResult::from_code(0), ProcessResult::success());
        let failed = ProcessResult::from_code(3);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(3));
    }

    #[test]
    fn describe_signal_termination() {
        assert_eq!(ProcessResult::failure(None).describe(), "terminated by signal");
        assert_eq!(ProcessResult::failure(Some(2)).describe(), "exit code 2");
    }

    #[cfg(unix)]
    #[test]
    fn system_spawner_reports_exit_codes() {
        let mut spawner = SystemSpawner::new();
        let ok = spawner
            .run(&CommandSpec::new("sh", ["-c", "exit 0"]), &CommandOptions::default())
            .unwrap();
        assert!(ok.success);

        let failed = spawner
            .run(&CommandSpec::new("sh", ["-c", "exit 7"]), &CommandOptions::default())
            .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(7));
    }

    #[cfg(unix)]
    #[test]
    fn system_spawner_applies_env_and_cwd() {
        let temp = TempDir::new().unwrap();
        let mut options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        options
            .env
            .insert("LAUNCHER_TEST_VAR".to_string(), OsString::from("bound"));

        let spec = CommandSpec::new("sh", ["-c", "echo \"$LAUNCHER_TEST_VAR\" > out.txt"]);
        let result = SystemSpawner::new().run(&spec, &options).unwrap();

        assert!(result.success);
        let written = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
        assert_eq!(written.trim(), "bound");
    }

    #[cfg(unix)]
    #[test]
    fn system_spawner_removes_env() {
        let temp = TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            env_remove: vec!["HOME".to_string()],
            ..Default::default()
        };

        let spec = CommandSpec::new("sh", ["-c", "test -z \"$HOME\""]);
        let result = SystemSpawner::new().run(&spec, &options).unwrap();
        assert!(result.success);
    }

    #[test]
    fn system_spawner_missing_program_is_spawn_failure() {
        let spec = CommandSpec::new("definitely-not-a-real-program-4c1f", Vec::<String>::new());
        let err = SystemSpawner::new()
            .run(&spec, &CommandOptions::default())
            .unwrap_err();
        assert!(matches!(err, LauncherError::SpawnFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_finds_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("python");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = resolve_tool_path("python", &[temp.path().to_path_buf()]);
        assert_eq!(found, Some(tool));
    }

    #[test]
    fn resolve_tool_path_misses_absent_tool() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_tool_path("python", &[temp.path().to_path_buf()]), None);
    }
}
