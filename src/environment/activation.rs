//! Binding a child process to the environment.
//!
//! Mirrors what a venv `activate` script does, without a shell:
//! `VIRTUAL_ENV` points at the root, the environment's bin directory goes
//! first on `PATH`, and `PYTHONHOME` is dropped so a system-wide setting
//! cannot redirect the interpreter's standard library.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::Result;
use crate::shell::CommandOptions;

use super::Environment;

const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
const PATH: &str = "PATH";
const PYTHONHOME: &str = "PYTHONHOME";

/// Environment variable changes for a bound child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    vars: HashMap<String, OsString>,
    removed: Vec<String>,
}

impl Activation {
    /// Activation against the current process `PATH`.
    pub fn for_environment(environment: &Environment) -> Result<Self> {
        Self::with_inherited_path(environment, std::env::var_os(PATH))
    }

    /// Activation against an explicit inherited `PATH`.
    pub fn with_inherited_path(
        environment: &Environment,
        inherited_path: Option<OsString>,
    ) -> Result<Self> {
        let root = std::path::absolute(environment.root())?;
        let bin_dir = root.join(environment.layout().bin_dir());

        let mut entries = vec![bin_dir.clone()];
        if let Some(path) = inherited_path {
            entries.extend(std::env::split_paths(&path));
        }
        let path = std::env::join_paths(entries).map_err(|e| {
            anyhow::anyhow!("cannot add {} to PATH: {}", bin_dir.display(), e)
        })?;

        let mut vars = HashMap::new();
        vars.insert(VIRTUAL_ENV.to_string(), root.into_os_string());
        vars.insert(PATH.to_string(), path);

        Ok(Self {
            vars,
            removed: vec![PYTHONHOME.to_string()],
        })
    }

    /// Variables set in the child.
    pub fn vars(&self) -> &HashMap<String, OsString> {
        &self.vars
    }

    /// Variables removed from the child.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    /// Merge into command options.
    pub fn apply(&self, options: &mut CommandOptions) {
        options
            .env
            .extend(self.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        options.env_remove.extend(self.removed.iter().cloned());
    }
}
