//! Recording spawner for testing.
//!
//! `RecordingSpawner` implements [`Spawner`] without starting any process.
//! It records every invocation, returns queued results, and can run a
//! hook to simulate what the program would have done on disk.
//!
//! # Example
//!
//! ```
//! use capture_launcher::shell::{CommandOptions, CommandSpec, ProcessResult, RecordingSpawner, Spawner};
//!
//! let mut spawner = RecordingSpawner::new();
//! spawner.queue_result(ProcessResult::failure(Some(1)));
//!
//! let spec = CommandSpec::new("python3", ["installer.py"]);
//! let result = spawner.run(&spec, &CommandOptions::default()).unwrap();
//!
//! assert!(!result.success);
//! assert_eq!(spawner.invocations().len(), 1);
//! ```

use std::collections::VecDeque;

use crate::error::{LauncherError, Result};

use super::command::{CommandOptions, CommandSpec, ProcessResult, Spawner};

/// Side effect run in place of the real program.
pub type SpawnHook = Box<dyn FnMut(&CommandSpec, &CommandOptions)>;

/// One recorded call to [`Spawner::run`].
#[derive(Debug, Clone)]
pub struct Invocation {
    /// What would have been executed.
    pub spec: CommandSpec,
    /// The options it would have run with.
    pub options: CommandOptions,
}

/// Spawner that records invocations instead of starting processes.
///
/// Results are popped from a queue; once it is empty every call succeeds.
#[derive(Default)]
pub struct RecordingSpawner {
    invocations: Vec<Invocation>,
    results: VecDeque<Result<ProcessResult>>,
    hook: Option<SpawnHook>,
}

impl RecordingSpawner {
    /// Create a spawner whose calls all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for the next call.
    pub fn queue_result(&mut self, result: ProcessResult) {
        self.results.push_back(Ok(result));
    }

    /// Make the next call fail as if the program did not exist.
    pub fn queue_spawn_failure(&mut self, message: &str) {
        self.results.push_back(Err(LauncherError::SpawnFailed {
            command: String::new(),
            message: message.to_string(),
        }));
    }

    /// Run `hook` on every call, before the result is returned.
    pub fn on_run(&mut self, hook: impl FnMut(&CommandSpec, &CommandOptions) + 'static) {
        self.hook = Some(Box::new(hook));
    }

    /// All recorded calls, in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Number of calls whose program or arguments contain `needle`.
    pub fn count_matching(&self, needle: &str) -> usize {
        self.invocations
            .iter()
            .filter(|inv| inv.spec.to_string().contains(needle))
            .count()
    }
}

impl std::fmt::Debug for RecordingSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSpawner")
            .field("invocations", &self.invocations)
            .field("queued", &self.results.len())
            .finish()
    }
}

impl Spawner for RecordingSpawner {
    fn run(&mut self, spec: &CommandSpec, options: &CommandOptions) -> Result<ProcessResult> {
        self.invocations.push(Invocation {
            spec: spec.clone(),
            options: options.clone(),
        });

        let result = self
            .results
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessResult::success()));

        // A program that never started has no side effects.
        if result.is_ok() {
            if let Some(hook) = self.hook.as_mut() {
                hook(spec, options);
            }
        }

        match result {
            Err(LauncherError::SpawnFailed { message, .. }) => Err(LauncherError::SpawnFailed {
                command: spec.to_string(),
                message,
            }),
            other => other,
        }
    }
}
