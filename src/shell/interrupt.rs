//! Ctrl-C handling around delegated programs.
//!
//! The terminal delivers SIGINT to the whole foreground process group, so
//! pressing Ctrl-C inside the application also reaches the launcher. While a
//! program runs (and for a short grace period after it is reaped) the
//! launcher ignores the interrupt and lets the child decide what to do with
//! it. At the menu, Ctrl-C still ends the launcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::error::Result;

/// Exit code used when Ctrl-C ends the launcher at the menu.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// How long after a child exits its interrupt is still attributed to it.
///
/// The handler runs on its own thread and may wake after the child was
/// already reaped.
const GRACE_PERIOD: Duration = Duration::from_secs(1);

static RUNNING_CHILDREN: AtomicUsize = AtomicUsize::new(0);
static LAST_CHILD_EXIT: Mutex<Option<Instant>> = Mutex::new(None);

/// Install the process-wide Ctrl-C handler. Call once, from `main`.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        if child_owns_interrupt() {
            tracing::debug!("Ctrl-C delivered to the running program, returning to the menu");
        } else {
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    })
    .context("Failed to set Ctrl+C handler")?;
    Ok(())
}

/// Marks a delegated program as running until dropped.
#[derive(Debug)]
pub struct ChildGuard {
    _private: (),
}

impl ChildGuard {
    /// Record that a child is about to start.
    pub fn enter() -> Self {
        RUNNING_CHILDREN.fetch_add(1, Ordering::SeqCst);
        Self { _private: () }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Ok(mut last) = LAST_CHILD_EXIT.lock() {
            *last = Some(Instant::now());
        }
        RUNNING_CHILDREN.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Whether an interrupt arriving now belongs to a delegated program.
pub fn child_owns_interrupt() -> bool {
    let running = RUNNING_CHILDREN.load(Ordering::SeqCst);
    let last_exit = LAST_CHILD_EXIT.lock().ok().and_then(|last| *last);
    interrupt_ignored(running, last_exit, Instant::now())
}

fn interrupt_ignored(running: usize, last_exit: Option<Instant>, now: Instant) -> bool {
    if running > 0 {
        return true;
    }
    match last_exit {
        Some(exited) => now.saturating_duration_since(exited) < GRACE_PERIOD,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_child_owns_interrupt() {
        assert!(interrupt_ignored(1, None, Instant::now()));
    }

    #[test]
    fn idle_launcher_handles_interrupt() {
        assert!(!interrupt_ignored(0, None, Instant::now()));
    }

    #[test]
    fn recently_exited_child_still_owns_interrupt() {
        let exited = Instant::now();
        assert!(interrupt_ignored(0, Some(exited), exited + Duration::from_millis(200)));
        assert!(!interrupt_ignored(0, Some(exited), exited + GRACE_PERIOD));
    }

    #[test]
    fn guard_marks_child_running() {
        let guard = ChildGuard::enter();
        assert!(child_owns_interrupt());
        drop(guard);
        // Within the grace period after the guard is released.
        assert!(child_owns_interrupt());
    }
}
