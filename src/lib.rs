//! capture-launcher - provision and launch the Hybrid Capture environment.
//!
//! A small menu-driven launcher: it wipes and rebuilds an isolated Python
//! environment through an installer script, and starts the application
//! inside that environment.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`context`] - Project root, configuration and environment handle
//! - [`environment`] - Environment handle, probe, provisioning and activation
//! - [`error`] - Error types and result aliases
//! - [`menu`] - Menu selection parsing and the menu loop
//! - [`runner`] - Running the application inside the environment
//! - [`shell`] - Process spawning
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use capture_launcher::config::LauncherConfig;
//! use capture_launcher::context::LaunchContext;
//! use capture_launcher::menu::MenuController;
//! use capture_launcher::shell::RecordingSpawner;
//! use capture_launcher::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let ctx = LaunchContext::from_config(temp.path(), LauncherConfig::default());
//! let mut spawner = RecordingSpawner::new();
//! let mut ui = MockUI::new();
//! ui.queue_inputs(vec!["1", "q"]);
//!
//! MenuController::new(&ctx, &mut spawner).run(&mut ui).unwrap();
//!
//! // Nothing installed yet, so nothing was started.
//! assert!(spawner.invocations().is_empty());
//! assert!(ui.has_error("Run install first"));
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod menu;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};
