//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped stdin/stdout
//! - [`MockUI`] for tests
//!
//! Menu rendering is a view concern and lives behind
//! [`UserInterface::show_menu`]; the menu logic itself is in
//! [`crate::menu`].
//!
//! # Example
//!
//! ```
//! use capture_launcher::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_inputs(vec!["2"]);
//!
//! assert_eq!(ui.read_line("Enter your choice").unwrap(), Some("2".to_string()));
//! assert_eq!(ui.read_line("Enter your choice").unwrap(), None);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, is_ci, stdio_is_interactive, TerminalUI};
pub use theme::{should_use_colors, LauncherTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Echo the command line of a program about to run.
    ///
    /// Callers only invoke this in verbose mode.
    fn show_command(&mut self, command: &str);

    /// Write machine-readable output (JSON, YAML) to stdout.
    ///
    /// Never suppressed by the output mode.
    fn print_data(&mut self, data: &str);

    /// Render the menu. Always shown, whatever the output mode.
    fn show_menu(&mut self, menu: &MenuView);

    /// Read one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is
    /// stripped; nothing else is.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Block until the user acknowledges a message.
    ///
    /// Implementations without a keyboard return immediately so piped
    /// input is never swallowed.
    fn acknowledge(&mut self, prompt: &str) -> Result<()>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// What the menu looks like on one iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// Application name.
    pub title: String,
    /// Line under the title (environment status).
    pub status: Option<String>,
    /// Entries in display order.
    pub options: Vec<MenuOption>,
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// What the user types.
    pub key: String,
    /// Display label.
    pub label: String,
}

impl MenuOption {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Strip a trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
