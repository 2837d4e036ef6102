//! Interactive terminal UI.

use console::Term;
use std::io::{ErrorKind, IsTerminal, Write};

use crate::error::{LauncherError, Result};

use super::prompts::{read_text, wait_for_key};
use super::{
    should_use_colors, LauncherTheme, MenuView, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: LauncherTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.term, "{}", self.theme.format_command(command)).ok();
    }

    fn print_data(&mut self, data: &str) {
        writeln!(self.term, "{}", data).ok();
    }

    fn show_menu(&mut self, menu: &MenuView) {
        writeln!(self.term, "\n{}", self.theme.format_header(&menu.title)).ok();
        if let Some(status) = &menu.status {
            writeln!(self.term, "  {}", self.theme.dim.apply_to(status)).ok();
        }
        writeln!(self.term).ok();
        for option in &menu.options {
            writeln!(
                self.term,
                "{}",
                self.theme.format_menu_option(&option.key, &option.label)
            )
            .ok();
        }
        writeln!(self.term).ok();
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match read_text(prompt, &self.term) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-D
            Err(LauncherError::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn acknowledge(&mut self, prompt: &str) -> Result<()> {
        wait_for_key(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

}

/// Whether both stdin and stdout are attached to a terminal.
pub fn stdio_is_interactive() -> bool {
    std::io::stdin().is_terminal() && Term::stdout().is_term()
}

/// Check if running under a CI system, where nobody can press a key.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && stdio_is_interactive() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
