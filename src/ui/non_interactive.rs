//! Non-interactive UI for piped stdin/stdout.
//!
//! Menu selections are read line by line from the input stream, so a
//! script can drive the launcher with `printf '2\n1\nq\n' | capture-launcher`.
//! Acknowledgment prompts return immediately: waiting on a pipe would
//! consume the next selection.

use std::io::{BufRead, BufReader, Write};

use crate::error::Result;

use super::{strip_line_ending, MenuView, OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI reading from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(BufReader::new(std::io::stdin())))
    }

    /// Create a UI reading from an explicit source (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self { mode, input }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn show_command(&mut self, command: &str) {
        println!("Running: {}", command);
    }

    fn print_data(&mut self, data: &str) {
        println!("{}", data);
    }

    fn show_menu(&mut self, menu: &MenuView) {
        println!("\n{}", menu.title);
        if let Some(status) = &menu.status {
            println!("  {}", status);
        }
        println!();
        for option in &menu.options {
            println!("  {}. {}", option.key, option.label);
        }
        println!();
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}: ", prompt);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }

    fn acknowledge(&mut self, _prompt: &str) -> Result<()> {
        Ok(())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner { mode: self.mode })
    }

}

/// Spinner stand-in that prints the final line only.
struct NoopSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
