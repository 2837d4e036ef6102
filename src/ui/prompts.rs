//! Interactive terminal prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::Write;

use crate::error::{LauncherError, Result};

/// Convert dialoguer errors to LauncherError.
fn map_dialoguer_err(e: dialoguer::Error) -> LauncherError {
    LauncherError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Read one line of free text. Empty input is allowed.
pub fn read_text(prompt: &str, term: &Term) -> Result<String> {
    Input::<String>::with_theme(&prompt_theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}

/// Show `prompt` and wait for any key.
pub fn wait_for_key(prompt: &str, term: &Term) -> Result<()> {
    let mut out = term.clone();
    write!(out, "{}", style(prompt).dim())?;
    out.flush()?;
    term.read_key()?;
    writeln!(out)?;
    Ok(())
}
