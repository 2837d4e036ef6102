//! Menu input parsing.

/// What the user picked on one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    /// `1`
    Launch,
    /// `2`
    Install,
    /// `q` or `Q`
    Quit,
    /// Anything else.
    Invalid,
}

impl MenuSelection {
    /// Map a line of input (terminator already stripped) to a selection.
    ///
    /// Matching is exact and case-insensitive. Surrounding whitespace is
    /// not trimmed, so `" 1"` is invalid.
    pub fn from_input(input: &str) -> Self {
        match input.to_ascii_lowercase().as_str() {
            "1" => Self::Launch,
            "2" => Self::Install,
            "q" => Self::Quit,
            _ => Self::Invalid,
        }
    }
}
