//! User-facing presentation.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] when no terminal is attached
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use empires_launcher::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install", true);
//!
//! let answer = ui.confirm(&Prompt::confirm("install", "Install now?", false)).unwrap();
//! assert!(answer);
//! assert_eq!(ui.prompts_shown(), ["install"]);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::NonInteractiveUI;
pub use prompts::prompt_confirm;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LauncherTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// Every call blocks until the user has seen (and for prompts, answered) it.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as ended early.
    fn finish_warning(&mut self, msg: &str);
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test lookups).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter or nobody can answer.
    pub default: bool,
}

impl Prompt {
    /// Create a confirmation prompt.
    pub fn confirm(key: impl Into<String>, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default,
        }
    }
}

/// Interpret a textual yes/no answer.
pub(crate) fn parse_bool_answer(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_confirm_creation() {
        let prompt = Prompt::confirm("install", "Install?", true);
        assert_eq!(prompt.key, "install");
        assert_eq!(prompt.question, "Install?");
        assert!(prompt.default);
    }

    #[test]
    fn parse_bool_answer_accepts_common_forms() {
        assert_eq!(parse_bool_answer("yes"), Some(true));
        assert_eq!(parse_bool_answer(" Y "), Some(true));
        assert_eq!(parse_bool_answer("1"), Some(true));
        assert_eq!(parse_bool_answer("no"), Some(false));
        assert_eq!(parse_bool_answer("FALSE"), Some(false));
        assert_eq!(parse_bool_answer("maybe"), None);
    }
}
