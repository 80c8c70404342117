//! Non-interactive UI for runs without a terminal.

use std::collections::HashMap;

use crate::error::Result;

use super::{parse_bool_answer, Prompt, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "EMPIRES_LAUNCHER_PROMPT_";

/// UI implementation used when no terminal is attached.
///
/// Prompts are answered from `EMPIRES_LAUNCHER_PROMPT_<KEY>` if set and
/// otherwise take their default.
pub struct NonInteractiveUI {
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self { env_overrides }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            env_overrides: overrides,
        }
    }
}

impl Default for NonInteractiveUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n=== {} ===\n", title);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .and_then(|value| parse_bool_answer(value))
            .unwrap_or(prompt.default);

        println!("{} [{}]", prompt.question, if answer { "yes" } else { "no" });
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(PlainSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner replacement that prints only the final status line.
struct PlainSpinner;

impl SpinnerHandle for PlainSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_warning(&mut self, msg: &str) {
        println!("⚠ {}", msg);
    }
}
