//! Loading spinner shown while the game starts.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::LauncherTheme;
use super::SpinnerHandle;

/// A spinner standing in for a splash screen while the game loads.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: LauncherTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: LauncherTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    fn finish_with(&mut self, formatted: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(formatted);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let formatted = self.theme.format_success(msg);
        self.finish_with(formatted);
    }

    fn finish_warning(&mut self, msg: &str) {
        let formatted = self.theme.format_warning(msg);
        self.finish_with(formatted);
    }
}
