//! Launcher configuration.
//!
//! Every name the launcher depends on (the engine base it looks for, the
//! marker file that proves an install is complete, the sentinel the game
//! prints, the installer URI) lives in [`LauncherConfig`]. The resolver,
//! supervisor and launcher receive it explicitly, so none of them hardcode
//! the Empires/Source SDK values.
//!
//! # Example
//!
//! ```
//! use empires_launcher::config::LauncherConfig;
//!
//! let config = LauncherConfig::default();
//! assert_eq!(config.display_name(), "Empires");
//! assert_eq!(config.marker_file, "hl2.exe");
//!
//! let custom = LauncherConfig::default()
//!     .with_target_name("my engine")
//!     .with_marker_file("engine.bin");
//! assert_eq!(custom.target_name, "my engine");
//! ```

use std::time::Duration;

/// Default game (and mod directory) name.
pub const DEFAULT_GAME_NAME: &str = "empires";

/// Directory name of the engine base inside a Steam library.
pub const DEFAULT_TARGET_NAME: &str = "source sdk base 2007";

/// Engine base name as shown to the user.
pub const DEFAULT_TARGET_DISPLAY_NAME: &str = "Source SDK Base 2007";

/// File that must exist inside the engine base directory.
pub const DEFAULT_MARKER_FILE: &str = "hl2.exe";

/// Printed by the game client once it has finished loading.
pub const DEFAULT_SENTINEL: &str = "{0C4BCE33-258D-4189-AE0D-B217820B7C2C}";

/// Steam URI that installs and runs Source SDK Base 2007.
pub const DEFAULT_INSTALLER_URI: &str = "steam://run/218";

/// Package cache folder appended to the Steam installation root.
pub const DEFAULT_PACKAGE_CACHE_DIR: &str = "steamapps";

/// Registry key holding the Steam installation root.
pub const DEFAULT_LOOKUP_KEY: &str = r"HKEY_CURRENT_USER\Software\Valve\Steam";

/// Registry value holding the Steam installation root.
pub const DEFAULT_LOOKUP_VALUE: &str = "SteamPath";

/// All names and knobs the launcher needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Lowercase game name, used to build the display title.
    pub game_name: String,
    /// Engine base directory name (compared case-insensitively).
    pub target_name: String,
    /// Engine base name used in messages.
    pub target_display_name: String,
    /// File that must exist inside the engine base directory.
    pub marker_file: String,
    /// Token the game prints once loaded.
    pub sentinel: String,
    /// URI handed to the OS to install the engine base.
    pub installer_uri: String,
    /// Mod directory name, relative to the launcher's working directory.
    pub mod_dir_name: String,
    /// Folder appended to the installation root before searching it.
    pub package_cache_dir: String,
    /// Key queried for the installation root.
    pub lookup_key: String,
    /// Value name queried under `lookup_key`.
    pub lookup_value: String,
    /// Upper bound on waiting for the sentinel. `None` waits forever.
    pub sentinel_timeout: Option<Duration>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            game_name: DEFAULT_GAME_NAME.to_string(),
            target_name: DEFAULT_TARGET_NAME.to_string(),
            target_display_name: DEFAULT_TARGET_DISPLAY_NAME.to_string(),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            installer_uri: DEFAULT_INSTALLER_URI.to_string(),
            mod_dir_name: DEFAULT_GAME_NAME.to_string(),
            package_cache_dir: DEFAULT_PACKAGE_CACHE_DIR.to_string(),
            lookup_key: DEFAULT_LOOKUP_KEY.to_string(),
            lookup_value: DEFAULT_LOOKUP_VALUE.to_string(),
            sentinel_timeout: None,
        }
    }
}

impl LauncherConfig {
    /// Override the game name.
    pub fn with_game_name(mut self, name: impl Into<String>) -> Self {
        self.game_name = name.into();
        self
    }

    /// Override the engine base directory name.
    pub fn with_target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = name.into();
        self
    }

    /// Override the engine base name shown in messages.
    pub fn with_target_display_name(mut self, name: impl Into<String>) -> Self {
        self.target_display_name = name.into();
        self
    }

    /// Override the marker file name.
    pub fn with_marker_file(mut self, name: impl Into<String>) -> Self {
        self.marker_file = name.into();
        self
    }

    /// Override the sentinel token.
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Override the installer URI.
    pub fn with_installer_uri(mut self, uri: impl Into<String>) -> Self {
        self.installer_uri = uri.into();
        self
    }

    /// Override the mod directory name.
    pub fn with_mod_dir_name(mut self, name: impl Into<String>) -> Self {
        self.mod_dir_name = name.into();
        self
    }

    /// Override the package cache folder name.
    pub fn with_package_cache_dir(mut self, name: impl Into<String>) -> Self {
        self.package_cache_dir = name.into();
        self
    }

    /// Bound the wait for the sentinel.
    pub fn with_sentinel_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.sentinel_timeout = timeout;
        self
    }

    /// Title-cased game name, e.g. `Empires`.
    pub fn display_name(&self) -> String {
        title_case(&self.game_name)
    }

    /// Prompt text shown when the engine base cannot be found.
    pub fn not_found_message(&self) -> String {
        format!(
            "Can't start {} because {} was not found.\n\n{}",
            self.display_name(),
            self.target_display_name,
            self.same_drive_notice()
        )
    }

    /// Question asked after [`not_found_message`](Self::not_found_message).
    pub fn install_question(&self) -> String {
        format!("Install and run {} now?", self.target_display_name)
    }

    /// Notice explaining that the engine base must share a drive with the game.
    pub fn same_drive_notice(&self) -> String {
        format!(
            "{target} must be installed on the same drive as {game}. If it's not, \
             remove {game} using Steam and install it again to the same drive as {target}.",
            target = self.target_display_name,
            game = self.display_name()
        )
    }

    /// Error text shown when the engine base executable fails to start.
    pub fn start_failure_message(&self) -> String {
        format!(
            "Can't start {} because there was a problem running the game.",
            self.display_name()
        )
    }

    /// Spinner text shown while the game loads.
    pub fn loading_message(&self) -> String {
        format!("Starting {}...", self.display_name())
    }
}

/// Uppercase the first letter of every whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_empires_values() {
        let config = LauncherConfig::default();
        assert_eq!(config.game_name, "empires");
        assert_eq!(config.target_name, "source sdk base 2007");
        assert_eq!(config.target_display_name, "Source SDK Base 2007");
        assert_eq!(config.marker_file, "hl2.exe");
        assert_eq!(config.sentinel, "{0C4BCE33-258D-4189-AE0D-B217820B7C2C}");
        assert_eq!(config.installer_uri, "steam://run/218");
        assert_eq!(config.mod_dir_name, "empires");
        assert_eq!(config.package_cache_dir, "steamapps");
        assert_eq!(config.lookup_value, "SteamPath");
    }

    #[test]
    fn default_waits_forever() {
        assert_eq!(LauncherConfig::default().sentinel_timeout, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = LauncherConfig::default()
            .with_game_name("fortress")
            .with_target_name("engine")
            .with_marker_file("run.sh")
            .with_sentinel("READY")
            .with_installer_uri("custom://install")
            .with_mod_dir_name("content")
            .with_package_cache_dir("apps")
            .with_sentinel_timeout(Some(Duration::from_secs(5)));

        assert_eq!(config.game_name, "fortress");
        assert_eq!(config.target_name, "engine");
        assert_eq!(config.marker_file, "run.sh");
        assert_eq!(config.sentinel, "READY");
        assert_eq!(config.installer_uri, "custom://install");
        assert_eq!(config.mod_dir_name, "content");
        assert_eq!(config.package_cache_dir, "apps");
        assert_eq!(config.sentinel_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("empires"), "Empires");
        assert_eq!(title_case("fort wars"), "Fort Wars");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn not_found_message_names_game_and_dependency() {
        let msg = LauncherConfig::default().not_found_message();
        assert!(msg.starts_with("Can't start Empires because Source SDK Base 2007 was not found."));
        assert!(msg.contains("same drive"));
    }

    #[test]
    fn messages_keep_engine_base_capitalization() {
        let config = LauncherConfig::default();
        assert_eq!(config.install_question(), "Install and run Source SDK Base 2007 now?");
        assert!(config
            .same_drive_notice()
            .starts_with("Source SDK Base 2007 must be installed on the same drive as Empires."));

        let custom = config.with_target_display_name("My Engine");
        assert_eq!(custom.install_question(), "Install and run My Engine now?");
    }

    #[test]
    fn start_failure_message_names_game() {
        assert_eq!(
            LauncherConfig::default().start_failure_message(),
            "Can't start Empires because there was a problem running the game."
        );
    }

    #[test]
    fn loading_message_names_game() {
        assert_eq!(LauncherConfig::default().loading_message(), "Starting Empires...");
    }
}
