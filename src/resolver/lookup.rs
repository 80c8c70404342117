//! Installation root lookup.
//!
//! On Windows the Steam client records its install location in the registry
//! (`HKCU\Software\Valve\Steam`, value `SteamPath`). Other platforms have no
//! registry, so the well-known Steam roots under the home directory stand in
//! for it.

use std::path::PathBuf;

#[cfg(windows)]
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::LauncherConfig;

/// A service that knows where the package manager (Steam) is installed.
pub trait InstallationLookup {
    /// The installation root, or `None` when it is unknown.
    fn installation_root(&self) -> Option<PathBuf>;
}

/// Looks up the Steam installation root.
#[derive(Debug, Clone)]
pub struct SteamRegistryLookup {
    key: String,
    value: String,
}

impl SteamRegistryLookup {
    /// Create a lookup for an explicit registry key and value name.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a lookup from the configured key and value name.
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(&config.lookup_key, &config.lookup_value)
    }

    #[cfg(windows)]
    fn query(&self) -> Option<PathBuf> {
        let output = Command::new("reg")
            .args(["query", &self.key, "/v", &self.value])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            debug!("Registry value {}\\{} not present", self.key, self.value);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_reg_query_output(&stdout, &self.value).map(PathBuf::from)
    }

    #[cfg(not(windows))]
    fn query(&self) -> Option<PathBuf> {
        debug!(
            "No registry on this platform; probing well-known roots instead of {}\\{}",
            self.key, self.value
        );
        let home = dirs::home_dir()?;
        well_known_roots()
            .iter()
            .map(|relative| home.join(relative))
            .find(|p| p.is_dir())
    }
}

impl InstallationLookup for SteamRegistryLookup {
    fn installation_root(&self) -> Option<PathBuf> {
        let root = self.query();
        match &root {
            Some(path) => debug!("Installation root: {}", path.display()),
            None => debug!("Installation root unknown"),
        }
        root
    }
}

/// Steam roots relative to the home directory, most common first.
#[cfg_attr(windows, allow(dead_code))]
fn well_known_roots() -> &'static [&'static str] {
    &[
        ".steam/steam",
        ".local/share/Steam",
        ".var/app/com.valvesoftware.Steam/.steam/steam",
        ".var/app/com.valvesoftware.Steam/data/Steam",
        "snap/steam/common/.steam/steam",
    ]
}

/// Extract a `REG_SZ` value from `reg query` output.
///
/// The relevant line looks like `    SteamPath    REG_SZ    c:/program files (x86)/steam`.
pub fn parse_reg_query_output(output: &str, value_name: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let trimmed = line.trim();
        let rest = trimmed.strip_prefix(value_name)?;
        let rest = rest.trim_start();
        let data = rest
            .strip_prefix("REG_EXPAND_SZ")
            .or_else(|| rest.strip_prefix("REG_SZ"))?;
        let data = data.trim();
        if data.is_empty() {
            None
        } else {
            Some(data.to_string())
        }
    })
}

/// A lookup that always answers with the same value.
#[derive(Debug, Clone, Default)]
pub struct FixedLookup {
    root: Option<PathBuf>,
}

impl FixedLookup {
    /// A lookup that returns `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// A lookup whose key is absent.
    pub fn absent() -> Self {
        Self { root: None }
    }
}

impl InstallationLookup for FixedLookup {
    fn installation_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\r\nHKEY_CURRENT_USER\\Software\\Valve\\Steam\r\n    SteamExe    REG_SZ    c:/program files (x86)/steam/steam.exe\r\n    SteamPath    REG_SZ    c:/program files (x86)/steam\r\n\r\n";

    #[test]
    fn parses_steam_path() {
        assert_eq!(
            parse_reg_query_output(SAMPLE, "SteamPath"),
            Some("c:/program files (x86)/steam".to_string())
        );
    }

    #[test]
    fn does_not_confuse_prefixed_value_names() {
        let output = "    SteamPathOld    REG_SZ    d:/old\n";
        assert_eq!(parse_reg_query_output(output, "SteamPath"), None);
    }

    #[test]
    fn parses_expand_sz() {
        let output = "    SteamPath    REG_EXPAND_SZ    %ProgramFiles%/steam\n";
        assert_eq!(
            parse_reg_query_output(output, "SteamPath"),
            Some("%ProgramFiles%/steam".to_string())
        );
    }

    #[test]
    fn missing_value_is_none() {
        assert_eq!(parse_reg_query_output(SAMPLE, "InstallPath"), None);
        assert_eq!(parse_reg_query_output("", "SteamPath"), None);
    }

    #[test]
    fn non_string_value_is_none() {
        let output = "    SteamPath    REG_DWORD    0x1\n";
        assert_eq!(parse_reg_query_output(output, "SteamPath"), None);
    }

    #[test]
    fn empty_value_is_none() {
        let output = "    SteamPath    REG_SZ    \n";
        assert_eq!(parse_reg_query_output(output, "SteamPath"), None);
    }

    #[test]
    fn fixed_lookup_returns_value() {
        let lookup = FixedLookup::new("/opt/steam");
        assert_eq!(lookup.installation_root(), Some(PathBuf::from("/opt/steam")));
        assert_eq!(FixedLookup::absent().installation_root(), None);
    }

    #[test]
    fn steam_lookup_uses_configured_names() {
        let lookup = SteamRegistryLookup::from_config(&LauncherConfig::default());
        assert_eq!(lookup.key, r"HKEY_CURRENT_USER\Software\Valve\Steam");
        assert_eq!(lookup.value, "SteamPath");
    }

    #[test]
    fn well_known_roots_are_relative() {
        assert!(well_known_roots().iter().all(|r| !r.starts_with('/')));
    }
}
