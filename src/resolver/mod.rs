//! Engine base discovery.
//!
//! This module provides:
//! - [`resolve`] - the two-level search for a directory holding a marker file
//! - [`resolve_via_installation_registry`] - the same search rooted at the
//!   package cache of the installation reported by an [`InstallationLookup`]
//! - [`Resolver`] - the caller policy that tries the launcher's own library
//!   first and the installation root second
//!
//! Every failure during discovery (unreadable directories, a missing registry
//! value, a stale path) ends up as `None`.

pub mod lookup;
pub mod search;

pub use lookup::{parse_reg_query_output, FixedLookup, InstallationLookup, SteamRegistryLookup};
pub use search::{find_file_named, find_installation, resolve, ResolvedInstallation, SearchRequest};

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LauncherConfig;

/// Search the package cache of the looked-up installation root.
///
/// Returns `None` when the lookup has no answer, the answer is not an existing
/// directory, or the root has no `package_cache_dir` subdirectory.
pub fn resolve_via_installation_registry(
    lookup: &dyn InstallationLookup,
    package_cache_dir: &str,
    target_name: &str,
    marker_file: &str,
) -> Option<PathBuf> {
    let search_root = installation_search_root(lookup, package_cache_dir)?;
    resolve(&search_root, target_name, marker_file)
}

/// `<installation root>/<package_cache_dir>`, if both exist.
fn installation_search_root(
    lookup: &dyn InstallationLookup,
    package_cache_dir: &str,
) -> Option<PathBuf> {
    let root = lookup.installation_root()?;
    if !root.is_dir() {
        debug!("Installation root {} does not exist", root.display());
        return None;
    }

    let search_root = root.join(package_cache_dir);
    if !search_root.is_dir() {
        debug!("No {} folder under {}", package_cache_dir, root.display());
        return None;
    }
    Some(search_root)
}

/// The primary search root: two levels above the working directory.
///
/// For a launcher in `<library>/common/Empires` this is `<library>`.
pub fn primary_search_root(working_dir: &Path) -> Option<PathBuf> {
    working_dir.parent()?.parent().map(Path::to_path_buf)
}

/// Locates the engine base using the primary root, then the installation root.
pub struct Resolver<'a> {
    config: &'a LauncherConfig,
    lookup: &'a dyn InstallationLookup,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    pub fn new(config: &'a LauncherConfig, lookup: &'a dyn InstallationLookup) -> Self {
        Self { config, lookup }
    }

    /// Find the engine base for a launcher running in `working_dir`.
    pub fn locate(&self, working_dir: &Path) -> Option<ResolvedInstallation> {
        let target = &self.config.target_name;
        let marker = &self.config.marker_file;

        if let Some(root) = primary_search_root(working_dir) {
            debug!("Searching for '{}' under {}", target, root.display());
            if let Some(found) = find_installation(&root, target, marker) {
                info!("Found {} at {}", target, found.directory.display());
                return Some(found);
            }
        }

        // The engine base may live in a library on another drive.
        debug!("Searching for '{}' under the installation root", target);
        let root = installation_search_root(self.lookup, &self.config.package_cache_dir)?;
        let found = find_installation(&root, target, marker)?;
        info!("Found {} at {}", target, found.directory.display());
        Some(found)
    }
}
