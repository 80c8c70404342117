//! Two-level directory search for an installed application.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// One resolution attempt: which directory to find, where, and what proves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Directory name to match (case-insensitive).
    pub target_name: String,
    /// Installation root whose grandchildren are candidates.
    pub search_root: PathBuf,
    /// File that must sit directly inside a matching directory.
    pub marker_file: String,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        search_root: impl Into<PathBuf>,
        target_name: impl Into<String>,
        marker_file: impl Into<String>,
    ) -> Self {
        Self {
            target_name: target_name.into(),
            search_root: search_root.into(),
            marker_file: marker_file.into(),
        }
    }

    /// Run the search.
    pub fn resolve(&self) -> Option<ResolvedInstallation> {
        find_installation(&self.search_root, &self.target_name, &self.marker_file)
    }
}

/// A directory that matched a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstallation {
    /// The matching tier-2 directory.
    pub directory: PathBuf,
    /// The marker file as it is spelled on disk.
    pub executable: PathBuf,
}

impl ResolvedInstallation {
    /// Create from a directory and the marker file found inside it.
    pub fn new(directory: impl Into<PathBuf>, executable: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            executable: executable.into(),
        }
    }
}

/// Find `target_name` two levels below `search_root`.
///
/// Walks `search_root/*/*` and returns the first directory whose name equals
/// `target_name` and which directly contains a file named `marker_file`. Both
/// comparisons ignore ASCII case. Enumeration order comes from the filesystem.
///
/// Returns `None` when nothing matches or the root cannot be read.
pub fn resolve(search_root: &Path, target_name: &str, marker_file: &str) -> Option<PathBuf> {
    find_installation(search_root, target_name, marker_file).map(|found| found.directory)
}

/// Like [`resolve`], but also reports the marker file's real path.
///
/// On a case-sensitive filesystem the marker may be spelled differently from
/// `marker_file`; the returned executable is the entry that actually exists.
pub fn find_installation(
    search_root: &Path,
    target_name: &str,
    marker_file: &str,
) -> Option<ResolvedInstallation> {
    let Some(tier_one) = subdirectories(search_root) else {
        debug!("Cannot enumerate search root {}", search_root.display());
        return None;
    };

    for installation in tier_one {
        let Some(candidates) = subdirectories(&installation) else {
            debug!("Skipping unreadable directory {}", installation.display());
            continue;
        };

        for candidate in candidates {
            if !name_matches(&candidate, target_name) {
                continue;
            }
            if let Some(executable) = find_file_named(&candidate, marker_file) {
                debug!("Found {} at {}", target_name, candidate.display());
                return Some(ResolvedInstallation::new(candidate, executable));
            }
        }
    }

    debug!(
        "No '{}' containing '{}' under {}",
        target_name,
        marker_file,
        search_root.display()
    );
    None
}

/// Immediate subdirectories of `path`, or `None` if it can't be read.
fn subdirectories(path: &Path) -> Option<Vec<PathBuf>> {
    let entries = fs::read_dir(path).ok()?;
    Some(
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_dir())
            .collect(),
    )
}

fn name_matches(path: &Path, name: &str) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().eq_ignore_ascii_case(name))
        .unwrap_or(false)
}

/// The file directly inside `dir` whose name matches `file_name`, ignoring case.
pub fn find_file_named(dir: &Path, file_name: &str) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|p| p.is_file() && name_matches(p, file_name))
}
