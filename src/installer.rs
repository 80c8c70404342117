//! Installer protocol invocation.
//!
//! Installing the engine base is delegated to whatever the OS has registered
//! for the installer URI (the Steam client for `steam://`). The launcher does
//! not wait for the installation to finish.

use tracing::info;

use crate::error::{LauncherError, Result};

/// Something that can kick off installation of the engine base.
pub trait Installer {
    /// Hand `uri` to the installer. Returns once the request is dispatched.
    fn install(&self, uri: &str) -> Result<()>;
}

/// Opens the installer URI with the OS default protocol handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtocolInstaller;

impl Installer for ProtocolInstaller {
    fn install(&self, uri: &str) -> Result<()> {
        info!("Opening {}", uri);
        open::that_detached(uri).map_err(|e| LauncherError::InstallerFailed {
            uri: uri.to_string(),
            message: e.to_string(),
        })
    }
}
