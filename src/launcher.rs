//! Launch orchestration.
//!
//! [`Launcher::run`] resolves the engine base, then either supervises the game
//! or offers to install the missing engine base. All collaborators are passed
//! in, so the whole flow runs against mocks in tests.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::config::LauncherConfig;
use crate::error::Result;
use crate::installer::Installer;
use crate::resolver::{InstallationLookup, Resolver};
use crate::supervisor::{ShutdownReason, Supervisor};
use crate::ui::{Prompt, UserInterface};

/// Key of the "install the engine base?" prompt.
pub const INSTALL_PROMPT_KEY: &str = "install";

/// How a launcher run ended. Every outcome exits with code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The game was started and supervision ended.
    Supervised(ShutdownReason),
    /// The engine base was missing and the installer was asked to install it.
    InstallRequested,
    /// The engine base was missing and the user declined to install it.
    InstallDeclined,
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supervised(reason) => write!(f, "{}", reason),
            Self::InstallRequested => f.write_str("install requested"),
            Self::InstallDeclined => f.write_str("install declined"),
        }
    }
}

/// Runs the launcher once.
pub struct Launcher<'a> {
    config: &'a LauncherConfig,
    ui: &'a mut dyn UserInterface,
    lookup: &'a dyn InstallationLookup,
    installer: &'a dyn Installer,
}

impl<'a> Launcher<'a> {
    /// Create a launcher from its collaborators.
    pub fn new(
        config: &'a LauncherConfig,
        ui: &'a mut dyn UserInterface,
        lookup: &'a dyn InstallationLookup,
        installer: &'a dyn Installer,
    ) -> Self {
        Self {
            config,
            ui,
            lookup,
            installer,
        }
    }

    /// Launch the game for a launcher running in `working_dir`.
    ///
    /// Only a failure to start the engine base is returned as an error.
    pub fn run(mut self, working_dir: &Path, forwarded_args: &[String]) -> Result<LaunchOutcome> {
        self.ui.show_header(&self.config.display_name());

        let resolver = Resolver::new(self.config, self.lookup);
        match resolver.locate(working_dir) {
            Some(installation) => {
                let mod_directory = working_dir.join(&self.config.mod_dir_name);
                let reason = Supervisor::new(self.config, self.ui).launch_and_supervise(
                    &installation.executable,
                    &mod_directory,
                    forwarded_args,
                )?;
                Ok(LaunchOutcome::Supervised(reason))
            }
            None => Ok(self.offer_install()),
        }
    }

    fn offer_install(mut self) -> LaunchOutcome {
        info!("{} not found", self.config.target_name);
        self.ui.message(&self.config.not_found_message());

        let prompt = Prompt::confirm(
            INSTALL_PROMPT_KEY,
            self.config.install_question(),
            self.ui.is_interactive(),
        );
        let accepted = match self.ui.confirm(&prompt) {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Install prompt failed: {}", e);
                false
            }
        };

        if !accepted {
            return LaunchOutcome::InstallDeclined;
        }

        if let Err(e) = self.installer.install(&self.config.installer_uri) {
            warn!("{}", e);
            self.ui.warning(&format!(
                "Could not start the installer. Open {} manually.",
                self.config.installer_uri
            ));
        }
        LaunchOutcome::InstallRequested
    }
}
