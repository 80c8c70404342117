//! Engine base process supervision.
//!
//! The supervisor starts the engine base with the mod's arguments, reads the
//! child's stdout on a background thread, and returns once the game reports
//! that it has loaded or the child's output ends. The caller decides how to
//! exit; the child keeps running either way.

pub mod launch_spec;
pub mod monitor;
pub mod shutdown;

pub use launch_spec::LaunchSpec;
pub use monitor::{spawn_reader, Monitor, OutputEvent};
pub use shutdown::{ShutdownHandle, ShutdownLatch, ShutdownReason};

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{error, info};

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::ui::UserInterface;

/// Starts the engine base and waits for it to finish loading.
pub struct Supervisor<'a> {
    config: &'a LauncherConfig,
    ui: &'a mut dyn UserInterface,
    tx: Sender<OutputEvent>,
    rx: Receiver<OutputEvent>,
}

impl<'a> Supervisor<'a> {
    /// Create a supervisor.
    pub fn new(config: &'a LauncherConfig, ui: &'a mut dyn UserInterface) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { config, ui, tx, rx }
    }

    /// A handle that makes [`launch_and_supervise`](Self::launch_and_supervise)
    /// return early with [`ShutdownReason::Requested`].
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle::new(self.tx.clone())
    }

    /// Start `base_executable` on `mod_directory` and wait for shutdown.
    ///
    /// Returns the reason the launcher should now exit. If the executable
    /// cannot be started, the failure is shown to the user and returned as
    /// [`LauncherError::ProcessStart`].
    pub fn launch_and_supervise(
        mut self,
        base_executable: &Path,
        mod_directory: &Path,
        forwarded_args: &[String],
    ) -> Result<ShutdownReason> {
        let spec = LaunchSpec::new(base_executable, mod_directory, forwarded_args);
        info!(
            "Launching {} {}",
            spec.executable.display(),
            spec.arguments
        );

        // The channel exists before the child does, so no early line is lost.
        let mut child = match spec.command().spawn() {
            Ok(child) => child,
            Err(source) => {
                error!("Failed to start {}: {}", spec.executable.display(), source);
                self.ui.error(&self.config.start_failure_message());
                return Err(LauncherError::ProcessStart {
                    path: spec.executable,
                    source,
                });
            }
        };
        info!("Started process {}", child.id());

        let Some(stdout) = child.stdout.take() else {
            return Err(anyhow::anyhow!("child stdout was not captured").into());
        };
        spawn_reader(stdout, self.tx.clone());

        let mut spinner = self.ui.start_spinner(&self.config.loading_message());
        let monitor = Monitor::new(&self.config.sentinel, self.config.sentinel_timeout);
        let reason = monitor.watch(&self.rx);
        info!("Shutting down: {}", reason);

        let game = self.config.display_name();
        match reason {
            ShutdownReason::GameLoaded => spinner.finish_success(&format!("{} has loaded", game)),
            ShutdownReason::ChildExited => spinner.finish_warning(&format!("{} exited", game)),
            ShutdownReason::Requested => spinner.finish_warning("Stopped waiting"),
            ShutdownReason::TimedOut => {
                spinner.finish_warning(&format!("{} did not report loading in time", game))
            }
        }

        // Dropping `child` closes our handle without killing the game.
        drop(child);
        Ok(reason)
    }
}
