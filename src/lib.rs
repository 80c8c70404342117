//! Empires launcher.
//!
//! Finds the Source SDK Base 2007 installation the Empires mod runs on, starts
//! it with the mod's content directory, and waits until the game reports that
//! it has loaded. If the engine base is missing, the user is offered to
//! install it through Steam.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Launcher constants and user-visible messages
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Installer protocol invocation
//! - [`launcher`] - Launch orchestration
//! - [`resolver`] - Engine base discovery
//! - [`supervisor`] - Child process launch and output monitoring
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use empires_launcher::supervisor::LaunchSpec;
//! use std::path::Path;
//!
//! let spec = LaunchSpec::new(
//!     Path::new("/games/hl2.exe"),
//!     Path::new("/games/empires"),
//!     &["-nosound".to_string()],
//! );
//! assert_eq!(spec.arguments, "-game \"/games/empires\" -nosound");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod launcher;
pub mod resolver;
pub mod supervisor;
pub mod ui;

pub use error::{LauncherError, Result};
