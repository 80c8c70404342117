//! Command-line interface.
//!
//! The launcher takes no options of its own. Everything on the command line
//! is handed to the game.

pub mod args;

pub use args::Cli;
