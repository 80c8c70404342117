//! CLI argument definitions.

use clap::Parser;

/// Empires launcher.
///
/// Starts Source SDK Base 2007 with the Empires mod and forwards every
/// argument to the game unchanged. A `--` in first position is the usual
/// escape and is not forwarded; any later `--` is.
#[derive(Debug, Parser)]
#[command(name = "empires-launcher")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments passed through to the game
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_name = "GAME_ARGS"
    )]
    pub game_args: Vec<String>,
}
