//! Empires launcher entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use empires_launcher::cli::Cli;
use empires_launcher::config::LauncherConfig;
use empires_launcher::installer::ProtocolInstaller;
use empires_launcher::launcher::Launcher;
use empires_launcher::resolver::SteamRegistryLookup;
use empires_launcher::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level; the default is INFO. Logs go to stderr so
/// prompts own stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("empires_launcher=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("Launcher starting with args: {:?}", cli);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("Cannot determine working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = LauncherConfig::default();
    let mut ui = create_ui(std::io::stdin().is_terminal());
    let lookup = SteamRegistryLookup::from_config(&config);
    let installer = ProtocolInstaller;

    match Launcher::new(&config, ui.as_mut(), &lookup, &installer).run(&working_dir, &cli.game_args)
    {
        Ok(outcome) => {
            tracing::info!("Launcher finished: {}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
