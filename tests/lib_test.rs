//! Library integration tests.

use empires_launcher::LauncherError;

#[test]
fn error_types_are_public() {
    let err = LauncherError::InstallerFailed {
        uri: "steam://run/218".into(),
        message: "no handler".into(),
    };
    assert!(err.to_string().contains("steam://run/218"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> empires_launcher::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use empires_launcher::cli::Cli;

    let cli = Cli::parse_from(["empires-launcher", "-nosound", "-windowed"]);
    assert_eq!(cli.game_args, vec!["-nosound", "-windowed"]);
}

#[test]
fn config_defaults_are_public() {
    use empires_launcher::config::LauncherConfig;

    let config = LauncherConfig::default();
    assert_eq!(config.installer_uri, "steam://run/218");
    assert_eq!(config.display_name(), "Empires");
}
