use std::path::PathBuf;

use clap::error::ErrorKind;
use zombie_room::cli::{command, config_path};

fn parse(args: &[&str]) -> Result<Option<PathBuf>, clap::Error> {
    let matches = command().try_get_matches_from(std::iter::once("zombie-room").chain(args.iter().copied()))?;
    Ok(config_path(&matches))
}

#[test]
fn no_arguments_means_builtin_config() {
    assert_eq!(parse(&[]).unwrap(), None);
}

#[test]
fn long_config_flag() {
    assert_eq!(parse(&["--config", "room.json"]).unwrap(), Some(PathBuf::from("room.json")));
}

#[test]
fn long_config_flag_with_equals() {
    assert_eq!(parse(&["--config=room.json"]).unwrap(), Some(PathBuf::from("room.json")));
}

#[test]
fn short_config_flag() {
    assert_eq!(parse(&["-c", "room.json"]).unwrap(), Some(PathBuf::from("room.json")));
}

#[test]
fn config_flag_without_value_is_rejected() {
    let err = parse(&["--config"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn unknown_argument_is_rejected() {
    let err = parse(&["--fullscreen"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn help_is_generated() {
    let err = parse(&["--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(command().render_help().to_string().contains("--config <PATH>"));
}

#[test]
fn command_definition_is_consistent() {
    command().debug_assert();
}
