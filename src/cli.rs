use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

/// Command-line interface of the `zombie-room` binary.
pub fn command() -> Command {
    Command::new("zombie-room")
        .about("Single-room top-down demo: talk to the NPC, take the gun, leave")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("JSON config file; missing fields keep their defaults")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// The `--config` path, if one was given.
pub fn config_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}
