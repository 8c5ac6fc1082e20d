use std::path::PathBuf;
use std::process::ExitCode;

use zombie_room::cli;
use zombie_room::config::GameConfig;
use zombie_room::engine::Engine;
use zombie_room::scene::RoomScene;
use zombie_room::Error;

fn run(path: Option<PathBuf>) -> Result<(), Error> {
    let config = match path {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            GameConfig::load(&path)?
        }
        None => {
            log::info!("using built-in config");
            GameConfig::default()
        }
    };

    Engine::builder()
        .with_title(&config.window.title)
        .with_size(config.window.width, config.window.height)
        .with_ups(config.window.target_fps)
        .run(RoomScene::new(config))
}

fn main() -> ExitCode {
    let matches = cli::command().get_matches();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli::config_path(&matches)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
