//! Asteroid Shooter entry point
//!
//! There is no windowing backend yet, so the binary runs the full mode
//! machine headless under the autopilot. Pass a settings file path as the
//! first argument (defaults to `settings.json`).

use std::path::PathBuf;
use std::process::ExitCode;

use asteroid_shooter::platform::{Autopilot, FixedStepPacer, FramePacer, RealtimePacer};
use asteroid_shooter::settings::DEFAULT_SETTINGS_PATH;
use asteroid_shooter::{Game, GameError, JsonFileStore, Settings};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Asteroid Shooter (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&settings_path).map_err(GameError::Settings)?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    let frontend = Autopilot::new(settings.autopilot_name.clone(), settings.max_sessions);
    let store = JsonFileStore::new(&settings.leaderboard_path);
    log::info!("Seed {seed}, leaderboard at {}", store.path().display());

    if settings.realtime {
        play(frontend, RealtimePacer::new(), store, seed)
    } else {
        play(frontend, FixedStepPacer::new(), store, seed)
    }
}

fn play<P: FramePacer>(
    frontend: Autopilot,
    pacer: P,
    store: JsonFileStore,
    seed: u64,
) -> Result<(), GameError> {
    let mut game = Game::new(frontend, pacer, store, seed);
    game.run()?;
    log::info!(
        "Quit after {} session(s), {} finished",
        game.sessions_played(),
        game.frontend().games_finished()
    );
    Ok(())
}
