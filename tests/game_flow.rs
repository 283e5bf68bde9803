//! End-to-end runs of the mode machine with scripted input and a virtual clock

use std::collections::VecDeque;

use asteroid_shooter::error::PersistenceError;
use asteroid_shooter::game::GameMode;
use asteroid_shooter::highscores::LeaderboardEntry;
use asteroid_shooter::platform::{
    FixedStepPacer, HeldKeys, InputEvent, InputSource, Key, SceneRecord, ScriptFrame,
    ScriptedFrontend,
};
use asteroid_shooter::renderer::{Renderer, Scene};
use asteroid_shooter::{Game, GameError, JsonFileStore, Leaderboard, LeaderboardStore, MemoryStore};

/// Plenty of frames for an idle ship to lose three lives
const PLAY_FRAME_CAP: u64 = 200_000;

/// Sits still while playing and answers every other screen from a queue
struct Player {
    responses: VecDeque<Vec<InputEvent>>,
    pending: Vec<InputEvent>,
    play_frames: u64,
    rendered: Vec<SceneRecord>,
}

impl Player {
    fn new(responses: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            pending: Vec::new(),
            play_frames: 0,
            rendered: Vec::new(),
        }
    }

    fn game_over_scores(&self) -> Vec<u32> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                SceneRecord::GameOver(score) => Some(*score),
                _ => None,
            })
            .collect()
    }

    /// Distinct screens visited, collapsing consecutive repeats
    fn screens(&self) -> Vec<&'static str> {
        let mut screens: Vec<&'static str> = Vec::new();
        for record in &self.rendered {
            let name = match record {
                SceneRecord::Menu => "menu",
                SceneRecord::Playing(_) => "playing",
                SceneRecord::NameEntry(_) => "name",
                SceneRecord::GameOver(_) => "game_over",
                SceneRecord::Leaderboard(_) => "leaderboard",
            };
            if screens.last() != Some(&name) {
                screens.push(name);
            }
        }
        screens
    }
}

impl InputSource for Player {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn held_keys(&self) -> HeldKeys {
        HeldKeys::default()
    }
}

impl Renderer for Player {
    fn render(&mut self, scene: &Scene<'_>) {
        self.rendered.push(SceneRecord::from(scene));
        self.pending = match scene {
            Scene::Playing { .. } => {
                self.play_frames += 1;
                if self.play_frames > PLAY_FRAME_CAP {
                    vec![InputEvent::Quit]
                } else {
                    Vec::new()
                }
            }
            _ => self
                .responses
                .pop_front()
                .unwrap_or_else(|| vec![InputEvent::Quit]),
        };
    }
}

fn typed_then(name: &str, last: InputEvent) -> Vec<InputEvent> {
    let mut events = InputEvent::typed(name);
    events.push(last);
    events
}

fn space() -> Vec<InputEvent> {
    vec![InputEvent::key(Key::Space)]
}

fn letter(c: char) -> Vec<InputEvent> {
    vec![InputEvent::key(Key::Char(c))]
}

#[test]
fn menu_to_leaderboard_and_back() {
    let board = Leaderboard::from_entries(vec![
        LeaderboardEntry::new("A", 10),
        LeaderboardEntry::new("B", 30),
    ]);
    let frontend = ScriptedFrontend::new([
        ScriptFrame::idle(),
        ScriptFrame::events(letter('l')),
        ScriptFrame::idle(),
        ScriptFrame::events(letter('B')),
        ScriptFrame::idle(),
    ]);
    let mut game = Game::new(
        frontend,
        FixedStepPacer::new(),
        MemoryStore::with_board(board),
        1,
    );

    game.run().unwrap();

    let rendered = game.frontend().rendered();
    assert_eq!(rendered[0], SceneRecord::Menu);
    assert!(rendered.contains(&SceneRecord::Leaderboard(vec![
        ("B".to_string(), 30),
        ("A".to_string(), 10),
    ])));
    assert_eq!(rendered.last(), Some(&SceneRecord::Menu));
    assert_eq!(game.sessions_played(), 0);
}

#[test]
fn quit_during_play_saves_nothing() {
    let held = HeldKeys {
        right: true,
        ..Default::default()
    };
    let mut frames = vec![ScriptFrame::events(space())];
    frames.extend((0..30).map(|_| ScriptFrame::held(held)));
    frames.push(ScriptFrame::events(vec![InputEvent::key(Key::Space), InputEvent::Quit]));

    let mut game = Game::new(
        ScriptedFrontend::new(frames),
        FixedStepPacer::new(),
        MemoryStore::new(),
        2,
    );
    game.run().unwrap();

    assert_eq!(game.sessions_played(), 1);
    assert_eq!(game.store().saves(), 0);
    let playing = game
        .frontend()
        .rendered()
        .iter()
        .filter(|r| matches!(r, SceneRecord::Playing(_)))
        .count();
    assert_eq!(playing, 30);
    let hud = game.frontend().last_hud().unwrap();
    assert_eq!(hud.lives, 3);
}

#[test]
fn each_mode_polls_every_frame() {
    let mut game = Game::new(
        ScriptedFrontend::new((0..10).map(|_| ScriptFrame::idle())),
        FixedStepPacer::new(),
        MemoryStore::new(),
        3,
    );
    game.run().unwrap();
    // ten idle polls, then the quit poll
    assert_eq!(game.frontend().polls(), 11);
    assert_eq!(game.pacer().frames(), 10);
}

#[test]
fn game_over_records_name_and_restarts() {
    let player = Player::new([
        // menu: start
        space(),
        // name entry
        typed_then("Tess", InputEvent::key(Key::Return)),
        // game over: play again
        space(),
        // name entry: submit empty
        vec![InputEvent::key(Key::Return)],
        // game over: menu
        letter('m'),
        // menu: leaderboard
        letter('l'),
        // leaderboard: back
        letter('b'),
        // menu: quit
        vec![InputEvent::Quit],
    ]);
    let mut game = Game::new(player, FixedStepPacer::new(), MemoryStore::new(), 2024);

    game.run().unwrap();

    let player = game.frontend();
    assert_eq!(
        player.screens(),
        vec![
            "menu",
            "playing",
            "name",
            "game_over",
            "playing",
            "name",
            "game_over",
            "menu",
            "leaderboard",
            "menu"
        ]
    );
    assert_eq!(game.sessions_played(), 2);

    // second game starts fresh
    let restart = player
        .rendered
        .iter()
        .skip_while(|r| !matches!(r, SceneRecord::GameOver(_)))
        .find_map(|r| match r {
            SceneRecord::Playing(hud) => Some(*hud),
            _ => None,
        })
        .unwrap();
    assert_eq!(restart.lives, 3);
    assert!(restart.score <= 1);

    // only the named game was recorded
    let scores = player.game_over_scores();
    let board = game.store().board();
    assert_eq!(game.store().saves(), 1);
    assert_eq!(board.entries(), &[LeaderboardEntry::new("Tess", scores[0])]);
    assert!(player.rendered.contains(&SceneRecord::Leaderboard(vec![(
        "Tess".to_string(),
        scores[0]
    )])));
}

#[test]
fn quit_during_name_entry_skips_save() {
    let player = Player::new([space(), typed_then("Half", InputEvent::Quit)]);
    let mut game = Game::new(player, FixedStepPacer::new(), MemoryStore::new(), 77);

    game.run().unwrap();

    assert_eq!(game.store().saves(), 0);
    assert!(game.store().board().is_empty());
    let screens = game.frontend().screens();
    assert_eq!(screens, vec!["menu", "playing", "name"]);
    assert!(game.frontend().game_over_scores().is_empty());
}

#[test]
fn run_mode_reports_next_mode() {
    let mut game = Game::new(
        ScriptedFrontend::new([ScriptFrame::events(letter('m'))]),
        FixedStepPacer::new(),
        MemoryStore::new(),
        5,
    );
    assert_eq!(
        game.run_mode(GameMode::GameOver { score: 9 }).unwrap(),
        GameMode::Menu
    );
    assert_eq!(game.frontend().rendered(), &[] as &[SceneRecord]);
    assert_eq!(game.run_mode(GameMode::Quit).unwrap(), GameMode::Quit);
}

#[test]
fn malformed_leaderboard_is_fatal() {
    let path = std::env::temp_dir().join(format!(
        "asteroid-shooter-{}-malformed-leaderboard.json",
        std::process::id()
    ));
    std::fs::write(&path, "[{\"name\": \"x\", \"score\": \"lots\"}]").unwrap();

    let mut game = Game::new(
        ScriptedFrontend::new([ScriptFrame::events(letter('l'))]),
        FixedStepPacer::new(),
        JsonFileStore::new(&path),
        6,
    );
    let result = game.run();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(GameError::Leaderboard(PersistenceError::Malformed { .. }))
    ));
}

#[test]
fn missing_leaderboard_shows_empty_board() {
    let path = std::env::temp_dir().join(format!(
        "asteroid-shooter-{}-absent-leaderboard.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let store = JsonFileStore::new(&path);
    assert!(store.load().unwrap().is_empty());

    let mut game = Game::new(
        ScriptedFrontend::new([
            ScriptFrame::events(letter('l')),
            ScriptFrame::idle(),
        ]),
        FixedStepPacer::new(),
        store,
        7,
    );
    game.run().unwrap();
    assert!(game
        .frontend()
        .rendered()
        .contains(&SceneRecord::Leaderboard(Vec::new())));
}
