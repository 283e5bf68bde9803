//! Leaderboard of the top 10 named scores
//!
//! Persisted as a bare JSON array of `{"name", "score"}` objects, rewritten
//! in full on every change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::persistence::{load_json, save_json};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Entries sorted by descending score, at most [`MAX_HIGH_SCORES`] long
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, restoring order and length
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Check if a score would make it onto the board
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties with the lowest entry fall off the end
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a score, keeping the board sorted and trimmed
    ///
    /// A new entry goes after existing entries with the same score.
    /// Returns the rank achieved (1-indexed) or None if it fell off.
    pub fn add_score(&mut self, name: impl Into<String>, score: u32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, LeaderboardEntry::new(name, score));
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

/// Where the leaderboard lives between runs
pub trait LeaderboardStore {
    /// Current board; empty if nothing has been saved yet
    fn load(&self) -> Result<Leaderboard, PersistenceError>;

    /// Replace the stored board
    fn save(&mut self, board: &Leaderboard) -> Result<(), PersistenceError>;

    /// Load, add one score, save. Returns the rank achieved.
    fn record(&mut self, name: &str, score: u32) -> Result<Option<usize>, PersistenceError> {
        let mut board = self.load()?;
        let rank = board.add_score(name, score);
        self.save(&board)?;
        match rank {
            Some(rank) => log::info!("Recorded {name}: {score} at rank {rank}"),
            None => log::info!("{name}: {score} did not make the leaderboard"),
        }
        Ok(rank)
    }
}

/// Leaderboard stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self) -> Result<Leaderboard, PersistenceError> {
        match load_json::<Vec<LeaderboardEntry>>(&self.path)? {
            Some(entries) => {
                log::debug!("Loaded {} leaderboard entries", entries.len());
                Ok(Leaderboard::from_entries(entries))
            }
            None => {
                log::info!("No leaderboard at {}, starting fresh", self.path().display());
                Ok(Leaderboard::new())
            }
        }
    }

    fn save(&mut self, board: &Leaderboard) -> Result<(), PersistenceError> {
        save_json(&self.path, board)?;
        log::info!("Leaderboard saved ({} entries)", board.len());
        Ok(())
    }
}

/// In-memory store (tests, or running without a writable disk)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Leaderboard,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Leaderboard) -> Self {
        Self { board, saves: 0 }
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// Number of times the board was written
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Result<Leaderboard, PersistenceError> {
        Ok(self.board.clone())
    }

    fn save(&mut self, board: &Leaderboard) -> Result<(), PersistenceError> {
        self.board = board.clone();
        self.saves += 1;
        Ok(())
    }
}
