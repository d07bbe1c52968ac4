//! Score persistence
//!
//! Two operations only: append a score (date-stamped, sorted descending,
//! capped at 10) and read everything back. Storage faults never reach the
//! simulation - a corrupt or missing backend reads as an empty history and
//! failed writes are logged and dropped.

use std::fs;
use std::path::PathBuf;

use crate::highscores::HighScores;

/// Swappable score storage backend
pub trait ScoreStore {
    /// Append a score, stamped with the current local date. Scores of zero
    /// are ignored. Must not fail; write errors degrade to no-ops.
    fn append(&mut self, score: u64);

    /// Read the full ranked history. Returns an empty leaderboard when the
    /// backend is missing or corrupt; never errors.
    fn read_all(&self) -> HighScores;
}

/// Today's date as stored alongside scores
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: HighScores,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn append(&mut self, score: u64) {
        self.scores.add_score(score, today());
    }

    fn read_all(&self) -> HighScores {
        self.scores.clone()
    }
}

/// JSON-file-backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn append(&mut self, score: u64) {
        if score == 0 {
            return;
        }
        let mut scores = self.read_all();
        scores.add_score(score, today());
        match serde_json::to_string(&scores) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    log::warn!("failed to write scores to {:?}: {}", self.path, e);
                }
            }
            Err(e) => log::warn!("failed to serialize scores: {}", e),
        }
    }

    fn read_all(&self) -> HighScores {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return HighScores::new();
        };
        match serde_json::from_str::<HighScores>(&json) {
            Ok(mut scores) => {
                // Hand-edited or stale files may violate ordering
                scores.normalize();
                scores
            }
            Err(e) => {
                log::warn!("corrupt score file {:?}: {}", self.path, e);
                HighScores::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("zombie_dash_test_{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.append(100);
        store.append(250);
        store.append(0); // ignored

        let scores = store.read_all();
        assert_eq!(scores.entries.len(), 2);
        assert_eq!(scores.top_score(), Some(250));
        assert!(scores.is_well_formed());
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let store = JsonFileStore::new(temp_path("missing_nonexistent"));
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file_reads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json {{{").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(store.read_all().is_empty());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_append_and_read() {
        let path = temp_path("append");
        let _ = fs::remove_file(&path);
        let mut store = JsonFileStore::new(&path);
        store.append(300);
        store.append(700);
        store.append(500);

        let scores = store.read_all();
        assert_eq!(scores.entries.len(), 3);
        assert_eq!(scores.top_score(), Some(700));
        assert!(scores.is_well_formed());
        let _ = fs::remove_file(&path);
    }
}
