//! High score leaderboard
//!
//! Tracks the top 10 scores of all time, sorted descending. The storage
//! backend lives in `persistence`; this is the pure in-memory shape.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u64,
    /// Local date when achieved, e.g. "2026-08-26"
    pub date: String,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a new score to the leaderboard. Zero scores are ignored.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn add_score(&mut self, score: u64, date: String) -> Option<usize> {
        if score == 0 {
            return None;
        }

        let entry = HighScoreEntry { score, date };

        // Insertion point, sorted descending; ties rank below existing entries
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        if pos < MAX_HIGH_SCORES { Some(pos + 1) } else { None }
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if entries are sorted descending and within the cap
    pub fn is_well_formed(&self) -> bool {
        self.entries.len() <= MAX_HIGH_SCORES
            && self.entries.windows(2).all(|w| w[0].score >= w[1].score)
    }

    /// Drop anything a corrupt backend may have handed us out of order
    pub fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}
