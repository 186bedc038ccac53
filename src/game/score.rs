//! Score and streak bookkeeping
//!
//! A win is worth `(7 - attempts) * 100` points and extends the streak; a
//! loss is worth nothing and resets the streak.

use super::state::{GameOutcome, MAX_ATTEMPTS};
use crate::core::Word;

/// Persisted counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Cumulative points across all games
    pub score: u32,
    /// Consecutive games won
    pub streak: u32,
}

/// Points awarded for a win after `attempt_count` attempts
///
/// # Examples
/// ```
/// use wordle_pro::game::points_for;
///
/// assert_eq!(points_for(1), 600);
/// assert_eq!(points_for(3), 400);
/// assert_eq!(points_for(6), 100);
/// ```
#[must_use]
pub const fn points_for(attempt_count: usize) -> u32 {
    ((MAX_ATTEMPTS + 1).saturating_sub(attempt_count) * 100) as u32
}

/// Effect of one finished game on the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub points: u32,
    pub stats: Stats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    stats: Stats,
}

impl ScoreTracker {
    #[must_use]
    pub const fn new(stats: Stats) -> Self {
        Self { stats }
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    pub fn on_win(&mut self, attempt_count: usize) -> ScoreUpdate {
        let points = points_for(attempt_count);
        self.stats.score = self.stats.score.saturating_add(points);
        self.stats.streak = self.stats.streak.saturating_add(1);
        ScoreUpdate {
            points,
            stats: self.stats,
        }
    }

    pub fn on_loss(&mut self) -> ScoreUpdate {
        self.stats.streak = 0;
        ScoreUpdate {
            points: 0,
            stats: self.stats,
        }
    }

    /// Apply a finished game; `None` while the game is still running
    pub fn record(&mut self, outcome: GameOutcome, attempt_count: usize) -> Option<ScoreUpdate> {
        match outcome {
            GameOutcome::Ongoing => None,
            GameOutcome::Won => Some(self.on_win(attempt_count)),
            GameOutcome::Lost => Some(self.on_loss()),
        }
    }
}

/// End-of-game report handed to front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub target: Word,
    pub attempts: usize,
    pub points: u32,
    pub stats: Stats,
}
