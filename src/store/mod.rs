//! Persisted counters and flags
//!
//! The game keeps three values between sessions: the cumulative score, the
//! win streak and whether the help screen has been shown. They live behind a
//! small string key/value interface so the controller never touches the
//! filesystem directly.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::game::Stats;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write state: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    Score,
    Streak,
    TutorialSeen,
}

impl StoreKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Streak => "streak",
            Self::TutorialSeen => "tutorial_seen",
        }
    }
}

/// Read a stored counter the lenient way: leading digits win, anything
/// else (missing, empty, garbage, negative) reads as zero.
#[must_use]
pub fn parse_counter(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else { return 0 };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// String key/value storage for the persisted game state
pub trait StateStore {
    fn get(&self, key: StoreKey) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;

    fn load_stats(&self) -> Stats {
        Stats {
            score: parse_counter(self.get(StoreKey::Score).as_deref()),
            streak: parse_counter(self.get(StoreKey::Streak).as_deref()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if either counter could not be persisted.
    fn save_stats(&mut self, stats: Stats) -> Result<(), StoreError> {
        self.set(StoreKey::Streak, &stats.streak.to_string())?;
        self.set(StoreKey::Score, &stats.score.to_string())
    }

    fn tutorial_seen(&self) -> bool {
        self.get(StoreKey::TutorialSeen)
            .is_some_and(|v| v.trim() == "true")
    }

    /// # Errors
    ///
    /// Returns an error if the flag could not be persisted.
    fn mark_tutorial_seen(&mut self) -> Result<(), StoreError> {
        self.set(StoreKey::TutorialSeen, "true")
    }
}
