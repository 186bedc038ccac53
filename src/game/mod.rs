//! Game rules and round lifecycle
//!
//! `GameState` is the pure per-round state machine, `ScoreTracker` turns a
//! finished round into points and streak, and `GameController` wires both to
//! a persistent store for the front ends.

mod controller;
mod input;
mod reveal;
mod score;
mod share;
mod state;

pub use controller::{Cell, GameController, GridRow, InputEffect};
pub use input::Key;
pub use reveal::{RevealSequence, RevealStep};
pub use score::{GameSummary, ScoreTracker, ScoreUpdate, Stats, points_for};
pub use share::{SHARE_TITLE, share_text};
pub use state::{Attempt, GameError, GameOutcome, GameState, MAX_ATTEMPTS, Submission};
