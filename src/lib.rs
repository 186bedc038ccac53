//! Wordle Pro
//!
//! A word-guessing game: find the secret five-letter word in six attempts,
//! earn `(7 - attempts) * 100` points per win and keep your streak going.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_pro::core::{Feedback, LetterStatus, Word};
//!
//! let target = Word::new("gatos").unwrap();
//! let guess = Word::new("gatas").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.status_at(0), LetterStatus::Correct);
//! println!("{}", feedback.to_share_symbols());
//! ```

// Core domain types
pub mod core;

// Game rules, scoring and controller
pub mod game;

// Target dictionary
pub mod wordlists;

// Persisted counters
pub mod store;

// Runtime configuration
pub mod config;

// Tracing setup for the binary
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
