//! Core domain types for the game
//!
//! Words, guess evaluation and aggregated letter state. Everything here is
//! pure and free of I/O.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, LetterStatus, evaluate};
pub use letters::{KEYBOARD_ROWS, LetterStates};
pub use word::{EXTRA_LETTER, WORD_LENGTH, Word, WordError, normalize_letter};
