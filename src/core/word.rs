//! Five-letter word representation
//!
//! A Word stores an uppercase 5-letter word along with the set of letters it
//! contains, which guess evaluation checks for membership.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Number of letters in every guess and target
pub const WORD_LENGTH: usize = 5;

/// The one letter accepted outside of A-Z
pub const EXTRA_LETTER: char = 'Ñ';

/// A validated 5-letter word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// Normalize a single input character to a playable uppercase letter
///
/// Returns `None` for anything outside A-Z and Ñ (in either case).
///
/// # Examples
/// ```
/// use wordle_pro::core::normalize_letter;
///
/// assert_eq!(normalize_letter('q'), Some('Q'));
/// assert_eq!(normalize_letter('ñ'), Some('Ñ'));
/// assert_eq!(normalize_letter('3'), None);
/// ```
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        return Some(c.to_ascii_uppercase());
    }
    match c {
        'ñ' | 'Ñ' => Some(EXTRA_LETTER),
        _ => None,
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains anything other than A-Z or Ñ
    ///
    /// # Examples
    /// ```
    /// use wordle_pro::core::Word;
    ///
    /// let word = Word::new("gatos").unwrap();
    /// assert_eq!(word.text(), "GATOS");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("g4tos").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();

        let len = raw.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut chars = [' '; WORD_LENGTH];
        for (slot, c) in chars.iter_mut().zip(raw.chars()) {
            *slot = normalize_letter(c).ok_or(WordError::InvalidCharacter(c))?;
        }

        Ok(Self {
            text: chars.iter().collect(),
            letters: chars.iter().copied().collect(),
            chars,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
