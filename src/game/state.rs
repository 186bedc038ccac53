//! Game state and its transitions
//!
//! A `GameState` holds everything about one round: the secret word, the
//! submitted attempts, the row being typed and the aggregated letter status.
//! It performs no I/O; rendering, sound and persistence react to the values
//! it returns.

use super::reveal::RevealSequence;
use crate::core::{Feedback, LetterStates, WORD_LENGTH, Word, normalize_letter};
use thiserror::Error;

/// Number of attempts before the round is lost
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    Won,
    Lost,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Rejected submission; the state is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not enough letters: {len} of {WORD_LENGTH}")]
    IncompleteGuess { len: usize },
    #[error("the game is already over")]
    GameOver,
}

/// One submitted guess with its evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub attempt: Attempt,
    pub outcome: GameOutcome,
    pub reveal: RevealSequence,
}

#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    attempts: Vec<Attempt>,
    current: String,
    letter_states: LetterStates,
    outcome: GameOutcome,
}

impl GameState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            current: String::with_capacity(WORD_LENGTH * 2),
            letter_states: LetterStates::new(),
            outcome: GameOutcome::Ongoing,
        }
    }

    /// Add a letter to the row being typed
    ///
    /// Does nothing (returns false) once the game is over, when the row is
    /// full, or when `c` is not a playable letter.
    pub fn append_letter(&mut self, c: char) -> bool {
        if self.is_over() || self.current_len() >= WORD_LENGTH {
            return false;
        }
        let Some(letter) = normalize_letter(c) else {
            return false;
        };
        self.current.push(letter);
        true
    }

    /// Remove the last typed letter, returning false if the row is empty
    pub fn delete_letter(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.current.pop().is_some()
    }

    /// Evaluate the typed row and move to the next turn
    ///
    /// # Errors
    ///
    /// - `GameError::IncompleteGuess` when fewer than 5 letters are typed
    /// - `GameError::GameOver` once the round has ended
    ///
    /// # Examples
    /// ```
    /// use wordle_pro::core::Word;
    /// use wordle_pro::game::{GameError, GameOutcome, GameState};
    ///
    /// let mut game = GameState::new(Word::new("panda").unwrap());
    /// "pan".chars().for_each(|c| { game.append_letter(c); });
    /// assert_eq!(game.submit_guess().unwrap_err(), GameError::IncompleteGuess { len: 3 });
    ///
    /// "da".chars().for_each(|c| { game.append_letter(c); });
    /// let submission = game.submit_guess().unwrap();
    /// assert_eq!(submission.outcome, GameOutcome::Won);
    /// ```
    pub fn submit_guess(&mut self) -> Result<Submission, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let len = self.current_len();
        if len < WORD_LENGTH {
            return Err(GameError::IncompleteGuess { len });
        }

        // Only playable letters are ever appended, so this cannot fail
        let word = Word::new(&self.current).map_err(|_| GameError::IncompleteGuess { len })?;
        let feedback = Feedback::evaluate(&word, &self.target);

        self.letter_states.record_attempt(&word, &feedback);
        let attempt = Attempt::new(word, feedback);
        let row = self.attempts.len();
        self.attempts.push(attempt.clone());
        self.current.clear();

        if feedback.is_perfect() {
            self.outcome = GameOutcome::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.outcome = GameOutcome::Lost;
        }

        Ok(Submission {
            reveal: RevealSequence::new(row, &attempt),
            attempt,
            outcome: self.outcome,
        })
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Letters typed so far in the current row
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn current_len(&self) -> usize {
        self.current.chars().count()
    }

    #[must_use]
    pub const fn letter_states(&self) -> &LetterStates {
        &self.letter_states
    }

    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }
}
