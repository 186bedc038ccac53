//! Guess evaluation
//!
//! Each guessed letter is classified independently against the target:
//! - Correct: same letter at the same position
//! - Present: the letter occurs anywhere else in the target
//! - Absent: the letter does not occur in the target
//!
//! Duplicate letters are NOT count-limited. A letter guessed twice but present
//! once in the target is marked at both positions.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of one guessed letter
///
/// Ordered so that `Absent < Present < Correct`, which is the upgrade order
/// used for aggregated keyboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Symbol used in the shareable transcript
    #[must_use]
    pub const fn share_symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Lowercase name, as used in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Status of the guess letter at `position` relative to `target`
///
/// # Panics
/// Panics if position >= 5
///
/// # Examples
/// ```
/// use wordle_pro::core::{LetterStatus, Word, evaluate};
///
/// let target = Word::new("perro").unwrap();
/// let guess = Word::new("rubio").unwrap();
/// assert_eq!(evaluate(&guess, &target, 0), LetterStatus::Present);
/// assert_eq!(evaluate(&guess, &target, 1), LetterStatus::Absent);
/// assert_eq!(evaluate(&guess, &target, 4), LetterStatus::Correct);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word, position: usize) -> LetterStatus {
    let letter = guess.char_at(position);
    if target.char_at(position) == letter {
        LetterStatus::Correct
    } else if target.has_letter(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

/// Per-position statuses for one complete guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate every position of `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_pro::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let target = Word::new("perro").unwrap();
    /// let guess = Word::new("rooer").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// // Every letter is checked on its own, so both Rs and both Os are present
    /// assert_eq!(feedback.statuses(), &[Present; 5]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (i, status) in statuses.iter_mut().enumerate() {
            *status = evaluate(guess, target, i);
        }
        Self(statuses)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a single position
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Render as a row of share symbols, e.g. "🟩🟨⬛🟩🟩"
    #[must_use]
    pub fn to_share_symbols(&self) -> String {
        self.0.iter().map(|s| s.share_symbol()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn status_ordering_matches_upgrade_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }

    #[test]
    fn exact_match_is_perfect() {
        let fb = feedback("panda", "panda");
        assert_eq!(fb, Feedback::PERFECT);
        assert!(fb.is_perfect());
        assert_eq!(fb.to_share_symbols(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        let fb = feedback("quick", "perro");
        assert_eq!(fb.statuses(), &[Absent; 5]);
        assert!(!fb.is_perfect());
    }

    #[test]
    fn repeated_guess_letter_is_not_count_limited() {
        // GATOS holds a single A; the second A in GATAS is still present
        let fb = feedback("gatas", "gatos");
        assert_eq!(fb.statuses(), &[Correct, Correct, Correct, Present, Correct]);
    }

    #[test]
    fn duplicate_letters_checked_independently() {
        let fb = feedback("rooer", "perro");
        assert_eq!(fb.statuses(), &[Present; 5]);
    }

    #[test]
    fn mixed_feedback() {
        let fb = feedback("libro", "perro");
        assert_eq!(fb.statuses(), &[Absent, Absent, Absent, Correct, Correct]);

        let fb = feedback("plano", "panda");
        assert_eq!(fb.statuses(), &[Correct, Absent, Present, Present, Absent]);
    }

    #[test]
    fn share_symbols() {
        let fb = Feedback::new([Correct, Present, Absent, Correct, Absent]);
        assert_eq!(fb.to_share_symbols(), "🟩🟨⬛🟩⬛");
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        proptest::collection::vec(
            prop_oneof![proptest::char::range('A', 'Z'), Just('Ñ')],
            WORD_LENGTH,
        )
        .prop_map(|letters| Word::new(letters.into_iter().collect::<String>()).unwrap())
    }

    proptest! {
        #[test]
        fn correct_iff_same_letter_at_position(guess in word_strategy(), target in word_strategy()) {
            let fb = Feedback::evaluate(&guess, &target);
            for i in 0..WORD_LENGTH {
                let same = guess.char_at(i) == target.char_at(i);
                prop_assert_eq!(fb.status_at(i) == Correct, same);
            }
        }

        #[test]
        fn present_iff_letter_elsewhere(guess in word_strategy(), target in word_strategy()) {
            let fb = Feedback::evaluate(&guess, &target);
            for i in 0..WORD_LENGTH {
                let letter = guess.char_at(i);
                let expected = if target.char_at(i) == letter {
                    Correct
                } else if target.chars().contains(&letter) {
                    Present
                } else {
                    Absent
                };
                prop_assert_eq!(fb.status_at(i), expected);
            }
        }

        #[test]
        fn word_against_itself_is_perfect(word in word_strategy()) {
            prop_assert!(Feedback::evaluate(&word, &word).is_perfect());
        }
    }
}
