//! Aggregated per-letter status for keyboard coloring

use super::feedback::{Feedback, LetterStatus};
use super::word::Word;
use rustc_hash::FxHashMap;

/// Letter rows of the on-screen keyboard, top to bottom
///
/// ENTER sits left of the last row and DEL right of it.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Best status seen so far for every guessed letter
///
/// Statuses only move up (`Absent < Present < Correct`); a letter already
/// known to be correct is never downgraded by a later attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<char, LetterStatus>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status for a letter, keeping the better of old and new
    ///
    /// Returns true if the stored status changed.
    pub fn record(&mut self, letter: char, status: LetterStatus) -> bool {
        match self.states.get(&letter) {
            Some(&current) if current >= status => false,
            _ => {
                self.states.insert(letter, status);
                true
            }
        }
    }

    /// Record every position of an evaluated attempt
    pub fn record_attempt(&mut self, word: &Word, feedback: &Feedback) {
        for (&letter, &status) in word.chars().iter().zip(feedback.statuses()) {
            self.record(letter, status);
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.states.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_status_is_always_recorded() {
        let mut states = LetterStates::new();
        assert!(states.record('A', Absent));
        assert_eq!(states.get('A'), Some(Absent));
        assert_eq!(states.get('B'), None);
    }

    #[test]
    fn statuses_upgrade() {
        let mut states = LetterStates::new();
        states.record('R', Absent);
        assert!(states.record('R', Present));
        assert!(states.record('R', Correct));
        assert_eq!(states.get('R'), Some(Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut states = LetterStates::new();
        states.record('R', Correct);
        assert!(!states.record('R', Present));
        assert!(!states.record('R', Absent));
        assert_eq!(states.get('R'), Some(Correct));
    }

    #[test]
    fn present_is_not_downgraded_to_absent() {
        let mut states = LetterStates::new();
        states.record('E', Present);
        assert!(!states.record('E', Absent));
        assert_eq!(states.get('E'), Some(Present));
    }

    #[test]
    fn record_attempt_keeps_best_for_repeated_letters() {
        let target = Word::new("perro").unwrap();
        let guess = Word::new("rubor").unwrap();
        let feedback = Feedback::evaluate(&guess, &target);

        let mut states = LetterStates::new();
        states.record_attempt(&guess, &feedback);

        // Second R is present, first R is present too; O is present; U, B absent
        assert_eq!(states.get('R'), Some(Present));
        assert_eq!(states.get('U'), Some(Absent));
        assert_eq!(states.get('O'), Some(Present));
        assert_eq!(states.len(), 4);
    }

    #[test]
    fn keyboard_covers_alphabet_and_extra_letter() {
        let letters: String = KEYBOARD_ROWS.concat();
        assert_eq!(letters.chars().count(), 27);
        for c in 'A'..='Z' {
            assert!(letters.contains(c), "missing {c}");
        }
        assert!(letters.contains('Ñ'));
    }

    fn status_strategy() -> impl Strategy<Value = LetterStatus> {
        prop_oneof![Just(Absent), Just(Present), Just(Correct)]
    }

    proptest! {
        #[test]
        fn stored_status_is_max_of_recorded(history in proptest::collection::vec(status_strategy(), 1..20)) {
            let mut states = LetterStates::new();
            let mut best = history[0];
            for &status in &history {
                states.record('X', status);
                best = best.max(status);
                prop_assert_eq!(states.get('X'), Some(best));
            }
        }
    }
}
