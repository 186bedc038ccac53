//! Sequential reveal of a submitted row
//!
//! After a submission the row is uncovered one cell at a time, left to right.
//! Front ends pull steps on their own timer; the controller refuses input
//! until the sequence is drained.

use super::state::Attempt;
use crate::core::{Feedback, LetterStatus, WORD_LENGTH};

/// One uncovered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub row: usize,
    pub position: usize,
    pub letter: char,
    pub status: LetterStatus,
}

/// Ordered, non-overlapping reveal steps for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequence {
    row: usize,
    letters: [char; WORD_LENGTH],
    feedback: Feedback,
    next: usize,
}

impl RevealSequence {
    #[must_use]
    pub fn new(row: usize, attempt: &Attempt) -> Self {
        Self {
            row,
            letters: *attempt.word().chars(),
            feedback: *attempt.feedback(),
            next: 0,
        }
    }

    /// Grid row being revealed
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Number of cells already uncovered
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.next
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.next >= WORD_LENGTH
    }
}

impl Iterator for RevealSequence {
    type Item = RevealStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_complete() {
            return None;
        }
        let position = self.next;
        self.next += 1;
        Some(RevealStep {
            row: self.row,
            position,
            letter: self.letters[position],
            status: self.feedback.status_at(position),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = WORD_LENGTH.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealSequence {}
