//! Game controller
//!
//! Drives one `GameState` at a time on behalf of a front end: routes keys,
//! holds back input while a row is being revealed, applies scoring exactly
//! once per finished game and persists the counters through the injected
//! store.

use super::input::Key;
use super::reveal::{RevealSequence, RevealStep};
use super::score::{GameSummary, ScoreTracker, Stats};
use super::share::share_text;
use super::state::{GameError, GameOutcome, GameState, MAX_ATTEMPTS};
use crate::core::{LetterStates, LetterStatus, WORD_LENGTH, Word};
use crate::store::StateStore;
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    Typed(char),
    Deleted,
    Submitted(GameOutcome),
    /// The submission was refused; front ends show a shake or error cue
    Rejected(GameError),
    /// Nothing changed (full row, empty row, finished game)
    Ignored,
    /// A row is still being revealed
    Busy,
}

/// One grid cell as a front end should draw it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: Option<LetterStatus>,
}

pub type GridRow = [Cell; WORD_LENGTH];

pub struct GameController<S: StateStore> {
    dictionary: Dictionary,
    rng: StdRng,
    state: GameState,
    scores: ScoreTracker,
    store: S,
    reveal: Option<RevealSequence>,
    keyboard: LetterStates,
    /// Counters as front ends should show them; they catch up with
    /// `scores` once the final row is revealed
    shown_stats: Stats,
    summary: Option<GameSummary>,
    share_url: Option<String>,
}

impl<S: StateStore> GameController<S> {
    /// Start a controller with a random target
    ///
    /// Counters are read from `store`; missing values start at zero.
    pub fn new(dictionary: Dictionary, store: S, mut rng: StdRng) -> Self {
        let target = dictionary.random(&mut rng).clone();
        let stats = store.load_stats();
        tracing::info!(score = stats.score, streak = stats.streak, "loaded stats");

        let controller = Self {
            dictionary,
            rng,
            state: GameState::new(target),
            scores: ScoreTracker::new(stats),
            store,
            reveal: None,
            keyboard: LetterStates::new(),
            shown_stats: stats,
            summary: None,
            share_url: None,
        };
        tracing::trace!(word = %controller.state.target(), "new game");
        controller
    }

    /// Seeded constructor for reproducible games
    pub fn with_seed(dictionary: Dictionary, store: S, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(dictionary, store, rng)
    }

    /// Append an invitation link to the share transcript
    #[must_use]
    pub fn with_share_url(mut self, url: Option<String>) -> Self {
        self.share_url = url;
        self
    }

    /// Abandon the current round and draw a new target
    pub fn new_game(&mut self) {
        let target = self.dictionary.random(&mut self.rng).clone();
        self.new_game_with(target);
    }

    /// Start a round with a chosen target
    pub fn new_game_with(&mut self, target: Word) {
        tracing::trace!(word = %target, "new game");
        self.state = GameState::new(target);
        self.reveal = None;
        self.keyboard = LetterStates::new();
        self.shown_stats = self.scores.stats();
        self.summary = None;
    }

    pub fn handle_key(&mut self, key: Key) -> InputEffect {
        if self.is_revealing() {
            return InputEffect::Busy;
        }
        if self.state.is_over() {
            return InputEffect::Ignored;
        }

        let effect = match key {
            Key::Letter(c) => {
                if self.state.append_letter(c) {
                    InputEffect::Typed(c)
                } else {
                    InputEffect::Ignored
                }
            }
            Key::Delete => {
                if self.state.delete_letter() {
                    InputEffect::Deleted
                } else {
                    InputEffect::Ignored
                }
            }
            Key::Enter => self.submit(),
        };
        tracing::debug!(?key, ?effect, "handled key");
        effect
    }

    fn submit(&mut self) -> InputEffect {
        match self.state.submit_guess() {
            Ok(submission) => {
                tracing::debug!(
                    guess = %submission.attempt.word(),
                    feedback = %submission.attempt.feedback().to_share_symbols(),
                    outcome = ?submission.outcome,
                    "guess submitted"
                );
                self.reveal = Some(submission.reveal);
                if submission.outcome.is_over() {
                    self.finish(submission.outcome);
                }
                InputEffect::Submitted(submission.outcome)
            }
            Err(e) => InputEffect::Rejected(e),
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        let attempts = self.state.attempts().len();
        let Some(update) = self.scores.record(outcome, attempts) else {
            return;
        };

        tracing::info!(
            won = outcome == GameOutcome::Won,
            attempts,
            points = update.points,
            score = update.stats.score,
            streak = update.stats.streak,
            "game finished"
        );

        if let Err(e) = self.store.save_stats(update.stats) {
            tracing::warn!(error = %e, "failed to save stats");
        }

        self.summary = Some(GameSummary {
            won: outcome == GameOutcome::Won,
            target: self.state.target().clone(),
            attempts,
            points: update.points,
            stats: update.stats,
        });
    }

    /// Uncover the next cell of the pending row
    ///
    /// Returns `None` when nothing is being revealed. The keyboard and the
    /// displayed counters catch up once the row's last cell is shown.
    pub fn advance_reveal(&mut self) -> Option<RevealStep> {
        let reveal = self.reveal.as_mut()?;
        let step = reveal.next();
        if reveal.is_complete() {
            self.reveal = None;
            self.keyboard = self.state.letter_states().clone();
            self.shown_stats = self.scores.stats();
        }
        step
    }

    /// Uncover every remaining cell at once
    pub fn finish_reveal(&mut self) {
        while self.advance_reveal().is_some() {}
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Grid contents, `MAX_ATTEMPTS` rows of `WORD_LENGTH` cells
    #[must_use]
    pub fn grid(&self) -> Vec<GridRow> {
        let attempts = self.state.attempts();
        let mut rows = vec![[Cell::default(); WORD_LENGTH]; MAX_ATTEMPTS];

        for (i, attempt) in attempts.iter().enumerate() {
            let shown = match &self.reveal {
                Some(reveal) if reveal.row() == i => reveal.revealed(),
                _ => WORD_LENGTH,
            };
            for (pos, cell) in rows[i].iter_mut().enumerate() {
                cell.letter = Some(attempt.word().char_at(pos));
                if pos < shown {
                    cell.status = Some(attempt.feedback().status_at(pos));
                }
            }
        }

        if let Some(row) = rows.get_mut(attempts.len()) {
            for (cell, letter) in row.iter_mut().zip(self.state.current_guess().chars()) {
                cell.letter = Some(letter);
            }
        }

        rows
    }

    /// Aggregated status for keyboard coloring
    #[must_use]
    pub fn key_status(&self, letter: char) -> Option<LetterStatus> {
        self.keyboard.get(letter)
    }

    /// End-of-game report, available once the final row is revealed
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref().filter(|_| !self.is_revealing())
    }

    /// Transcript of the finished game, if there is one
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.summary()?;
        Some(share_text(
            self.state.attempts(),
            self.stats(),
            self.share_url.as_deref(),
        ))
    }

    /// Score and streak as of the last fully revealed row
    ///
    /// A finished game is saved right away, but its points only show up
    /// here after the reveal.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.shown_stats
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn should_show_tutorial(&self) -> bool {
        !self.store.tutorial_seen()
    }

    pub fn mark_tutorial_seen(&mut self) {
        if let Err(e) = self.store.mark_tutorial_seen() {
            tracing::warn!(error = %e, "failed to save tutorial flag");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError, StoreKey};

    fn controller(target: &str) -> GameController<MemoryStore> {
        controller_with(target, MemoryStore::new())
    }

    fn controller_with<S: StateStore>(target: &str, store: S) -> GameController<S> {
        let mut c = GameController::with_seed(Dictionary::embedded(), store, Some(42));
        c.new_game_with(Word::new(target).unwrap());
        c
    }

    fn enter_word<S: StateStore>(c: &mut GameController<S>, word: &str) -> InputEffect {
        for ch in word.chars() {
            c.handle_key(Key::from_char(ch).unwrap());
        }
        let effect = c.handle_key(Key::Enter);
        c.finish_reveal();
        effect
    }

    #[test]
    fn typing_fills_current_row() {
        let mut c = controller("perro");
        assert_eq!(c.handle_key(Key::Letter('G')), InputEffect::Typed('G'));
        assert_eq!(c.handle_key(Key::Letter('A')), InputEffect::Typed('A'));
        assert_eq!(c.handle_key(Key::Delete), InputEffect::Deleted);
        assert_eq!(c.handle_key(Key::Delete), InputEffect::Ignored);

        c.handle_key(Key::Letter('Q'));
        let grid = c.grid();
        assert_eq!(grid.len(), MAX_ATTEMPTS);
        assert_eq!(grid[0][0], Cell { letter: Some('Q'), status: None });
        assert_eq!(grid[0][1], Cell::default());
    }

    #[test]
    fn incomplete_submission_is_rejected() {
        let mut c = controller("perro");
        c.handle_key(Key::Letter('P'));
        assert_eq!(
            c.handle_key(Key::Enter),
            InputEffect::Rejected(GameError::IncompleteGuess { len: 1 })
        );
        assert!(!c.is_revealing());
        assert!(c.state().attempts().is_empty());
    }

    #[test]
    fn input_blocked_while_revealing() {
        let mut c = controller("gatos");
        for ch in "gatas".chars() {
            c.handle_key(Key::Letter(ch.to_ascii_uppercase()));
        }
        assert_eq!(c.handle_key(Key::Enter), InputEffect::Submitted(GameOutcome::Ongoing));
        assert!(c.is_revealing());
        assert_eq!(c.handle_key(Key::Letter('X')), InputEffect::Busy);
        assert_eq!(c.handle_key(Key::Delete), InputEffect::Busy);

        // Keyboard is not colored before the row is uncovered
        assert_eq!(c.key_status('G'), None);

        let first = c.advance_reveal().unwrap();
        assert_eq!((first.position, first.letter), (0, 'G'));
        let grid = c.grid();
        assert_eq!(grid[0][0].status, Some(LetterStatus::Correct));
        assert_eq!(grid[0][1].status, None);
        assert_eq!(grid[0][1].letter, Some('A'));

        let rest: Vec<usize> = std::iter::from_fn(|| c.advance_reveal())
            .map(|s| s.position)
            .collect();
        assert_eq!(rest, [1, 2, 3, 4]);
        assert!(!c.is_revealing());
        assert_eq!(c.advance_reveal(), None);
        assert_eq!(c.key_status('G'), Some(LetterStatus::Correct));
        assert_eq!(c.handle_key(Key::Letter('X')), InputEffect::Typed('X'));
    }

    #[test]
    fn win_scores_once_and_persists() {
        let mut store = MemoryStore::new();
        store.save_stats(Stats { score: 100, streak: 2 }).unwrap();
        let mut c = controller_with("panda", store);

        enter_word(&mut c, "plano");
        enter_word(&mut c, "barco");
        assert_eq!(enter_word(&mut c, "panda"), InputEffect::Submitted(GameOutcome::Won));

        let summary = c.summary().unwrap().clone();
        assert!(summary.won);
        assert_eq!(summary.points, 400);
        assert_eq!(summary.attempts, 3);
        assert_eq!(summary.target.text(), "PANDA");
        assert_eq!(summary.stats, Stats { score: 500, streak: 3 });
        assert_eq!(c.store().load_stats(), Stats { score: 500, streak: 3 });

        // Further input is ignored and never scores again
        assert_eq!(c.handle_key(Key::Letter('A')), InputEffect::Ignored);
        assert_eq!(c.handle_key(Key::Enter), InputEffect::Ignored);
        assert_eq!(c.stats(), Stats { score: 500, streak: 3 });
    }

    #[test]
    fn loss_resets_streak() {
        let mut store = MemoryStore::new();
        store.save_stats(Stats { score: 800, streak: 5 }).unwrap();
        let mut c = controller_with("panda", store);

        for word in ["perro", "gatos", "tigre", "cebra", "pulpo"] {
            assert_eq!(enter_word(&mut c, word), InputEffect::Submitted(GameOutcome::Ongoing));
        }
        assert_eq!(enter_word(&mut c, "queso"), InputEffect::Submitted(GameOutcome::Lost));

        let summary = c.summary().unwrap();
        assert!(!summary.won);
        assert_eq!(summary.points, 0);
        assert_eq!(summary.stats, Stats { score: 800, streak: 0 });
        assert_eq!(c.store().get(StoreKey::Streak).as_deref(), Some("0"));
    }

    #[test]
    fn summary_waits_for_reveal() {
        let mut c = controller("perro");
        for ch in "PERRO".chars() {
            c.handle_key(Key::Letter(ch));
        }
        c.handle_key(Key::Enter);
        assert!(c.summary().is_none());
        assert!(c.share_text().is_none());
        c.finish_reveal();
        assert!(c.summary().is_some());
    }

    #[test]
    fn stats_unchanged_until_final_row_revealed() {
        let mut store = MemoryStore::new();
        store.save_stats(Stats { score: 100, streak: 4 }).unwrap();
        let mut c = controller_with("perro", store);
        for ch in "PERRO".chars() {
            c.handle_key(Key::Letter(ch));
        }
        c.handle_key(Key::Enter);
        c.advance_reveal();

        assert!(c.is_revealing());
        assert_eq!(c.stats(), Stats { score: 100, streak: 4 });
        // Already persisted
        assert_eq!(c.store().load_stats(), Stats { score: 700, streak: 5 });

        c.finish_reveal();
        assert_eq!(c.stats(), Stats { score: 700, streak: 5 });
    }

    #[test]
    fn loss_keeps_streak_visible_during_reveal() {
        let mut store = MemoryStore::new();
        store.save_stats(Stats { score: 300, streak: 2 }).unwrap();
        let mut c = controller_with("panda", store);
        for word in ["perro", "gatos", "tigre", "cebra", "pulpo"] {
            enter_word(&mut c, word);
        }
        for ch in "QUESO".chars() {
            c.handle_key(Key::Letter(ch));
        }
        assert_eq!(c.handle_key(Key::Enter), InputEffect::Submitted(GameOutcome::Lost));
        assert_eq!(c.stats().streak, 2);

        c.finish_reveal();
        assert_eq!(c.stats(), Stats { score: 300, streak: 0 });
    }

    #[test]
    fn share_text_lists_attempts() {
        let mut c = controller("gatos").with_share_url(Some("https://example.org".into()));
        enter_word(&mut c, "gatas");
        enter_word(&mut c, "gatos");

        let text = c.share_text().unwrap();
        assert!(text.contains("Score: 500 | Streak: 1"));
        assert!(text.contains("🟩🟩🟩🟨🟩\n🟩🟩🟩🟩🟩\n"));
        assert!(text.ends_with("https://example.org"));
    }

    #[test]
    fn new_game_clears_round_but_keeps_stats() {
        let mut c = controller("perro");
        enter_word(&mut c, "perro");
        assert_eq!(c.stats().streak, 1);

        c.new_game();
        assert!(c.summary().is_none());
        assert!(c.state().attempts().is_empty());
        assert_eq!(c.key_status('P'), None);
        assert_eq!(c.stats().streak, 1);
        assert!(c.grid().iter().flatten().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn tutorial_flag_is_persisted() {
        let mut c = controller("perro");
        assert!(c.should_show_tutorial());
        c.mark_tutorial_seen();
        assert!(!c.should_show_tutorial());
        assert!(c.store().tutorial_seen());
    }

    struct FailingStore;

    impl StateStore for FailingStore {
        fn get(&self, _key: StoreKey) -> Option<String> {
            None
        }

        fn set(&mut self, _key: StoreKey, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn store_failure_does_not_abort_game() {
        let mut c = controller_with("perro", FailingStore);
        assert_eq!(enter_word(&mut c, "perro"), InputEffect::Submitted(GameOutcome::Won));
        assert_eq!(c.stats(), Stats { score: 600, streak: 1 });
        assert!(c.summary().is_some());
    }

    #[test]
    fn seeded_controllers_pick_same_targets() {
        let mut a = GameController::with_seed(Dictionary::embedded(), MemoryStore::new(), Some(9));
        let mut b = GameController::with_seed(Dictionary::embedded(), MemoryStore::new(), Some(9));
        for _ in 0..5 {
            assert_eq!(a.state().target(), b.state().target());
            a.new_game();
            b.new_game();
        }
    }
}
