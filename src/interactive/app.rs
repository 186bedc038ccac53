//! TUI application state and logic

use crate::game::{GameController, GameError, GameOutcome, InputEffect, Key};
use crate::output::formatters::{DELETE_LABEL, ENTER_LABEL};
use crate::store::StateStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the error cue stays on the current row
const SHAKE_DURATION: Duration = Duration::from_millis(400);

/// Poll interval while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S: StateStore> {
    pub controller: GameController<S>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub reveal_delay: Duration,
    pub next_reveal_at: Option<Instant>,
    pub shake_until: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Help,
    Summary,
    Share,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: StateStore> App<S> {
    #[must_use]
    pub fn new(controller: GameController<S>, reveal_delay: Duration) -> Self {
        let input_mode = if controller.should_show_tutorial() {
            InputMode::Help
        } else {
            InputMode::Playing
        };

        Self {
            controller,
            input_mode,
            messages: vec![Message {
                text: "Type a word and press Enter. Esc quits, ? shows the rules.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            reveal_delay,
            next_reveal_at: None,
            shake_until: None,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Whether the error cue is currently shown
    #[must_use]
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    pub fn new_game(&mut self) {
        self.controller.new_game();
        self.input_mode = InputMode::Playing;
        self.next_reveal_at = None;
        self.shake_until = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Help => {
                self.controller.mark_tutorial_seen();
                self.input_mode = InputMode::Playing;
            }
            InputMode::Summary => match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('s' | 'S') => self.input_mode = InputMode::Share,
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            InputMode::Share => self.input_mode = InputMode::Summary,
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.input_mode = InputMode::Help,
                code => {
                    if let Some(key) = key_label(code).as_deref().and_then(Key::parse) {
                        self.apply_key(key, now);
                    }
                }
            },
        }
    }

    fn apply_key(&mut self, key: Key, now: Instant) {
        match self.controller.handle_key(key) {
            InputEffect::Rejected(GameError::IncompleteGuess { .. }) => {
                self.shake_until = Some(now + SHAKE_DURATION);
                self.add_message("Not enough letters!", MessageStyle::Error);
            }
            InputEffect::Rejected(GameError::GameOver) => {
                self.input_mode = InputMode::Summary;
            }
            InputEffect::Submitted(outcome) => {
                self.next_reveal_at = Some(now);
                if outcome == GameOutcome::Ongoing {
                    let left = self.controller.state().attempts_remaining();
                    self.add_message(&format!("{left} attempts remaining"), MessageStyle::Info);
                }
            }
            InputEffect::Typed(_)
            | InputEffect::Deleted
            | InputEffect::Ignored
            | InputEffect::Busy => {}
        }
    }

    /// Advance timed animations
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(due) = self.next_reveal_at
            && now >= due
        {
            if self.controller.advance_reveal().is_some() && self.controller.is_revealing() {
                self.next_reveal_at = Some(now + self.reveal_delay);
            } else {
                self.next_reveal_at = None;
                self.on_reveal_complete();
            }
        }

        if !self.is_shaking(now) {
            self.shake_until = None;
        }
    }

    fn on_reveal_complete(&mut self) {
        let Some(summary) = self.controller.summary() else {
            return;
        };
        let (text, style) = if summary.won {
            (
                format!("Solved! +{} points", summary.points),
                MessageStyle::Success,
            )
        } else {
            (
                format!("Out of attempts. The word was {}", summary.target),
                MessageStyle::Error,
            )
        };
        self.add_message(&text, style);
        self.input_mode = InputMode::Summary;
    }

    /// How long the event loop may block before the next animation step
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match (self.next_reveal_at, self.shake_until) {
            (Some(due), _) => due.saturating_duration_since(now),
            (None, Some(until)) => until.saturating_duration_since(now).min(IDLE_POLL),
            (None, None) => IDLE_POLL,
        }
    }
}

/// Name of a terminal key as drawn on the on-screen keyboard
fn key_label(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some(ENTER_LABEL.to_string()),
        KeyCode::Backspace | KeyCode::Delete => Some(DELETE_LABEL.to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StateStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(app.poll_timeout(now))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key, Instant::now());
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
