//! Formatting utilities for terminal output

use crate::core::{KEYBOARD_ROWS, LetterStatus};
use crate::game::{Cell, GridRow};
use colored::{ColoredString, Colorize};

pub const ENTER_LABEL: &str = "ENTER";
pub const DELETE_LABEL: &str = "DEL";

/// Rules shown the first time the game starts
pub const HOW_TO_PLAY: &[&str] = &[
    "Guess the secret five-letter word in six tries.",
    "Each guess must have five letters (A-Z or Ñ).",
    "After a guess every tile changes color:",
    "  green  - right letter in the right spot",
    "  yellow - letter is in the word, but elsewhere",
    "  gray   - letter is not in the word",
    "A win is worth (7 - attempts) x 100 points and grows your streak.",
];

/// Paint a letter tile according to its status
#[must_use]
pub fn paint_tile(text: &str, status: Option<LetterStatus>) -> ColoredString {
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Text of one grid cell, e.g. " A " or " _ " for an empty one
#[must_use]
pub fn cell_text(cell: &Cell) -> String {
    format!(" {} ", cell.letter.unwrap_or('_'))
}

/// One grid row as colored tiles
#[must_use]
pub fn format_row(row: &GridRow) -> String {
    row.iter()
        .map(|cell| paint_tile(&cell_text(cell), cell.status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The on-screen keyboard as colored lines
#[must_use]
pub fn format_keyboard(status_of: impl Fn(char) -> Option<LetterStatus>) -> Vec<String> {
    let last = KEYBOARD_ROWS.len() - 1;
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut keys: Vec<String> = row
                .chars()
                .map(|c| paint_tile(&format!(" {c} "), status_of(c)).to_string())
                .collect();
            if i == last {
                keys.insert(0, ENTER_LABEL.dimmed().to_string());
                keys.push(DELETE_LABEL.dimmed().to_string());
            }
            format!("{:indent$}{}", "", keys.join(" "), indent = i * 2)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Color stays off for the whole test binary; toggling it back would race
    // with tests running in parallel
    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn cell_text_shows_placeholder() {
        assert_eq!(cell_text(&Cell::default()), " _ ");
        let cell = Cell {
            letter: Some('Ñ'),
            status: Some(LetterStatus::Present),
        };
        assert_eq!(cell_text(&cell), " Ñ ");
    }

    #[test]
    fn row_joins_cells() {
        let mut row = [Cell::default(); 5];
        row[0].letter = Some('P');
        let text = plain(|| format_row(&row));
        assert_eq!(text, " P   _   _   _   _ ");
    }

    #[test]
    fn keyboard_has_three_rows_with_controls() {
        let lines = plain(|| format_keyboard(|_| None));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q "));
        assert!(lines[1].contains(" Ñ "));
        assert!(lines[2].trim_start().starts_with(ENTER_LABEL));
        assert!(lines[2].ends_with(DELETE_LABEL));
    }
}
