//! Input keys shared by the on-screen and physical keyboards

use crate::core::normalize_letter;

/// One player input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A playable letter, already uppercase
    Letter(char),
    Enter,
    Delete,
}

impl Key {
    /// Parse a key name as produced by a keyboard or an on-screen button
    ///
    /// Accepts single letters (any case, Ñ included), `ENTER`, `DEL`,
    /// `DELETE` and `BACKSPACE`. Anything else is not a game key. The TUI
    /// sends every terminal key through here by its on-screen label.
    ///
    /// # Examples
    /// ```
    /// use wordle_pro::game::Key;
    ///
    /// assert_eq!(Key::parse("a"), Some(Key::Letter('A')));
    /// assert_eq!(Key::parse("Backspace"), Some(Key::Delete));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }

        match name.to_uppercase().as_str() {
            "ENTER" => Some(Self::Enter),
            "DEL" | "DELETE" | "BACKSPACE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Map a typed character to a letter key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        normalize_letter(c).map(Self::Letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(Key::parse("q"), Some(Key::Letter('Q')));
        assert_eq!(Key::parse("Q"), Some(Key::Letter('Q')));
        assert_eq!(Key::parse("ñ"), Some(Key::Letter('Ñ')));
    }

    #[test]
    fn named_keys() {
        assert_eq!(Key::parse("ENTER"), Some(Key::Enter));
        assert_eq!(Key::parse("enter"), Some(Key::Enter));
        assert_eq!(Key::parse("DEL"), Some(Key::Delete));
        assert_eq!(Key::parse("BACKSPACE"), Some(Key::Delete));
        assert_eq!(Key::parse("Delete"), Some(Key::Delete));
    }

    #[test]
    fn on_screen_labels_parse() {
        use crate::output::formatters::{DELETE_LABEL, ENTER_LABEL};
        assert_eq!(Key::parse(ENTER_LABEL), Some(Key::Enter));
        assert_eq!(Key::parse(DELETE_LABEL), Some(Key::Delete));
    }

    #[test]
    fn other_input_is_ignored() {
        for name in ["", "1", " ", "Tab", "Escape", "é", "AB"] {
            assert_eq!(Key::parse(name), None, "{name:?} should not be a key");
        }
    }
}
