//! Target dictionary
//!
//! The game draws its secret word from a closed, non-empty dictionary. The
//! default list is embedded in the binary; a custom list can be loaded from a
//! file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid five-letter words")]
    Empty,
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Closed, non-empty set of possible target words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Panics
    ///
    /// Never in practice: the build script rejects an empty word file.
    #[must_use]
    pub fn embedded() -> Self {
        let words = loader::words_from_slice(WORDS);
        assert!(!words.is_empty(), "embedded dictionary is empty");
        Self { words }
    }

    /// Load a dictionary from a word list file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(words)
    }

    /// Pick a target word uniformly at random
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // `words` is never empty
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert_eq!(WORDS_COUNT, 15);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "'{word}' is not a valid word");
            assert_eq!(word, word.to_uppercase());
        }
        assert_eq!(Dictionary::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert!(matches!(Dictionary::new(Vec::new()), Err(DictionaryError::Empty)));
    }

    #[test]
    fn random_pick_is_member_and_reproducible() {
        let dictionary = Dictionary::embedded();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let pick = dictionary.random(&mut a);
            assert!(WORDS.contains(&pick.text()));
            assert_eq!(pick, dictionary.random(&mut b));
        }
    }

    #[test]
    fn single_word_dictionary_always_picks_it() {
        let dictionary = Dictionary::new(vec![Word::new("panda").unwrap()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(dictionary.random(&mut rng).text(), "PANDA");
    }

    #[test]
    fn from_file_with_no_valid_words_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"abc\n123456\n").unwrap();
        assert!(matches!(
            Dictionary::from_file(file.path()),
            Err(DictionaryError::Empty)
        ));
    }
}
