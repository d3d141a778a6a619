//! `dictionary` — load and validate the word list, then index it in a [`Trie`].
//!
//! Input is plain text, one word per line. The first empty line ends the list, so a
//! dictionary can be followed by unrelated text in the same stream. Words are kept
//! exactly as written: matching against the grid is case-sensitive.
//!
//! A word of a single character is not allowed and rejects the whole list
//! (see [`PuzzleError::SingleCharacterWord`]). This is a domain rule of the
//! game, not a limitation of the trie.
//!
//! Like the grid loader, the parser works on an in-memory `&str` so it is usable from
//! WebAssembly; [`Dictionary::load_from_path`] is a native-only convenience.

use crate::errors::PuzzleError;
use crate::trie::Trie;
use log::debug;

/// A validated word list together with its trie index.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Distinct words in first-seen order.
    words: Vec<String>,
    trie: Trie,
}

impl Dictionary {
    /// Parse a newline-separated word list.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::SingleCharacterWord`] for the first one-character line.
    pub fn parse_from_str(contents: &str) -> Result<Dictionary, PuzzleError> {
        Self::from_words(contents.lines().take_while(|line| !line.is_empty()))
    }

    /// Build a dictionary from already-split words, applying the same validation as
    /// [`Dictionary::parse_from_str`]. Empty words are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::SingleCharacterWord`] for the first one-character word.
    pub fn from_words<I, S>(words: I) -> Result<Dictionary, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::default();

        for (i, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            match word.chars().count() {
                0 => continue,
                1 => {
                    return Err(PuzzleError::SingleCharacterWord {
                        line: i + 1,
                        word: word.to_string(),
                    })
                }
                _ => {}
            }

            if !dictionary.trie.contains(word) {
                dictionary.trie.insert(word);
                dictionary.words.push(word.to_string());
            }
        }

        debug!("Dictionary ready: {} distinct words", dictionary.words.len());
        Ok(dictionary)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] if the file cannot be read, or any error from
    /// [`Dictionary::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Io {
            what: "dictionary",
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_from_str(&data)
    }

    #[must_use]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Classification;

    #[test]
    fn test_parse_basic() {
        let dict = Dictionary::parse_from_str("CAT\nCAR\nDOG").unwrap();
        assert_eq!(dict.words(), ["CAT", "CAR", "DOG"]);
        assert_eq!(dict.trie().classify("CA"), Classification::PrefixOnly);
    }

    #[test]
    fn test_parse_stops_at_first_empty_line() {
        let dict = Dictionary::parse_from_str("cat\ndog\n\nbird\nx").unwrap();
        assert_eq!(dict.words(), ["cat", "dog"]);
        assert!(!dict.trie().contains("bird"));
    }

    #[test]
    fn test_parse_rejects_single_character_word() {
        let err = Dictionary::parse_from_str("cat\na\ndog").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::SingleCharacterWord { line: 2, ref word } if word == "a"
        ));
    }

    #[test]
    fn test_single_character_after_terminator_is_ignored() {
        let dict = Dictionary::parse_from_str("cat\n\na").unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_parse_only_single_characters_rejected() {
        assert!(Dictionary::parse_from_str("a\nb\nc").is_err());
    }

    #[test]
    fn test_parse_keeps_case() {
        let dict = Dictionary::parse_from_str("Cat\ncat").unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.trie().contains("Cat"));
        assert!(dict.trie().contains("cat"));
    }

    #[test]
    fn test_parse_deduplicates() {
        let dict = Dictionary::parse_from_str("cat\ndog\ncat").unwrap();
        assert_eq!(dict.words(), ["cat", "dog"]);
        assert_eq!(dict.trie().len(), 2);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let dict = Dictionary::parse_from_str("cat\r\ndog\r\n").unwrap();
        assert_eq!(dict.words(), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let dict = Dictionary::parse_from_str("").unwrap();
        assert!(dict.is_empty());
        assert!(dict.trie().is_empty());
    }

    #[test]
    fn test_multibyte_single_character_rejected() {
        assert!(Dictionary::from_words(["ab", "é"]).is_err());
        assert!(Dictionary::from_words(["ab", "éé"]).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load_from_path("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "B003");
    }
}
