//! Error types for loading puzzles, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - B001: `SingleCharacterWord` (Dictionary contains a one-character word)
//! - B002: `RaggedGrid` (Grid rows have different lengths)
//! - B003: `Io` (Input file could not be read)
//!
//! The search itself never fails; every error here is raised while turning raw text
//! into a [`crate::dictionary::Dictionary`] or a [`crate::grid::Grid`].
//!
//! # Examples
//!
//! ```
//! use boggle::dictionary::Dictionary;
//!
//! match Dictionary::parse_from_str("cat\na\ndog") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "B001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Invalid dictionary: word \"{word}\" on line {line} has only one character")]
    SingleCharacterWord { line: usize, word: String },

    #[error("Invalid grid: row {row} has {found} characters, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to read {what} from '{path}': {source}")]
    Io {
        what: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::SingleCharacterWord { .. } => "B001",
            PuzzleError::RaggedGrid { .. } => "B002",
            PuzzleError::Io { .. } => "B003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::SingleCharacterWord { .. } => "Dictionary contains a one-character word",
            PuzzleError::RaggedGrid { .. } => "Grid rows have different lengths",
            PuzzleError::Io { .. } => "Input file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::SingleCharacterWord { .. } => "Every dictionary word must be at least two characters long. A single letter would match every cell of that letter, so the whole dictionary is rejected.",
            PuzzleError::RaggedGrid { .. } => "The grid must be rectangular. Each row is compared with the row before it and the first mismatch rejects the grid.",
            PuzzleError::Io { .. } => "The dictionary or grid file could not be opened or was not valid UTF-8.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::SingleCharacterWord { .. } => Some("Remove one-letter entries from the word list (one word per line)"),
            PuzzleError::RaggedGrid { .. } => Some("Pad or trim the grid so every row has the same number of letters"),
            PuzzleError::Io { .. } => Some("Check that the path exists and the file is readable UTF-8 text"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
