//! Generate error code documentation from the source of truth (the error enum).
//!
//! Reads the codes, descriptions, details and help text straight from
//! `PuzzleError::code()`, `description()`, `details()` and `help()`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use boggle::errors::PuzzleError;

/// One sample of every `PuzzleError` variant
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::SingleCharacterWord { line: 12, word: "a".to_string() },
        PuzzleError::RaggedGrid { row: 3, expected: 4, found: 5 },
        PuzzleError::Io {
            what: "dictionary",
            path: "words.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
    ]
}

fn print_error_doc(error: &PuzzleError) {
    println!("### {}: {}\n", error.code(), error.description());
    println!("**Details:** {}\n", error.details());

    if let Some(help_text) = error.help() {
        println!("**How to fix:**");
        println!("```");
        println!("{help_text}");
        println!("```\n");
    }

    println!("**Detailed format:**");
    println!("```");
    println!("{}", error.display_detailed());
    println!("```\n");

    println!("---\n");
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors\n");
    println!("Raised while loading the dictionary or the grid. The search itself never fails.\n");
    for error in &all_puzzle_error_variants() {
        print_error_doc(error);
    }

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_documented_once() {
        let codes: Vec<_> = all_puzzle_error_variants().iter().map(PuzzleError::code).collect();
        assert_eq!(codes, vec!["B001", "B002", "B003"]);
    }
}
