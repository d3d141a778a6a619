//! Boggle solver: find every dictionary word hidden in a letter grid.
//!
//! Words are spelled by walking between horizontally, vertically or diagonally
//! adjacent cells without reusing a cell. Each result reports where the word starts
//! and the sequence of moves that spells it.

pub mod dictionary;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod results;
pub mod solver;
pub mod trie;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use dictionary::Dictionary;
pub use direction::{Coord, Direction};
pub use errors::PuzzleError;
pub use grid::Grid;
pub use results::FoundWord;
pub use solver::{solve, SolveResult, SolveStats};
pub use trie::{Classification, Trie};
