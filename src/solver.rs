//! The search engine: find every dictionary word in the grid.
//!
//! Every cell is used once as an origin. From each origin a depth-first, backtracking
//! walk visits unvisited neighbors in [`Direction::SEARCH_ORDER`], extending the current
//! word one character per step. The trie prunes the walk: as soon as the current word is
//! not a prefix of any dictionary word, the branch is abandoned.
//!
//! Each step classifies the current word:
//!
//! | classification  | record word | keep extending |
//! |-----------------|-------------|----------------|
//! | `NoMatch`       | no          | no             |
//! | `WordOnly`      | yes         | no             |
//! | `PrefixOnly`    | no          | yes            |
//! | `WordAndPrefix` | yes         | yes            |
//!
//! A one-character word is never classified (dictionary words have at least two
//! characters); the walk just moves on to the neighbors.
//!
//! For a word reachable along several routes only the first one found is kept. Origins
//! are taken with `x` outer and `y` inner (see [`Grid::coords`]), so results are fully
//! deterministic.
//!
//! # Examples
//!
//! ```
//! use boggle::dictionary::Dictionary;
//! use boggle::grid::Grid;
//! use boggle::solver;
//!
//! let dictionary = Dictionary::from_words(["CAT", "CAR", "DOG"])?;
//! let grid = Grid::from_rows(["CAT", "ARD", "TXG"])?;
//!
//! let result = solver::solve(dictionary.trie(), &grid);
//! for found in &result.found {
//!     println!("{found}");
//! }
//! assert_eq!(result.found.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::dictionary::Dictionary;
use crate::direction::{Coord, Direction};
use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::results::{FoundWord, ResultSet};
use crate::trie::{Classification, Trie, TrieNode};
use instant::Instant;
use log::{debug, info, trace};
use std::collections::HashSet;
use std::time::Duration;

/// Counters collected while solving.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveStats {
    /// Number of cells used as search origins.
    pub origins: usize,
    /// Number of times a cell was appended to the current word, across all origins.
    pub cells_entered: u64,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

/// Outcome of a solve.
#[derive(Debug, Clone, Default)]
pub struct SolveResult {
    /// Unique words in ascending order, each with the first route found for it.
    pub found: Vec<FoundWord>,
    pub stats: SolveStats,
}

impl SolveResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// The entry for `word`, if it was found.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&FoundWord> {
        self.found
            .binary_search_by(|f| f.word.as_str().cmp(word))
            .ok()
            .map(|i| &self.found[i])
    }
}

impl IntoIterator for SolveResult {
    type Item = FoundWord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.found.into_iter()
    }
}

/// Mutable state of one in-flight search: which cells are on the current route, the
/// word they spell and the moves between them.
///
/// Only [`SearchState::enter`] and [`SearchState::leave`] change it, and every `enter`
/// is matched by exactly one `leave`.
struct SearchState {
    visited: Vec<bool>,
    word: String,
    path: Vec<Direction>,
    origin: Coord,
    cells_entered: u64,
}

impl SearchState {
    fn new(num_cells: usize) -> Self {
        Self {
            visited: vec![false; num_cells],
            word: String::new(),
            path: Vec::new(),
            origin: Coord::new(0, 0),
            cells_entered: 0,
        }
    }

    /// Prepare for a fresh search from `origin`.
    fn reset(&mut self, origin: Coord) {
        self.visited.fill(false);
        self.word.clear();
        self.path.clear();
        self.origin = origin;
    }

    fn enter(&mut self, index: usize, c: char, direction: Direction) {
        debug_assert!(!self.visited[index], "cell {index} entered twice on one route");
        self.visited[index] = true;
        self.word.push(c);
        if direction != Direction::Source {
            self.path.push(direction);
        }
        self.cells_entered += 1;
    }

    fn leave(&mut self, index: usize, direction: Direction) {
        self.visited[index] = false;
        self.word.pop();
        if direction != Direction::Source {
            let popped = self.path.pop();
            debug_assert_eq!(popped, Some(direction), "path popped out of order");
        }
    }

    fn is_origin_only(&self) -> bool {
        self.path.is_empty()
    }

    fn to_found_word(&self) -> FoundWord {
        FoundWord {
            word: self.word.clone(),
            start: self.origin,
            path: self.path.clone(),
        }
    }
}

/// Words found from a single origin, in discovery order, without duplicates.
#[derive(Default)]
struct OriginHits {
    seen: HashSet<String>,
    hits: Vec<FoundWord>,
}

impl OriginHits {
    fn record(&mut self, state: &SearchState) {
        if !self.seen.contains(&state.word) {
            self.seen.insert(state.word.clone());
            self.hits.push(state.to_found_word());
        }
    }
}

/// Read-only inputs shared by every search.
struct Searcher<'a> {
    trie: &'a Trie,
    grid: &'a Grid,
}

impl Searcher<'_> {
    /// Run the whole depth-first search rooted at `origin`.
    fn search_origin(&self, origin: Coord, state: &mut SearchState) -> Vec<FoundWord> {
        state.reset(origin);
        let mut hits = OriginHits::default();

        self.visit(self.trie.root(), origin, Direction::Source, state, &mut hits);

        debug_assert!(state.word.is_empty() && state.path.is_empty());
        debug_assert!(state.visited.iter().all(|v| !v));
        trace!("origin {origin}: {} words", hits.hits.len());
        hits.hits
    }

    /// Step onto `coord` (reached from its parent by `direction`), explore everything
    /// below it, and restore `state` before returning.
    fn visit(
        &self,
        parent: &TrieNode,
        coord: Coord,
        direction: Direction,
        state: &mut SearchState,
        hits: &mut OriginHits,
    ) {
        let Some(index) = self.grid.index_of(coord) else {
            return;
        };
        if state.visited[index] {
            return;
        }
        let Some(c) = self.grid.char_at(coord) else {
            return;
        };
        // No child means every word through this cell classifies as NoMatch.
        let Some(node) = parent.child(c) else {
            return;
        };

        state.enter(index, c, direction);

        if state.is_origin_only() {
            self.visit_neighbors(node, coord, state, hits);
        } else {
            match node.classification() {
                Classification::NoMatch => {}
                Classification::WordOnly => hits.record(state),
                Classification::PrefixOnly => self.visit_neighbors(node, coord, state, hits),
                Classification::WordAndPrefix => {
                    hits.record(state);
                    self.visit_neighbors(node, coord, state, hits);
                }
            }
        }

        state.leave(index, direction);
    }

    fn visit_neighbors(
        &self,
        node: &TrieNode,
        coord: Coord,
        state: &mut SearchState,
        hits: &mut OriginHits,
    ) {
        for (next, direction) in Grid::neighbors(coord) {
            #[cfg(debug_assertions)]
            let before = (state.word.len(), state.path.len());

            self.visit(node, next, direction, state, hits);

            #[cfg(debug_assertions)]
            {
                debug_assert_eq!(
                    before,
                    (state.word.len(), state.path.len()),
                    "search state not restored after visiting {next}"
                );
            }
        }
    }
}

/// Find every word of `trie` in `grid`.
///
/// Returns the unique words sorted ascending. An empty grid or an empty trie yields
/// an empty result.
#[must_use]
pub fn solve(trie: &Trie, grid: &Grid) -> SolveResult {
    let start = Instant::now();
    let searcher = Searcher { trie, grid };
    let mut state = SearchState::new(grid.num_cells());
    let mut results = ResultSet::new();
    let mut origins = 0;

    for origin in grid.coords() {
        results.extend(searcher.search_origin(origin, &mut state));
        origins += 1;
    }

    finish(results, origins, state.cells_entered, start)
}

/// Like [`solve`], but searches origins concurrently on the rayon thread pool.
///
/// Hits are gathered per origin and merged afterwards in origin order, so the output is
/// identical to [`solve`], including which route is kept for each word.
#[cfg(feature = "parallel")]
#[must_use]
pub fn solve_parallel(trie: &Trie, grid: &Grid) -> SolveResult {
    use rayon::prelude::*;

    let start = Instant::now();
    let searcher = Searcher { trie, grid };
    let origins: Vec<Coord> = grid.coords().collect();

    let per_origin: Vec<(Vec<FoundWord>, u64)> = origins
        .par_iter()
        .map_init(
            || SearchState::new(grid.num_cells()),
            |state, &origin| {
                let entered_before = state.cells_entered;
                let hits = searcher.search_origin(origin, state);
                (hits, state.cells_entered - entered_before)
            },
        )
        .collect();

    let mut results = ResultSet::new();
    let mut cells_entered = 0;
    for (hits, entered) in per_origin {
        results.extend(hits);
        cells_entered += entered;
    }

    finish(results, origins.len(), cells_entered, start)
}

fn finish(results: ResultSet, origins: usize, cells_entered: u64, start: Instant) -> SolveResult {
    let found = results.into_sorted();
    let stats = SolveStats {
        origins,
        cells_entered,
        elapsed: start.elapsed(),
    };

    debug_assert!(
        found.windows(2).all(|w| w[0].word < w[1].word),
        "results must be unique and sorted"
    );
    debug_assert!(
        found.iter().all(|f| f.path.len() + 1 == f.word.chars().count()),
        "every path has one move per character after the first"
    );

    info!(
        "Solved: {} words from {} origins ({} cells entered) in {:.3}s",
        found.len(),
        stats.origins,
        stats.cells_entered,
        stats.elapsed.as_secs_f64()
    );
    SolveResult { found, stats }
}

/// Parse a dictionary and a grid from text and solve.
///
/// # Errors
///
/// Returns the first [`PuzzleError`] from [`Dictionary::parse_from_str`] or
/// [`Grid::parse_from_str`]; the search itself cannot fail.
pub fn solve_from_str(dictionary: &str, grid: &str) -> Result<SolveResult, PuzzleError> {
    let dictionary = Dictionary::parse_from_str(dictionary)?;
    let grid = Grid::parse_from_str(grid)?;
    debug!(
        "Solving {}x{} grid against {} words",
        grid.width(),
        grid.height(),
        dictionary.len()
    );
    Ok(solve(dictionary.trie(), &grid))
}
