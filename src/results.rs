//! Found words and the first-wins, alphabetically ordered result set.

use crate::direction::{Coord, Direction};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// One word found in the grid: where it starts and how to walk it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub start: Coord,
    /// One move per character after the first; never contains `Direction::Source`.
    pub path: Vec<Direction>,
}

impl FoundWord {
    /// The path as a string of direction labels, e.g. `"RRD"`.
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path.iter().map(|d| d.label()).collect()
    }

    /// Every cell visited, origin first.
    #[must_use]
    pub fn cells(&self) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(self.path.len() + 1);
        cells.push(self.start);
        let mut current = self.start;
        for &d in &self.path {
            current = current.step(d);
            cells.push(current);
        }
        cells
    }
}

/// Tab-separated `word x y path`.
impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.word, self.start.x, self.start.y, self.path_string())
    }
}

/// Results keyed by word. The first entry recorded for a word is kept and any later
/// one is ignored, whatever its start or path.
#[derive(Debug, Default, Clone)]
pub struct ResultSet {
    entries: BTreeMap<String, FoundWord>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Record `found` unless its word is already present. Returns whether it was kept.
    pub fn insert(&mut self, found: FoundWord) -> bool {
        match self.entries.entry(found.word.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(found);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Merge another set's entries in their iteration order, keeping existing words.
    pub fn extend<I: IntoIterator<Item = FoundWord>>(&mut self, iter: I) {
        for found in iter {
            self.insert(found);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by word in ascending code-point order (case-sensitive).
    #[must_use]
    pub fn into_sorted(self) -> Vec<FoundWord> {
        self.entries.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(word: &str, x: isize, y: isize, path: &str) -> FoundWord {
        FoundWord {
            word: word.to_string(),
            start: Coord::new(x, y),
            path: path.chars().map(|c| Direction::from_label(c).unwrap()).collect(),
        }
    }

    #[test]
    fn test_first_insert_wins() {
        let mut set = ResultSet::new();
        assert!(set.insert(found("AB", 1, 2, "R")));
        assert!(!set.insert(found("AB", 2, 1, "L")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.into_sorted(), vec![found("AB", 1, 2, "R")]);
    }

    #[test]
    fn test_sorted_case_sensitive() {
        let mut set = ResultSet::new();
        for w in ["cat", "Dog", "ant", "Zebra", "bee"] {
            set.insert(found(w, 1, 1, "R"));
        }
        let words: Vec<_> = set.into_sorted().into_iter().map(|f| f.word).collect();
        assert_eq!(words, vec!["Dog", "Zebra", "ant", "bee", "cat"]);
    }

    #[test]
    fn test_display_is_tab_separated() {
        assert_eq!(found("CAT", 1, 3, "RR").to_string(), "CAT\t1\t3\tRR");
    }

    #[test]
    fn test_cells_follow_path() {
        let f = found("CART", 1, 3, "RSU");
        assert_eq!(
            f.cells(),
            vec![Coord::new(1, 3), Coord::new(2, 3), Coord::new(3, 2), Coord::new(3, 3)]
        );
    }

    #[test]
    fn test_extend_keeps_existing() {
        let mut set = ResultSet::new();
        set.insert(found("AB", 1, 1, "U"));
        set.extend([found("AB", 5, 5, "D"), found("BA", 1, 1, "R")]);
        let sorted = set.into_sorted();
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].start, Coord::new(1, 1));
    }
}
