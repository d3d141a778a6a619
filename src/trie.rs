//! Prefix tree over the dictionary, used as the pruning oracle during search.
//!
//! The trie is built once from the whole dictionary before any search starts and is
//! read-only afterwards, so it can be shared freely between concurrent searches.

use std::collections::HashMap;

/// Outcome of looking a string up in the [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Some character has no matching child: nothing in the dictionary starts this way.
    NoMatch,
    /// A complete word that no other dictionary word extends.
    WordOnly,
    /// Not a word, but at least one dictionary word starts with it.
    PrefixOnly,
    /// A complete word that is also the prefix of a longer word.
    WordAndPrefix,
}

impl Classification {
    /// True for the outcomes that should be recorded as a found word.
    #[must_use]
    pub fn is_word(self) -> bool {
        matches!(self, Classification::WordOnly | Classification::WordAndPrefix)
    }

    /// True when longer strings may still match, i.e. the search should keep going.
    #[must_use]
    pub fn can_extend(self) -> bool {
        matches!(self, Classification::PrefixOnly | Classification::WordAndPrefix)
    }
}

/// One node of the trie. The path from the root to the node spells a prefix.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// The child reached by `c`, if any dictionary word continues that way.
    #[must_use]
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Classify the prefix that ends at this node.
    ///
    /// A non-terminal node with no children can only be the root of an empty trie.
    #[must_use]
    pub fn classification(&self) -> Classification {
        match (self.terminal, self.children.is_empty()) {
            (true, true) => Classification::WordOnly,
            (true, false) => Classification::WordAndPrefix,
            (false, false) => Classification::PrefixOnly,
            (false, true) => Classification::NoMatch,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    num_words: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`, creating nodes as needed and marking the last one terminal.
    ///
    /// Inserting a word that is already present changes nothing.
    /// Callers must not pass an empty word.
    pub fn insert(&mut self, word: &str) {
        debug_assert!(!word.is_empty(), "empty words cannot be inserted into the trie");

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.entry(c).or_default();
        }
        if !current.terminal {
            current.terminal = true;
            self.num_words += 1;
        }
    }

    /// Walk `prefix` from the root one character at a time and classify where it ends.
    #[must_use]
    pub fn classify(&self, prefix: &str) -> Classification {
        self.node_for(prefix)
            .map_or(Classification::NoMatch, TrieNode::classification)
    }

    /// True if `word` was inserted as a complete word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node_for(word).is_some_and(TrieNode::is_terminal)
    }

    /// The node at the end of `prefix`, or `None` as soon as a character is missing.
    #[must_use]
    pub fn node_for(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["cat", "car", "cart", "dog", "do"].into_iter().collect()
    }

    #[test]
    fn test_classify_four_outcomes() {
        let trie = sample();
        assert_eq!(trie.classify("cat"), Classification::WordOnly);
        assert_eq!(trie.classify("car"), Classification::WordAndPrefix);
        assert_eq!(trie.classify("ca"), Classification::PrefixOnly);
        assert_eq!(trie.classify("cx"), Classification::NoMatch);
    }

    #[test]
    fn test_dead_branch_is_no_match_even_past_a_word() {
        let trie = sample();
        assert_eq!(trie.classify("cats"), Classification::NoMatch);
        assert_eq!(trie.classify("xcat"), Classification::NoMatch);
    }

    #[test]
    fn test_inserted_words_never_no_match() {
        let words = ["cat", "car", "cart", "dog", "do"];
        let trie: Trie = words.into_iter().collect();
        for w in words {
            assert!(trie.classify(w).is_word(), "{w} should classify as a word");
        }
    }

    #[test]
    fn test_strict_prefixes_can_extend() {
        let words = ["cart", "dog", "abracadabra"];
        let trie: Trie = words.into_iter().collect();
        for w in words {
            for (i, _) in w.char_indices().skip(1) {
                let p = &w[..i];
                assert!(trie.classify(p).can_extend(), "prefix {p} of {w} should extend");
            }
        }
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut once = Trie::new();
        once.insert("cart");
        once.insert("car");

        let mut twice = once.clone();
        twice.insert("cart");
        twice.insert("car");

        for probe in ["c", "ca", "car", "cart", "carts", "x"] {
            assert_eq!(once.classify(probe), twice.classify(probe));
        }
        assert_eq!(twice.len(), 2);
    }

    #[test]
    fn test_empty_trie_matches_nothing() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.classify("ab"), Classification::NoMatch);
        assert_eq!(trie.classify(""), Classification::NoMatch);
    }

    #[test]
    fn test_case_sensitive() {
        let trie: Trie = ["Cat"].into_iter().collect();
        assert_eq!(trie.classify("Cat"), Classification::WordOnly);
        assert_eq!(trie.classify("cat"), Classification::NoMatch);
    }

    #[test]
    fn test_non_ascii_words() {
        let trie: Trie = ["ÄPFEL", "ÄP"].into_iter().collect();
        assert_eq!(trie.classify("ÄP"), Classification::WordAndPrefix);
        assert_eq!(trie.classify("ÄPF"), Classification::PrefixOnly);
        assert!(trie.contains("ÄPFEL"));
        assert!(!trie.contains("ÄPF"));
    }
}
