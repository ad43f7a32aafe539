//! Stop-word filtering
//!
//! Common determiners, conjunctions and prepositions are excluded from the
//! report. Matching is case-insensitive.

use std::collections::HashSet;

use crate::counter::FrequencyMap;

/// Words excluded from reporting by default.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// A filter for removing stop-words from a frequency mapping
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stop-words (lowercase)
    words: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOP_WORDS)
    }
}

impl StopwordFilter {
    /// Create a filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add additional stop-words to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stop-word
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of stop-words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns a copy of `map` without stop-word entries.
    pub fn filter(&self, map: &FrequencyMap) -> FrequencyMap {
        let mut kept = map.clone();
        kept.retain(|word, _| !self.is_stopword(word));
        kept
    }
}
