//! Word → count mapping that remembers first-seen order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Word frequencies. Keys are unique; iteration follows the order in which
/// each word was first seen, which is what makes tie-breaking deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` occurrences of `word`.
    pub fn add(&mut self, word: &str, n: u64) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), n));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of tokens counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// (word, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }

    /// Keeps only the entries for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        self.entries.retain(|(w, n)| keep(w, *n));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (w, _))| (w.clone(), i))
            .collect();
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for word in iter {
            map.add(word.as_ref(), 1);
        }
        map
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            out.serialize_entry(word, count)?;
        }
        out.end()
    }
}
