//! Top-N selection.

use serde::Serialize;

use crate::counter::FrequencyMap;

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Returns the `n` most frequent words, highest count first.
///
/// Equal counts keep first-seen order. Fewer than `n` words are returned when
/// the map is smaller; an empty map or `n == 0` yields an empty vector.
pub fn top_n(map: &FrequencyMap, n: usize) -> Vec<WordCount> {
    let mut ranked: Vec<(&str, u64)> = map.iter().collect();
    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}
