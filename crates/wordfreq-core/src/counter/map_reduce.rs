//! Staged map → shuffle → reduce word count.
//!
//! Each stage runs to completion before the next starts. The stages are plain
//! sequential loops; the result is identical to [`super::count_tokens`].

use std::collections::HashMap;

use super::FrequencyMap;

/// Map: every token becomes `(token, 1)`.
pub fn map_phase<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, u64)> {
    tokens
        .iter()
        .map(|t| (t.as_ref().to_string(), 1))
        .collect()
}

/// Shuffle: groups values by key. Groups appear in first-seen key order.
pub fn shuffle(pairs: Vec<(String, u64)>) -> Vec<(String, Vec<u64>)> {
    let mut groups: Vec<(String, Vec<u64>)> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    for (key, value) in pairs {
        match slot.get(&key) {
            Some(&i) => groups[i].1.push(value),
            None => {
                slot.insert(key.clone(), groups.len());
                groups.push((key, vec![value]));
            }
        }
    }
    groups
}

/// Reduce: sums each group.
pub fn reduce_phase(groups: Vec<(String, Vec<u64>)>) -> FrequencyMap {
    let mut map = FrequencyMap::new();
    for (key, values) in groups {
        map.add(&key, values.iter().sum());
    }
    map
}

/// Runs the three stages in order.
pub fn map_reduce<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    let mapped = map_phase(tokens);
    tracing::debug!("map: {} pairs", mapped.len());
    let groups = shuffle(mapped);
    tracing::debug!("shuffle: {} groups", groups.len());
    reduce_phase(groups)
}
