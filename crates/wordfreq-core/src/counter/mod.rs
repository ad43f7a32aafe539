//! Word counting.
//!
//! Two strategies produce the same [`FrequencyMap`]: a direct single pass
//! (default) and the staged map/shuffle/reduce decomposition.

mod frequency;
mod map_reduce;

pub use frequency::FrequencyMap;
pub use map_reduce::{map_phase, map_reduce, reduce_phase, shuffle};

use serde::{Deserialize, Serialize};

/// Counting strategy: single pass (default) or staged map/shuffle/reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountStrategy {
    #[default]
    SinglePass,
    MapReduce,
}

/// Counts tokens in one pass over the sequence.
pub fn count_tokens<S: AsRef<str>>(tokens: &[S]) -> FrequencyMap {
    tokens.iter().map(|t| t.as_ref()).collect()
}

/// Counts tokens with the given strategy.
pub fn count<S: AsRef<str>>(tokens: &[S], strategy: CountStrategy) -> FrequencyMap {
    match strategy {
        CountStrategy::SinglePass => count_tokens(tokens),
        CountStrategy::MapReduce => map_reduce(tokens),
    }
}
