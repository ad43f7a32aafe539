pub mod config;
pub mod logging;

pub mod counter;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod stopwords;
