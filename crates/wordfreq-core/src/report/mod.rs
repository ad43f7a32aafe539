//! Report generation: stop-word filtering, top-N selection, chart and README.
//!
//! All output locations are passed in through [`ReportOptions`]; nothing here
//! holds global state. Output directories are not created: a missing directory
//! is reported as an error, and the chart may already exist when the README
//! write fails.

pub mod chart;
pub mod markdown;
pub mod top;

pub use chart::{ChartStyle, Rgb};
pub use top::{top_n, WordCount};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::counter::FrequencyMap;
use crate::stopwords::StopwordFilter;

/// Everything the report needs besides the counts.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub readme_path: PathBuf,
    pub chart_path: PathBuf,
    pub document_title: String,
    pub top_n: usize,
    pub stopwords: StopwordFilter,
    pub chart: ChartStyle,
}

/// What was written.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub top: Vec<WordCount>,
    pub readme_path: PathBuf,
    pub chart_path: PathBuf,
}

/// Link to the chart as written in the README: relative to the README's
/// directory with a `./` prefix when possible, otherwise the path as given.
pub fn chart_link(readme: &Path, chart: &Path) -> String {
    let base = readme.parent().unwrap_or_else(|| Path::new(""));
    match chart.strip_prefix(base) {
        Ok(rel) if chart.is_relative() == readme.is_relative() => {
            let parts: Vec<String> = rel
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("./{}", parts.join("/"))
        }
        _ => chart.display().to_string(),
    }
}

/// Filters stop-words, picks the top words, renders the chart, writes the README.
pub fn generate_report(counts: &FrequencyMap, opts: &ReportOptions) -> Result<ReportOutcome> {
    let kept = opts.stopwords.filter(counts);
    tracing::debug!(
        "{} distinct words, {} after stop-word filtering",
        counts.len(),
        kept.len()
    );
    let top = top_n(&kept, opts.top_n);

    let title = format!("Top {} Most Frequent Words", opts.top_n);
    chart::render_bar_chart(&opts.chart_path, &title, &top, &opts.chart)?;

    let link = chart_link(&opts.readme_path, &opts.chart_path);
    let readme = markdown::render_readme(&opts.document_title, opts.top_n, &top, &link);
    fs::write(&opts.readme_path, readme)
        .with_context(|| format!("write report {}", opts.readme_path.display()))?;
    tracing::info!(
        "report written to {} (chart {})",
        opts.readme_path.display(),
        opts.chart_path.display()
    );

    Ok(ReportOutcome {
        top,
        readme_path: opts.readme_path.clone(),
        chart_path: opts.chart_path.clone(),
    })
}
