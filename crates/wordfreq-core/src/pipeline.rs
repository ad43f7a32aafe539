//! End-to-end run: fetch → normalize → count → report.
//!
//! The fetch is the only await point; everything after it is sequential.

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WordfreqConfig;
use crate::counter::{self, CountStrategy, FrequencyMap};
use crate::fetch;
use crate::normalize;
use crate::report::{self, ChartStyle, ReportOptions, ReportOutcome, Rgb};
use crate::stopwords::StopwordFilter;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub source_url: String,
    /// SHA-256 of the fetched document, lowercase hex.
    pub document_sha256: String,
    pub token_count: usize,
    pub counts: FrequencyMap,
    pub report: ReportOutcome,
    pub counts_json: Option<PathBuf>,
}

/// JSON layout of the optional counts snapshot.
#[derive(Serialize)]
struct CountsSnapshot<'a> {
    source_url: &'a str,
    source_sha256: &'a str,
    tokens: usize,
    distinct_words: usize,
    counts: &'a FrequencyMap,
}

/// Tokenizes and counts `text`. Returns the token count with the mapping.
pub fn count_text(text: &str, strategy: CountStrategy) -> (usize, FrequencyMap) {
    let tokens = normalize::tokenize(text);
    let counts = counter::count(&tokens, strategy);
    debug_assert_eq!(counts.total(), tokens.len() as u64);
    (tokens.len(), counts)
}

/// Report settings derived from the config.
pub fn report_options(cfg: &WordfreqConfig) -> Result<ReportOptions> {
    let mut stopwords = StopwordFilter::default();
    stopwords.add_stopwords(&cfg.extra_stop_words);
    Ok(ReportOptions {
        readme_path: cfg.output.readme_path.clone(),
        chart_path: cfg.output.chart_path.clone(),
        document_title: cfg.document_title.clone(),
        top_n: cfg.top_n,
        stopwords,
        chart: ChartStyle {
            width: cfg.chart.width,
            height: cfg.chart.height,
            bar_color: Rgb::parse_hex(&cfg.chart.bar_color)?,
        },
    })
}

/// Fetches the document on the blocking pool.
pub async fn fetch_document(url: &str) -> Result<String> {
    let text = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || fetch::fetch_text(&url)
    })
    .await
    .context("fetch task join")?
    .context("fetch source document")?;
    Ok(text)
}

fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

fn write_counts_json(path: &Path, snapshot: &CountsSnapshot<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).with_context(|| format!("write counts {}", path.display()))?;
    tracing::info!("counts written to {}", path.display());
    Ok(())
}

/// Counts an already-fetched document and writes the report.
pub fn analyze(cfg: &WordfreqConfig, text: &str) -> Result<Analysis> {
    let opts = report_options(cfg)?;
    let document_sha256 = sha256_hex(text);

    let (token_count, counts) = count_text(text, cfg.count_strategy);
    tracing::info!(
        "counted {} tokens, {} distinct words ({:?})",
        token_count,
        counts.len(),
        cfg.count_strategy
    );

    let report = report::generate_report(&counts, &opts)?;

    if let Some(path) = &cfg.output.counts_json {
        write_counts_json(
            path,
            &CountsSnapshot {
                source_url: &cfg.source_url,
                source_sha256: &document_sha256,
                tokens: token_count,
                distinct_words: counts.len(),
                counts: &counts,
            },
        )?;
    }

    Ok(Analysis {
        source_url: cfg.source_url.clone(),
        document_sha256,
        token_count,
        counts,
        report,
        counts_json: cfg.output.counts_json.clone(),
    })
}

/// Runs the full pipeline. A failed fetch aborts before anything is written.
pub async fn run(cfg: &WordfreqConfig) -> Result<Analysis> {
    cfg.validate()?;
    tracing::info!("fetching {}", cfg.source_url);
    let text = fetch_document(&cfg.source_url).await?;
    tracing::debug!("document is {} bytes", text.len());
    analyze(cfg, &text)
}
