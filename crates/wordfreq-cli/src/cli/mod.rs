//! CLI for the wordfreq report generator.

mod summary;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wordfreq_core::config::{self, WordfreqConfig};
use wordfreq_core::pipeline;

/// Fetch a text, count its words and write a top-N report with a bar chart.
///
/// With no arguments the configured (or default) document is analysed.
#[derive(Debug, Parser)]
#[command(name = "wordfreq")]
#[command(about = "Word frequency report for a text fetched over HTTP", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/wordfreq/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Source document URL (HTTP GET, must answer 200).
    #[arg(long)]
    pub url: Option<String>,

    /// Number of words in the table and chart.
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Where to write the Markdown report.
    #[arg(long, value_name = "PATH")]
    pub readme: Option<PathBuf>,

    /// Where to write the chart image (its directory must exist).
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,

    /// Also write the full frequency mapping as JSON.
    #[arg(long, value_name = "PATH")]
    pub counts_json: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, cfg: &mut WordfreqConfig) {
        if let Some(url) = &self.url {
            cfg.source_url = url.clone();
        }
        if let Some(n) = self.top_n {
            cfg.top_n = n;
        }
        if let Some(path) = &self.readme {
            cfg.output.readme_path = path.clone();
        }
        if let Some(path) = &self.chart {
            cfg.output.chart_path = path.clone();
        }
        if let Some(path) = &self.counts_json {
            cfg.output.counts_json = Some(path.clone());
        }
    }

    fn load_config(&self) -> Result<WordfreqConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        self.apply(&mut cfg);
        Ok(cfg)
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let analysis = pipeline::run(&cfg).await?;
        println!("Analysis completed successfully!");
        summary::print_summary(&analysis);
        Ok(())
    }
}
