use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::counter::CountStrategy;
use crate::report::chart::Rgb;

/// Project Gutenberg plain-text edition of "The Adventures of Sherlock Holmes".
pub const DEFAULT_SOURCE_URL: &str = "https://www.gutenberg.org/cache/epub/1661/pg1661.txt";

/// Output file locations (optional `[output]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Markdown report, overwritten on every run.
    pub readme_path: PathBuf,
    /// Bar chart image, overwritten on every run. Its directory must exist.
    pub chart_path: PathBuf,
    /// Optional JSON snapshot of the full frequency mapping (None = not written).
    pub counts_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            readme_path: PathBuf::from("README.md"),
            chart_path: PathBuf::from("fig/top_words_plot.svg"),
            counts_json: None,
        }
    }
}

/// Chart appearance (optional `[chart]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bar fill colour as `#RRGGBB`.
    pub bar_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            bar_color: "#87CEEB".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/wordfreq/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordfreqConfig {
    /// Document to analyse; fetched with a single HTTP GET.
    pub source_url: String,
    /// Human-readable name of the document, used in the report description.
    pub document_title: String,
    /// Number of words in the report table and chart.
    pub top_n: usize,
    /// How tokens are tallied: "single-pass" (default) or "map-reduce".
    pub count_strategy: CountStrategy,
    /// Words excluded in addition to the built-in stop-word list.
    pub extra_stop_words: Vec<String>,
    pub output: OutputConfig,
    pub chart: ChartConfig,
}

impl Default for WordfreqConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            document_title: "\"Sherlock Holmes\" by Arthur Conan Doyle".to_string(),
            top_n: 10,
            count_strategy: CountStrategy::default(),
            extra_stop_words: Vec::new(),
            output: OutputConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl WordfreqConfig {
    /// Checks values that serde accepts but the pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.source_url)
            .with_context(|| format!("invalid source_url {:?}", self.source_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "source_url must be http or https, got scheme {:?}",
                parsed.scheme()
            );
        }
        if self.chart.width == 0 || self.chart.height == 0 {
            anyhow::bail!(
                "chart dimensions must be non-zero, got {}x{}",
                self.chart.width,
                self.chart.height
            );
        }
        Rgb::parse_hex(&self.chart.bar_color)?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wordfreq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WordfreqConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WordfreqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<WordfreqConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: WordfreqConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
