//! Integration test: local HTTP server, full pipeline run into a temp dir.

mod common;

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use wordfreq_core::config::WordfreqConfig;
use wordfreq_core::counter::CountStrategy;
use wordfreq_core::fetch::{self, FetchError};
use wordfreq_core::pipeline;

const TEXT: &str = "To Sherlock Holmes she is always THE woman. I have seldom heard him \
mention her under any other name. In his eyes she eclipses and predominates the whole \
of her sex. It was not that he felt any emotion akin to love for Irene Adler.";

fn config_for(url: &str, dir: &Path) -> WordfreqConfig {
    let mut cfg = WordfreqConfig::default();
    cfg.source_url = url.to_string();
    cfg.output.readme_path = dir.join("README.md");
    cfg.output.chart_path = dir.join("top_words_plot.svg");
    cfg.chart.width = 400;
    cfg.chart.height = 300;
    cfg.top_n = 3;
    cfg
}

#[tokio::test]
async fn pipeline_writes_report_for_served_text() {
    let server = common::text_server::start(TEXT);
    let dir = tempdir().unwrap();
    let cfg = config_for(&server.url, dir.path());

    let analysis = pipeline::run(&cfg).await.expect("pipeline run");

    assert_eq!(server.hits(), 1, "exactly one GET");
    assert_eq!(analysis.counts.total(), analysis.token_count as u64);
    assert_eq!(analysis.counts.get("she"), Some(2));
    assert_eq!(analysis.counts.get("the"), Some(2));
    assert_eq!(analysis.report.top.len(), 3);
    assert!(analysis.report.top.iter().all(|w| w.word != "the"));
    // "she" and "her" tie at 2; "she" is seen first
    assert_eq!(analysis.report.top[0].word, "she");
    assert_eq!(analysis.report.top[1].word, "her");

    let readme = fs::read_to_string(&cfg.output.readme_path).unwrap();
    assert!(readme.contains("| Word | Frequency |"));
    assert!(readme.contains("| she | 2 |"));
    assert!(readme.contains("![Top Words Plot](./top_words_plot.svg)"));
    let svg = fs::read_to_string(&cfg.output.chart_path).unwrap();
    assert!(svg.contains("she"));
}

#[tokio::test]
async fn pipeline_is_deterministic_across_runs_and_strategies() {
    let server = common::text_server::start(TEXT);
    let dir = tempdir().unwrap();
    let mut cfg = config_for(&server.url, dir.path());

    let first = pipeline::run(&cfg).await.unwrap();
    cfg.count_strategy = CountStrategy::MapReduce;
    let second = pipeline::run(&cfg).await.unwrap();

    assert_eq!(first.counts, second.counts);
    assert_eq!(first.report.top, second.report.top);
    assert_eq!(first.document_sha256, second.document_sha256);
}

#[tokio::test]
async fn not_found_aborts_without_writing_outputs() {
    let server = common::text_server::start_with_status(404, "Not Found", "gone");
    let dir = tempdir().unwrap();
    let mut cfg = config_for(&server.url, dir.path());
    cfg.output.counts_json = Some(dir.path().join("counts.json"));

    let err = pipeline::run(&cfg).await.unwrap_err();

    let fetch_err = err
        .downcast_ref::<FetchError>()
        .expect("error chain carries FetchError");
    assert_eq!(fetch_err.status(), Some(404));
    assert!(!cfg.output.readme_path.exists());
    assert!(!cfg.output.chart_path.exists());
    assert!(!dir.path().join("counts.json").exists());
}

#[tokio::test]
async fn empty_document_produces_empty_report() {
    let server = common::text_server::start("");
    let dir = tempdir().unwrap();
    let cfg = config_for(&server.url, dir.path());

    let analysis = pipeline::run(&cfg).await.unwrap();

    assert_eq!(analysis.token_count, 0);
    assert!(analysis.counts.is_empty());
    assert!(analysis.report.top.is_empty());
    assert!(cfg.output.readme_path.exists());
}

#[tokio::test]
async fn missing_output_directory_is_reported() {
    let server = common::text_server::start(TEXT);
    let dir = tempdir().unwrap();
    let mut cfg = config_for(&server.url, dir.path());
    cfg.output.chart_path = dir.path().join("fig").join("top_words_plot.svg");

    let err = pipeline::run(&cfg).await.unwrap_err();
    assert!(format!("{:#}", err).contains("write chart"));
    assert!(!cfg.output.readme_path.exists());
}

#[test]
fn fetch_text_returns_body_on_200() {
    let server = common::text_server::start("plain body\n");
    assert_eq!(fetch::fetch_text(&server.url).unwrap(), "plain body\n");
}

#[test]
fn fetch_text_rejects_other_success_codes() {
    let server = common::text_server::start_with_status(204, "No Content", "");
    let err = fetch::fetch_text(&server.url).unwrap_err();
    assert_eq!(err.status(), Some(204));
}
