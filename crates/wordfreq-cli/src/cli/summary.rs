//! Console summary printed after a successful run.

use wordfreq_core::pipeline::Analysis;

fn render_summary(analysis: &Analysis) -> String {
    let mut out = format!(
        "{} tokens, {} distinct words from {}\n",
        analysis.token_count,
        analysis.counts.len(),
        analysis.source_url
    );
    if !analysis.report.top.is_empty() {
        out.push_str(&format!("  {:>4}  {:<20}  {:>9}\n", "Rank", "Word", "Frequency"));
        out.push_str(&format!("  ----  {}  {}\n", "-".repeat(20), "-".repeat(9)));
        for (i, w) in analysis.report.top.iter().enumerate() {
            out.push_str(&format!("  {:>4}  {:<20}  {:>9}\n", i + 1, w.word, w.count));
        }
    }
    out.push_str(&format!("Report: {}\n", analysis.report.readme_path.display()));
    out.push_str(&format!("Chart:  {}\n", analysis.report.chart_path.display()));
    if let Some(path) = &analysis.counts_json {
        out.push_str(&format!("Counts: {}\n", path.display()));
    }
    out
}

pub fn print_summary(analysis: &Analysis) {
    print!("{}", render_summary(analysis));
}
