//! README rendering.

use super::top::WordCount;

/// Builds the Markdown report: description, frequency table, chart embed, notes.
pub fn render_readme(
    document_title: &str,
    top_n: usize,
    words: &[WordCount],
    chart_link: &str,
) -> String {
    let mut out = String::new();
    out.push_str("# Word Frequency Analysis\n\n");
    out.push_str(&format!(
        "This project performs a word frequency analysis on the text of {}, \
         using MapReduce principles.\n\n",
        document_title
    ));
    out.push_str("## Results\n\n");
    out.push_str(&format!(
        "The table below shows the top {} most frequent words (excluding common words) \
         found in the text:\n\n",
        top_n
    ));
    out.push_str("| Word | Frequency |\n");
    out.push_str("|------|-----------|\n");
    for w in words {
        out.push_str(&format!("| {} | {} |\n", w.word, w.count));
    }
    out.push_str("\n## Visualization\n\n");
    out.push_str(&format!("![Top Words Plot]({})\n\n", chart_link));
    out.push_str("## Notes\n");
    out.push_str("- Common words (stop words) have been excluded from the analysis\n");
    out.push_str("- The text has been converted to lowercase for consistent counting\n");
    out.push_str("- Punctuation has been removed\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_contains_table_and_embed() {
        let words = vec![
            WordCount {
                word: "cat".to_string(),
                count: 2,
            },
            WordCount {
                word: "sat".to_string(),
                count: 2,
            },
        ];
        let md = render_readme("\"Cats\"", 10, &words, "./fig/top_words_plot.svg");

        assert!(md.starts_with("# Word Frequency Analysis\n"));
        assert!(md.contains("the text of \"Cats\", using MapReduce principles."));
        assert!(md.contains("top 10 most frequent words"));
        assert!(md.contains("| Word | Frequency |\n|------|-----------|\n| cat | 2 |\n| sat | 2 |\n"));
        assert!(md.contains("![Top Words Plot](./fig/top_words_plot.svg)"));
        assert!(md.contains("## Notes\n- Common words (stop words)"));
        assert!(md.ends_with("- Punctuation has been removed\n"));
    }

    #[test]
    fn readme_sections_are_separated_by_blank_lines() {
        let md = render_readme("\"Cats\"", 3, &[], "./c.svg");
        assert!(md.starts_with(
            "# Word Frequency Analysis\n\n\
             This project performs a word frequency analysis on the text of \"Cats\", \
             using MapReduce principles.\n\n\
             ## Results\n\n\
             The table below shows the top 3 most frequent words (excluding common words) \
             found in the text:\n\n| Word |"
        ));
        assert!(md.contains("## Visualization\n\n![Top Words Plot](./c.svg)\n\n## Notes\n"));
    }

    #[test]
    fn readme_with_no_words_has_empty_table() {
        let md = render_readme("x", 10, &[], "chart.svg");
        assert!(md.contains("|------|-----------|\n\n## Visualization"));
    }
}
