use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::keywords::ranked_keywords;
use crate::overview::DocumentStats;

/// Trait for rendering checker-free document statistics.
pub trait StatsFormatter {
    /// Render the statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &DocumentStats) -> Result<String>;
}

pub struct StatsTextFormatter {
    top_keywords: usize,
}

impl StatsTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { top_keywords: 10 }
    }

    #[must_use]
    pub const fn with_top_keywords(mut self, count: usize) -> Self {
        self.top_keywords = count;
        self
    }
}

impl Default for StatsTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &DocumentStats) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Document: {}", stats.file_name).ok();
        writeln!(output, "  Words: {}", stats.word_count).ok();
        writeln!(output, "  Pages: {}", stats.page_count).ok();

        let ranked = ranked_keywords(&stats.key_words);
        let top = &ranked[..ranked.len().min(self.top_keywords)];
        let joined = top
            .iter()
            .map(|(word, count)| format!("{word} ({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "  Key words: {joined}").ok();

        Ok(output)
    }
}

pub struct StatsJsonFormatter;

#[derive(Serialize)]
struct JsonStats<'a> {
    file_name: &'a str,
    word_count: usize,
    page_count: usize,
    key_words: Vec<JsonKeyword<'a>>,
}

#[derive(Serialize)]
struct JsonKeyword<'a> {
    word: &'a str,
    count: usize,
}

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &DocumentStats) -> Result<String> {
        let key_words = ranked_keywords(&stats.key_words)
            .into_iter()
            .map(|(word, count)| JsonKeyword { word, count })
            .collect();

        let output = JsonStats {
            file_name: &stats.file_name,
            word_count: stats.word_count,
            page_count: stats.page_count,
            key_words,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
