use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::Rubric;
use crate::document::Document;

/// Lowercase token -> occurrence count, in first-appearance order.
pub type KeywordTable = IndexMap<String, usize>;

/// Word count and keyword table for one document.
///
/// `word_count` counts every whitespace-delimited token, stop words
/// included; `key_words` only counts content words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordStats {
    pub word_count: usize,
    pub key_words: KeywordTable,
}

/// Single-pass keyword extraction over the document's paragraphs.
pub struct KeywordExtractor<'a> {
    stop_words: HashSet<&'a str>,
}

impl<'a> KeywordExtractor<'a> {
    #[must_use]
    pub fn new(rubric: &'a Rubric) -> Self {
        Self {
            stop_words: rubric.stop_word_set(),
        }
    }

    /// Tokenize every non-empty paragraph. Tokens are whitespace splits,
    /// lowercased for the keyword table; no stemming, so "Report" and
    /// "reports" stay distinct keys.
    #[must_use]
    pub fn extract(&self, doc: &Document) -> KeywordStats {
        let mut stats = KeywordStats::default();
        for paragraph in &doc.paragraphs {
            if paragraph.is_empty() {
                continue;
            }
            for word in paragraph.text.split_whitespace() {
                stats.word_count += 1;
                let token = word.to_lowercase();
                if !self.stop_words.contains(token.as_str()) {
                    *stats.key_words.entry(token).or_insert(0) += 1;
                }
            }
        }
        stats
    }
}

/// Keywords sorted by descending count. The sort is stable, so equal counts
/// keep first-appearance order.
#[must_use]
pub fn ranked_keywords(table: &KeywordTable) -> Vec<(&str, usize)> {
    let mut ranked: Vec<_> = table.iter().map(|(word, &count)| (word.as_str(), count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
#[path = "keywords_tests.rs"]
mod tests;
