use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::Finding;
use crate::document::Document;
use crate::keywords::{KeywordStats, KeywordTable};

/// Summary numbers for one analysis run.
///
/// Constructed only by [`aggregate`], after every checker has returned;
/// `total_errors` is therefore always the final count and no
/// partially-aggregated overview is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub word_count: usize,
    pub page_count: usize,
    pub key_words: KeywordTable,
    pub total_errors: usize,
}

/// The report builder's input contract: overview, error-type histogram,
/// and the full finding list in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub file_name: String,
    pub overview: Overview,
    pub error_types: IndexMap<String, usize>,
    pub findings: Vec<Finding>,
}

/// Overview data available without running any checker (stats command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub file_name: String,
    pub word_count: usize,
    pub page_count: usize,
    pub key_words: KeywordTable,
}

impl DocumentStats {
    #[must_use]
    pub fn new(file_name: impl Into<String>, doc: &Document, keywords: KeywordStats) -> Self {
        Self {
            file_name: file_name.into(),
            word_count: keywords.word_count,
            page_count: doc.page_count(),
            key_words: keywords.key_words,
        }
    }
}

/// Assemble the final report from the extractor output and the finished
/// finding list.
///
/// Error types are grouped by verbatim message text in first-emission
/// order; two findings with different wording (say, two different wrong
/// fonts) stay separate entries.
#[must_use]
pub fn aggregate(
    file_name: impl Into<String>,
    doc: &Document,
    keywords: KeywordStats,
    findings: Vec<Finding>,
) -> Report {
    let mut error_types: IndexMap<String, usize> = IndexMap::new();
    for finding in &findings {
        *error_types.entry(finding.message.clone()).or_insert(0) += 1;
    }

    Report {
        file_name: file_name.into(),
        overview: Overview {
            word_count: keywords.word_count,
            page_count: doc.page_count(),
            key_words: keywords.key_words,
            total_errors: findings.len(),
        },
        error_types,
        findings,
    }
}

#[cfg(test)]
#[path = "overview_tests.rs"]
mod tests;
