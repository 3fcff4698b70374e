use serde::Serialize;

use crate::checker::Finding;
use crate::error::Result;
use crate::keywords::ranked_keywords;
use crate::overview::Report;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    file_name: &'a str,
    overview: JsonOverview<'a>,
    error_types: Vec<JsonErrorType<'a>>,
    findings: &'a [Finding],
}

#[derive(Serialize)]
struct JsonOverview<'a> {
    word_count: usize,
    page_count: usize,
    total_errors: usize,
    key_words: Vec<JsonKeyword<'a>>,
}

#[derive(Serialize)]
struct JsonKeyword<'a> {
    word: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct JsonErrorType<'a> {
    message: &'a str,
    count: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let key_words = ranked_keywords(&report.overview.key_words)
            .into_iter()
            .map(|(word, count)| JsonKeyword { word, count })
            .collect();

        let output = JsonOutput {
            file_name: &report.file_name,
            overview: JsonOverview {
                word_count: report.overview.word_count,
                page_count: report.overview.page_count,
                total_errors: report.overview.total_errors,
                key_words,
            },
            error_types: report
                .error_types
                .iter()
                .map(|(message, &count)| JsonErrorType {
                    message: message.as_str(),
                    count,
                })
                .collect(),
            findings: &report.findings,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
