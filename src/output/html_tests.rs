use crate::checker::Finding;
use crate::document::{Document, Section};
use crate::keywords::{KeywordStats, KeywordTable};
use crate::overview::{Report, aggregate};

use super::*;

fn report_with(words: &[(&str, usize)], findings: Vec<Finding>) -> Report {
    let mut key_words = KeywordTable::new();
    for (word, count) in words {
        key_words.insert((*word).to_string(), *count);
    }
    aggregate(
        "proposal.docx",
        &Document {
            paragraphs: Vec::new(),
            sections: vec![Section::default()],
        },
        KeywordStats {
            word_count: 120,
            key_words,
        },
        findings,
    )
}

#[test]
fn renders_a_standalone_html_document() {
    let report = report_with(
        &[("project", 3)],
        vec![Finding::document_wide("Name or Roll Number is missing.")],
    );

    let output = HtmlFormatter::new().format(&report).unwrap();

    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<h1>Document Review Report</h1>"));
    assert!(output.contains("proposal.docx"));
    assert!(output.contains("<strong>Total Word Count:</strong> 120"));
    assert!(output.contains("<strong>Total Errors:</strong> 1"));
    assert!(output.ends_with("</html>\n"));
}

#[test]
fn keywords_render_as_tags() {
    let report = report_with(&[("project", 3)], Vec::new());

    let output = HtmlFormatter::new().format(&report).unwrap();

    assert!(output.contains(r#"<span class="tag">project (3)</span>"#));
}

#[test]
fn keyword_overflow_is_hidden_behind_toggle() {
    let words: Vec<(String, usize)> = (0..12).map(|i| (format!("word{i}"), 12 - i)).collect();
    let borrowed: Vec<(&str, usize)> = words.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    let report = report_with(&borrowed, Vec::new());

    let output = HtmlFormatter::new().format(&report).unwrap();

    assert!(output.contains("hidden-keywords"));
    assert!(output.contains("Show More"));
}

#[test]
fn few_keywords_need_no_toggle() {
    let report = report_with(&[("project", 3)], Vec::new());

    let output = HtmlFormatter::new().format(&report).unwrap();

    assert!(!output.contains("Show More"));
}

#[test]
fn finding_content_is_escaped() {
    let report = report_with(
        &[],
        vec![Finding::new(
            "<script>alert('x')</script>",
            "Incorrect font: '<Arial>' found.",
        )],
    );

    let output = HtmlFormatter::new().format(&report).unwrap();

    assert!(!output.contains("<script>alert"));
    assert!(output.contains("&lt;script&gt;"));
    assert!(output.contains("&lt;Arial&gt;"));
}

#[test]
fn clean_report_says_no_issues() {
    let report = report_with(&[("project", 1)], Vec::new());

    let output = HtmlFormatter::new().format(&report).unwrap();

    assert!(output.contains("No issues were detected in the document."));
}
