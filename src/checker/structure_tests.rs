use crate::checker::DOCUMENT_WIDE;
use crate::config::Rubric;
use crate::document::{Document, Paragraph};

use super::*;

fn check(texts: &[&str]) -> Vec<Finding> {
    let rubric = Rubric::default();
    let doc = Document {
        paragraphs: texts
            .iter()
            .map(|text| Paragraph::new(*text, "Normal"))
            .collect(),
        sections: Vec::new(),
    };
    StructureChecker::new(&rubric).check(&doc)
}

#[test]
fn all_nine_sections_present_yields_no_findings() {
    let findings = check(&[
        "TITLE page",
        "Executive Summary",
        "Company Background",
        "Problem Definition",
        "Objectives of the study",
        "Data Collection",
        "Timelines",
        "Expected Outcomes",
        "Graphical Analysis",
    ]);

    assert!(findings.is_empty());
}

#[test]
fn empty_document_reports_all_nine_in_fixed_order() {
    let findings = check(&[]);

    assert_eq!(findings.len(), 9);
    assert_eq!(findings[0].message, "Section missing: Title");
    assert_eq!(findings[1].message, "Section missing: Executive Summary");
    assert_eq!(findings[8].message, "Section missing: Graphical Analysis");
    assert!(findings.iter().all(|f| f.context == DOCUMENT_WIDE));
}

#[test]
fn label_match_is_case_insensitive_substring() {
    let findings = check(&["the executive summary follows"]);

    assert!(
        !findings
            .iter()
            .any(|f| f.message == "Section missing: Executive Summary")
    );
}

#[test]
fn first_label_in_priority_order_wins_per_paragraph() {
    // "Title and Objectives" only counts toward Title; Objectives must be
    // found elsewhere or it is reported missing.
    let findings = check(&["Title and Objectives"]);

    assert!(
        !findings
            .iter()
            .any(|f| f.message == "Section missing: Title")
    );
    assert!(
        findings
            .iter()
            .any(|f| f.message == "Section missing: Objectives")
    );
}

#[test]
fn labels_found_across_separate_paragraphs_both_count() {
    let findings = check(&["Title and Objectives", "Objectives"]);

    assert!(
        !findings
            .iter()
            .any(|f| f.message == "Section missing: Objectives")
    );
}
