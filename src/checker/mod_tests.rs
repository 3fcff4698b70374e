use crate::config::Rubric;
use crate::document::Document;

use super::*;

#[test]
fn finding_document_wide_uses_the_marker_context() {
    let finding = Finding::document_wide("Something is missing.");

    assert_eq!(finding.context, "Entire Document");
    assert_eq!(finding.message, "Something is missing.");
}

#[test]
fn default_checkers_run_in_fixed_order() {
    let rubric = Rubric::default();
    let checkers = default_checkers(&rubric);

    let names: Vec<_> = checkers.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "formatting",
            "identity",
            "structure",
            "passive-voice",
            "page-labels"
        ]
    );
}

#[test]
fn empty_document_findings_follow_checker_order() {
    let rubric = Rubric::default();
    let checkers = default_checkers(&rubric);
    let doc = Document::default();

    let findings = run_checkers(&checkers, &doc);

    // identity (1) + structure (9) + page numbers (1)
    assert_eq!(findings.len(), 11);
    assert_eq!(findings[0].message, "Name or Roll Number is missing.");
    assert_eq!(findings[1].message, "Section missing: Title");
    assert_eq!(findings[9].message, "Section missing: Graphical Analysis");
    assert_eq!(findings[10].message, "Page numbers missing in the document.");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let rubric = Rubric::default();
    let checkers = default_checkers(&rubric);
    let doc = Document::default();

    let first = run_checkers(&checkers, &doc);
    let second = run_checkers(&checkers, &doc);

    assert_eq!(first, second);
}

#[test]
fn run_checker_set_returns_one_list_per_checker() {
    let rubric = Rubric::default();
    let checkers = default_checkers(&rubric);
    let doc = Document::default();

    let per_checker = run_checker_set(&checkers, &doc);

    assert_eq!(per_checker.len(), checkers.len());
    assert!(per_checker[0].is_empty()); // formatting
    assert_eq!(per_checker[2].len(), 9); // structure
}
