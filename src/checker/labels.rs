use crate::config::Rubric;
use crate::document::Document;

use super::{Checker, Finding};

/// Checks page numbering (first section footer must carry text) and
/// figure/table caption numbering.
///
/// The caption check is a crude presence heuristic: a paragraph mentioning
/// "figure" or "table" must contain one of the digits '1'-'5' anywhere in
/// its text. It is not a label parser and is kept deliberately simple.
pub struct LabelChecker<'a> {
    rubric: &'a Rubric,
}

impl<'a> LabelChecker<'a> {
    #[must_use]
    pub const fn new(rubric: &'a Rubric) -> Self {
        Self { rubric }
    }
}

impl Checker for LabelChecker<'_> {
    fn name(&self) -> &'static str {
        "page-labels"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        // A document with no sections or no footer text counts as missing
        // page numbers; absent never satisfies the check.
        let has_page_numbers = doc
            .sections
            .first()
            .and_then(|section| section.footer.first())
            .is_some_and(|text| !text.trim().is_empty());
        if !has_page_numbers {
            findings.push(Finding::document_wide("Page numbers missing in the document."));
        }

        for paragraph in &doc.paragraphs {
            if paragraph.is_empty() {
                continue;
            }
            let text = paragraph.text.to_lowercase();
            let mentions_label = self
                .rubric
                .label_keywords
                .iter()
                .any(|keyword| text.contains(keyword.as_str()));
            if mentions_label && !text.chars().any(|c| self.rubric.label_digits.contains(c)) {
                findings.push(Finding::new(
                    &paragraph.text,
                    "Figure/Table label missing or incorrect.",
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
