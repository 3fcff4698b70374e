use crate::config::Rubric;
use crate::document::Document;

use super::{Checker, Finding};

/// Checks that every identity marker (name, roll number) appears somewhere
/// in the document. Case-sensitive substring match; one document-wide
/// finding covers all missing markers.
pub struct IdentityChecker<'a> {
    rubric: &'a Rubric,
}

impl<'a> IdentityChecker<'a> {
    #[must_use]
    pub const fn new(rubric: &'a Rubric) -> Self {
        Self { rubric }
    }
}

impl Checker for IdentityChecker<'_> {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let text = doc.full_text();
        let any_missing = self
            .rubric
            .identity_markers
            .iter()
            .any(|marker| !text.contains(marker.as_str()));

        if any_missing {
            vec![Finding::document_wide(format!(
                "{} is missing.",
                self.rubric.identity_markers.join(" or ")
            ))]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
