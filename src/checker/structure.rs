use crate::config::Rubric;
use crate::document::Document;

use super::{Checker, Finding};

/// Checks that every required section label appears somewhere in the
/// document (case-insensitive substring).
///
/// Per paragraph, only the FIRST label in priority order that matches is
/// marked found; later labels are not considered for that paragraph even
/// if they also occur. Changing this would change which sections count as
/// present, so it is kept as-is.
pub struct StructureChecker<'a> {
    rubric: &'a Rubric,
}

impl<'a> StructureChecker<'a> {
    #[must_use]
    pub const fn new(rubric: &'a Rubric) -> Self {
        Self { rubric }
    }
}

impl Checker for StructureChecker<'_> {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let labels = &self.rubric.required_sections;
        let lowered: Vec<String> = labels.iter().map(|label| label.to_lowercase()).collect();
        let mut found = vec![false; labels.len()];

        for paragraph in &doc.paragraphs {
            let text = paragraph.text.to_lowercase();
            if let Some(index) = lowered.iter().position(|label| text.contains(label.as_str())) {
                found[index] = true;
            }
        }

        labels
            .iter()
            .zip(found)
            .filter(|(_, present)| !present)
            .map(|(label, _)| Finding::document_wide(format!("Section missing: {label}")))
            .collect()
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
