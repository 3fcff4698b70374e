use crate::config::Rubric;
use crate::document::{Alignment, Document, Paragraph};

use super::{Checker, Finding};

const SPACING_EPSILON: f32 = 1e-3;
const SIZE_EPSILON: f32 = 1e-3;

/// Checks run fonts/sizes on body paragraphs and line spacing/justification
/// on "Normal"-styled paragraphs. Headings are exempt throughout.
pub struct FormattingChecker<'a> {
    rubric: &'a Rubric,
}

impl<'a> FormattingChecker<'a> {
    #[must_use]
    pub const fn new(rubric: &'a Rubric) -> Self {
        Self { rubric }
    }

    fn is_heading(&self, paragraph: &Paragraph) -> bool {
        paragraph
            .style_name
            .starts_with(&self.rubric.heading_style_prefix)
    }

    fn check_fonts(&self, paragraph: &Paragraph, findings: &mut Vec<Finding>) {
        // Single-word paragraphs are exempt from the size check: short
        // labels routinely carry odd sizes and flagging them is mostly
        // noise. The font-name check still applies.
        let check_size = paragraph.text.split_whitespace().count() > 1;

        for run in &paragraph.runs {
            if run.font_name.as_deref() != Some(self.rubric.expected_font.as_str()) {
                findings.push(Finding::new(
                    &paragraph.text,
                    format!(
                        "Incorrect font: '{}' found. Expected '{}'.",
                        run.font_name.as_deref().unwrap_or("unset"),
                        self.rubric.expected_font
                    ),
                ));
            }

            let size_ok = run
                .font_size_pt
                .is_some_and(|size| (size - self.rubric.expected_font_size_pt).abs() < SIZE_EPSILON);
            if check_size && !size_ok {
                let found = run
                    .font_size_pt
                    .map_or_else(|| "unset".to_string(), |size| format!("{size}pt"));
                findings.push(Finding::new(
                    &paragraph.text,
                    format!(
                        "Incorrect font size: '{found}' found. Expected {}pt.",
                        self.rubric.expected_font_size_pt
                    ),
                ));
            }
        }
    }

    fn check_body_format(&self, paragraph: &Paragraph, findings: &mut Vec<Finding>) {
        if paragraph.style_name != self.rubric.body_style {
            return;
        }

        let spacing_ok = paragraph
            .format
            .line_spacing
            .is_some_and(|spacing| (spacing - self.rubric.expected_line_spacing).abs() < SPACING_EPSILON);
        if !spacing_ok {
            findings.push(Finding::new(
                &paragraph.text,
                format!(
                    "Incorrect line spacing. Expected {}.",
                    self.rubric.expected_line_spacing
                ),
            ));
        }

        if paragraph.format.alignment != Some(Alignment::Justify) {
            findings.push(Finding::new(
                &paragraph.text,
                "Incorrect justification. Expected justified alignment.",
            ));
        }
    }
}

impl Checker for FormattingChecker<'_> {
    fn name(&self) -> &'static str {
        "formatting"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        // Two passes so findings group by rule: all font findings first,
        // then spacing/justification.
        for paragraph in &doc.paragraphs {
            if paragraph.is_empty() || self.is_heading(paragraph) {
                continue;
            }
            self.check_fonts(paragraph, &mut findings);
        }

        for paragraph in &doc.paragraphs {
            if paragraph.is_empty() {
                continue;
            }
            self.check_body_format(paragraph, &mut findings);
        }

        findings
    }
}

#[cfg(test)]
#[path = "formatting_tests.rs"]
mod tests;
