use serde::{Deserialize, Serialize};

/// Paragraph alignment as the engine needs it. Anything more exotic in the
/// source document maps to `None` on the paragraph format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Paragraph-level formatting. Absent values mean the attribute was not set
/// directly on the paragraph; checkers treat absent as non-compliant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphFormat {
    pub line_spacing: Option<f32>,
    pub alignment: Option<Alignment>,
}

/// A run of identically-formatted text within a paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub font_name: Option<String>,
    pub font_size_pt: Option<f32>,
}

/// One paragraph of the normalized document model.
///
/// `text` is trimmed; `style_name` is the resolved style name ("Normal"
/// when the paragraph carries no explicit style).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style_name: String,
    pub runs: Vec<Run>,
    pub format: ParagraphFormat,
}

impl Paragraph {
    #[must_use]
    pub fn new(text: impl Into<String>, style_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_name: style_name.into(),
            runs: Vec::new(),
            format: ParagraphFormat::default(),
        }
    }

    #[must_use]
    pub fn with_runs(mut self, runs: Vec<Run>) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: ParagraphFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A section of the document; carries the footer paragraph texts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub footer: Vec<String>,
}

/// The normalized document: everything the checkers and the keyword
/// extractor consume. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub sections: Vec<Section>,
}

impl Document {
    /// Page count is defined as the number of sections.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sections.len()
    }

    /// All paragraph text joined with newlines, for document-wide substring
    /// scans.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
