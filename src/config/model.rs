use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The review rubric: every expectation the checkers audit a document
/// against. Defaults encode the fixed project-proposal rubric; a TOML file
/// can externalize any of them without changing default behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rubric {
    /// Font expected on every non-heading run.
    #[serde(default = "default_expected_font")]
    pub expected_font: String,

    /// Font size (points) expected on runs of multi-word paragraphs.
    #[serde(default = "default_expected_font_size")]
    pub expected_font_size_pt: f32,

    /// Line spacing expected on body paragraphs.
    #[serde(default = "default_expected_line_spacing")]
    pub expected_line_spacing: f32,

    /// Style name that marks body text.
    #[serde(default = "default_body_style")]
    pub body_style: String,

    /// Style-name prefix that marks headings (exempt from font checks).
    #[serde(default = "default_heading_style_prefix")]
    pub heading_style_prefix: String,

    /// Section labels that must appear somewhere in the document, in
    /// priority order.
    #[serde(default = "default_required_sections")]
    pub required_sections: Vec<String>,

    /// Literal substrings that must all be present (case-sensitive).
    #[serde(default = "default_identity_markers")]
    pub identity_markers: Vec<String>,

    /// Lowercase keywords that mark a paragraph as a figure/table caption.
    #[serde(default = "default_label_keywords")]
    pub label_keywords: Vec<String>,

    /// Characters accepted as evidence of a caption number.
    #[serde(default = "default_label_digits")]
    pub label_digits: String,

    /// How many keywords the report shows before folding the rest away.
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,

    /// Tokens excluded from the keyword table (word counts still include
    /// them).
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            expected_font: default_expected_font(),
            expected_font_size_pt: default_expected_font_size(),
            expected_line_spacing: default_expected_line_spacing(),
            body_style: default_body_style(),
            heading_style_prefix: default_heading_style_prefix(),
            required_sections: default_required_sections(),
            identity_markers: default_identity_markers(),
            label_keywords: default_label_keywords(),
            label_digits: default_label_digits(),
            top_keywords: default_top_keywords(),
            stop_words: default_stop_words(),
        }
    }
}

impl Rubric {
    /// Stop words as a set for O(1) lookups during extraction.
    #[must_use]
    pub fn stop_word_set(&self) -> HashSet<&str> {
        self.stop_words.iter().map(String::as_str).collect()
    }
}

fn default_expected_font() -> String {
    "Times New Roman".to_string()
}

const fn default_expected_font_size() -> f32 {
    12.0
}

const fn default_expected_line_spacing() -> f32 {
    1.5
}

fn default_body_style() -> String {
    "Normal".to_string()
}

fn default_heading_style_prefix() -> String {
    "Heading".to_string()
}

fn default_required_sections() -> Vec<String> {
    [
        "Title",
        "Executive Summary",
        "Company Background",
        "Problem Definition",
        "Objectives",
        "Data Collection",
        "Timelines",
        "Expected Outcomes",
        "Graphical Analysis",
    ]
    .map(String::from)
    .to_vec()
}

fn default_identity_markers() -> Vec<String> {
    ["Name", "Roll Number"].map(String::from).to_vec()
}

fn default_label_keywords() -> Vec<String> {
    ["figure", "table"].map(String::from).to_vec()
}

fn default_label_digits() -> String {
    "12345".to_string()
}

const fn default_top_keywords() -> usize {
    10
}

fn default_stop_words() -> Vec<String> {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now",
    ]
    .map(String::from)
    .to_vec()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
