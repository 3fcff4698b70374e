use crate::document::Document;
use crate::nlp::{PassiveVoiceDetector, split_sentences};

use super::{Checker, Finding};

/// Flags sentences written in passive voice. The finding's context is the
/// whole paragraph; the message names the specific sentence, so several
/// passive sentences in one paragraph yield several findings with the same
/// context.
pub struct PassiveVoiceChecker<D> {
    detector: D,
}

impl<D: PassiveVoiceDetector> PassiveVoiceChecker<D> {
    #[must_use]
    pub const fn new(detector: D) -> Self {
        Self { detector }
    }
}

impl<D: PassiveVoiceDetector> Checker for PassiveVoiceChecker<D> {
    fn name(&self) -> &'static str {
        "passive-voice"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        for paragraph in &doc.paragraphs {
            if paragraph.is_empty() {
                continue;
            }
            for sentence in split_sentences(&paragraph.text) {
                if self.detector.is_passive(sentence) {
                    findings.push(Finding::new(
                        &paragraph.text,
                        format!("Passive voice detected: '{sentence}'."),
                    ));
                }
            }
        }
        findings
    }
}

#[cfg(test)]
#[path = "passive_tests.rs"]
mod tests;
