mod formatting;
mod identity;
mod labels;
mod passive;
mod structure;

pub use formatting::FormattingChecker;
pub use identity::IdentityChecker;
pub use labels::LabelChecker;
pub use passive::PassiveVoiceChecker;
pub use structure::StructureChecker;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::Rubric;
use crate::document::Document;
use crate::nlp::HeuristicPassiveDetector;

/// Context marker for findings that apply to the whole document rather
/// than a single paragraph.
pub const DOCUMENT_WIDE: &str = "Entire Document";

/// One rubric violation: the offending text and a human-readable message.
/// The message text doubles as the error-type key when findings are
/// histogrammed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub context: String,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn document_wide(message: impl Into<String>) -> Self {
        Self::new(DOCUMENT_WIDE, message)
    }
}

/// A single stateless rubric check over a parsed document.
///
/// Checkers never fail on a non-compliant document; non-compliance is the
/// expected, reportable outcome.
pub trait Checker: Sync {
    /// Checker name for verbose progress output.
    fn name(&self) -> &'static str;

    /// Run the check, returning findings in paragraph order.
    fn check(&self, doc: &Document) -> Vec<Finding>;
}

/// The full checker set in its fixed run order. Concatenating their
/// results in this order defines the report's finding order.
#[must_use]
pub fn default_checkers(rubric: &Rubric) -> Vec<Box<dyn Checker + '_>> {
    vec![
        Box::new(FormattingChecker::new(rubric)),
        Box::new(IdentityChecker::new(rubric)),
        Box::new(StructureChecker::new(rubric)),
        Box::new(PassiveVoiceChecker::new(HeuristicPassiveDetector::new())),
        Box::new(LabelChecker::new(rubric)),
    ]
}

/// Run every checker and return one finding list per checker, in the fixed
/// checker order. Checkers execute in parallel; the result order does not
/// depend on scheduling.
#[must_use]
pub fn run_checker_set(checkers: &[Box<dyn Checker + '_>], doc: &Document) -> Vec<Vec<Finding>> {
    checkers.par_iter().map(|checker| checker.check(doc)).collect()
}

/// Run every checker and concatenate the findings in fixed checker order.
#[must_use]
pub fn run_checkers(checkers: &[Box<dyn Checker + '_>], doc: &Document) -> Vec<Finding> {
    run_checker_set(checkers, doc).into_iter().flatten().collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
