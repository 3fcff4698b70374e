//! Minimal NLP support for the passive-voice check.
//!
//! A full dependency parse stays out of scope. The checker only needs one
//! capability: "does this sentence contain a passive nominal subject". That
//! capability is a trait so a heavier backend can be swapped in without
//! touching the checker.

use std::sync::LazyLock;

use regex::Regex;

/// Words that end a token with '.' without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "e.g", "i.e", "etc", "vs", "fig", "no", "dr", "mr", "mrs", "ms", "prof", "st",
];

/// Past participles that don't follow the -ed/-en pattern.
const IRREGULAR_PARTICIPLES: &[&str] = &[
    "done", "seen", "known", "made", "given", "taken", "shown", "found", "held", "kept", "built",
    "sent", "left", "lost", "set", "put", "told", "thought", "brought", "bought", "caught",
    "taught", "chosen", "broken", "spoken", "written", "driven", "drawn", "grown", "thrown",
    "worn", "begun", "sung", "won", "run", "read", "understood", "met", "paid", "said", "sold",
];

/// Splits text into sentences on '.', '!' and '?', keeping the terminator.
///
/// Decimal points and a small abbreviation list do not split. This is a
/// rule-based stand-in for a real segmenter and is deterministic by
/// construction.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if c == '.' && (is_decimal_point(text, i) || follows_abbreviation(&text[start..i])) {
            continue;
        }
        let end = i + c.len_utf8();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = end;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn is_decimal_point(text: &str, dot: usize) -> bool {
    let before = text[..dot].chars().next_back();
    let after = text[dot + 1..].chars().next();
    before.is_some_and(|c| c.is_ascii_digit()) && after.is_some_and(|c| c.is_ascii_digit())
}

fn follows_abbreviation(before: &str) -> bool {
    let word: String = before
        .chars()
        .rev()
        .take_while(|c| c.is_alphanumeric() || *c == '.')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let word = word.trim_end_matches('.');
    // Single letters cover initials and the tail of "e.g."/"i.e.".
    word.chars().count() == 1 && word.chars().all(char::is_alphabetic)
        || ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

/// Capability interface: report whether a sentence contains a passive
/// nominal subject. Any NLP backend can stand behind this.
pub trait PassiveVoiceDetector: Sync {
    fn is_passive(&self, sentence: &str) -> bool;
}

/// A form of "to be", an optional adverb, then a candidate participle.
static PASSIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:am|is|are|was|were|be|been|being)\s+(?:\w+ly\s+)?(\w+)")
        .expect("hard-coded pattern is valid")
});

/// Rule-based passive detection: a "to be" form followed by a word that
/// looks like a past participle. Crude next to a dependency parse, but
/// deterministic and dependency-free.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPassiveDetector;

impl HeuristicPassiveDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PassiveVoiceDetector for HeuristicPassiveDetector {
    fn is_passive(&self, sentence: &str) -> bool {
        PASSIVE_PATTERN
            .captures_iter(sentence)
            .any(|caps| is_past_participle(&caps[1]))
    }
}

fn is_past_participle(word: &str) -> bool {
    let word = word.to_lowercase();
    IRREGULAR_PARTICIPLES.contains(&word.as_str())
        || (word.len() > 3 && word.ends_with("ed"))
        || (word.len() > 4 && word.ends_with("en"))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
