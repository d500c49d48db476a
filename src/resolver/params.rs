//! Command-specific parameter extraction.
//!
//! Extraction always reads the raw utterance, not the normalized form: a
//! task titled "Clean the kitchen!" should keep its article and its
//! punctuation.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{Command, PARAM_DIRECTION, PARAM_TITLE};

static UP_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(up|higher|top|first|more)\b").expect("up vocabulary regex"));
static DOWN_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(down|lower|bottom|last|less)\b").expect("down vocabulary regex")
});

/// Populate the parameters a command declares. Keys the utterance gives no
/// value for are left out entirely.
pub(super) fn extract(command: &Command, utterance: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    if command.params.contains_key(PARAM_TITLE) {
        if let Some(title) = leading_remainder(command, utterance) {
            out.insert(PARAM_TITLE.to_string(), title);
        }
    }
    if command.params.contains_key(PARAM_DIRECTION) {
        if let Some(direction) = direction_of(utterance) {
            out.insert(PARAM_DIRECTION.to_string(), direction.to_string());
        }
    }
    out
}

/// Strip each of the command's own patterns off the front of the raw
/// utterance (case-insensitively) and return what is left, if anything.
fn leading_remainder(command: &Command, utterance: &str) -> Option<String> {
    let mut rest = utterance.trim();
    for pattern in &command.patterns {
        let pattern_lower = pattern.to_lowercase();
        if rest.to_lowercase().starts_with(&pattern_lower) {
            // Lowercasing can change byte lengths, so walk off the matched
            // prefix by character count instead of byte length.
            let prefix_chars = pattern_lower.chars().count();
            let cut = rest
                .char_indices()
                .nth(prefix_chars)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());
            rest = rest[cut..].trim_start();
        }
    }
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

/// Reorder direction read from the raw utterance. The up vocabulary is
/// checked first; "less" covers phrasings like "make it less important".
fn direction_of(utterance: &str) -> Option<&'static str> {
    if UP_WORDS.is_match(utterance) {
        return Some("up");
    }
    if DOWN_WORDS.is_match(utterance) {
        return Some("down");
    }
    None
}
