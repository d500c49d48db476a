//! Transcript normalization.

/// Words removed before comparison: articles and common auxiliary/linking
/// verbs that carry no intent signal in short utterances.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "been", "be", "have", "has", "had", "do", "does",
    "did",
];

/// Normalize a transcript for comparison: lowercase, strip punctuation,
/// collapse whitespace runs, drop stop words.
///
/// Total over arbitrary input and idempotent; empty in, empty out. Callers
/// treat an empty normalized string as zero confidence.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
