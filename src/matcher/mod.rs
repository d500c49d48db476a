//! Graded similarity between an utterance and a command pattern.
//!
//! [`score`] runs a short-circuiting cascade of strategies, strongest
//! first. The weights keep cleaner matches ahead of weaker heuristics: a
//! typo-tolerant edit-distance hit can never outrank whole-string
//! containment, and the shared-token fallback sits below everything else.
//! The resolver keeps the global maximum across all patterns, so the
//! cascade order is an efficiency concern while the weights are the
//! correctness concern.

use crate::text::{levenshtein, normalize};

#[cfg(test)]
mod tests;

/// Both sides normalize to the same string.
pub const SCORE_EXACT: f32 = 1.0;
/// The normalized input contains the whole normalized pattern.
pub const SCORE_INPUT_CONTAINS: f32 = 0.9;
/// The normalized pattern contains the whole normalized input. Supports
/// partial or truncated utterances.
pub const SCORE_PATTERN_CONTAINS: f32 = 0.8;
/// Every pattern word appears, exactly or as a substring, among the input
/// words.
pub const SCORE_TOKEN_SUBSET: f32 = 0.7;
/// Minimum edit-distance similarity before that strategy applies at all.
pub const EDIT_SIMILARITY_FLOOR: f32 = 0.7;
/// Dampening applied to edit-distance similarity.
pub const EDIT_SIMILARITY_WEIGHT: f32 = 0.8;
/// Dampening applied to the shared-token ratio.
pub const SHARED_TOKEN_WEIGHT: f32 = 0.6;
/// Words longer than this may count as shared by containment rather than
/// by equality.
const SHARED_TOKEN_MIN_CHARS: usize = 3;

/// Score how well `input` matches `pattern`, in `[0, 1]`.
///
/// Both sides are normalized first; an input or pattern that normalizes to
/// nothing scores 0.
pub fn score(input: &str, pattern: &str) -> f32 {
    let input = normalize(input);
    let pattern = normalize(pattern);
    if input.is_empty() || pattern.is_empty() {
        return 0.0;
    }

    if input == pattern {
        return SCORE_EXACT;
    }
    if input.contains(&pattern) {
        return SCORE_INPUT_CONTAINS;
    }
    if pattern.contains(&input) {
        return SCORE_PATTERN_CONTAINS;
    }

    let input_words: Vec<&str> = input.split(' ').collect();
    let pattern_words: Vec<&str> = pattern.split(' ').collect();
    let all_pattern_words_present = pattern_words
        .iter()
        .all(|pw| input_words.iter().any(|iw| iw == pw || iw.contains(pw)));
    if all_pattern_words_present {
        return SCORE_TOKEN_SUBSET;
    }

    let distance = levenshtein(&input, &pattern);
    let longest = input.chars().count().max(pattern.chars().count());
    let similarity = 1.0 - distance as f32 / longest as f32;
    if similarity > EDIT_SIMILARITY_FLOOR {
        return similarity * EDIT_SIMILARITY_WEIGHT;
    }

    let shared = input_words
        .iter()
        .filter(|iw| pattern_words.iter().any(|pw| tokens_share(iw, pw)))
        .count();
    if shared > 0 {
        let ratio = shared as f32 / input_words.len().max(pattern_words.len()) as f32;
        return ratio * SHARED_TOKEN_WEIGHT;
    }

    0.0
}

/// Two words count as shared when identical, or when both are long enough
/// that one containing the other is meaningful ("cleaning" / "clean").
fn tokens_share(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    a.chars().count() > SHARED_TOKEN_MIN_CHARS
        && b.chars().count() > SHARED_TOKEN_MIN_CHARS
        && (a.contains(b) || b.contains(a))
}
