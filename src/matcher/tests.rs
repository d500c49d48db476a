use super::*;
use crate::catalog::Catalog;

#[test]
fn test_exact_match_after_normalization() {
    assert_eq!(score("Complete Task!", "complete task"), SCORE_EXACT);
    assert_eq!(score("complete the task", "complete task"), SCORE_EXACT);
}

#[test]
fn test_every_builtin_pattern_matches_itself() {
    for command in Catalog::builtin().commands() {
        for pattern in &command.patterns {
            assert_eq!(
                score(pattern, pattern),
                SCORE_EXACT,
                "pattern '{pattern}' of '{}' is not reflexively exact",
                command.id
            );
        }
    }
}

#[test]
fn test_input_containing_pattern() {
    assert_eq!(
        score("please complete task now", "complete task"),
        SCORE_INPUT_CONTAINS
    );
}

#[test]
fn test_pattern_containing_truncated_input() {
    assert_eq!(score("complete", "complete task"), SCORE_PATTERN_CONTAINS);
}

#[test]
fn test_token_subset_ignores_word_order() {
    // Both pattern words are present, but not as a contiguous substring.
    assert_eq!(score("task please complete", "complete task"), SCORE_TOKEN_SUBSET);
}

#[test]
fn test_token_subset_accepts_substring_words() {
    // "i" and "it" appear inside input words; "finished" matches exactly.
    assert_eq!(
        score("i think im finished with this one", "i finished it"),
        SCORE_TOKEN_SUBSET
    );
}

#[test]
fn test_edit_distance_tolerates_typos_but_is_dampened() {
    // One substitution away; similarity is high, then scaled by 0.8 so it
    // never beats containment.
    let close = score("complete tsk", "complete task");
    assert!(close > SCORE_TOKEN_SUBSET && close < SCORE_PATTERN_CONTAINS, "got {close}");

    // Two edits away drops below the token-subset tier.
    let further = score("complete tisks", "complete task");
    assert!(further > 0.6 && further < SCORE_TOKEN_SUBSET, "got {further}");
}

#[test]
fn test_shared_token_fallback() {
    let s = score("wash finished dishes", "finished cleaning");
    // One of three words is shared: (1/3) * 0.6.
    assert!((s - 0.2).abs() < 1e-6, "got {s}");
}

#[test]
fn test_shared_token_containment_requires_long_words() {
    // "cleaning" shares with "clean" by containment (both longer than 3).
    let long_words = score("start cleaning everything", "clean floors");
    assert!(long_words > 0.0);

    // "on" / "one" are too short to share by containment.
    assert_eq!(score("one more", "on top"), 0.0);
}

#[test]
fn test_no_lexical_overlap_scores_zero() {
    assert_eq!(score("xyz qqq zzz", "complete task"), 0.0);
}

#[test]
fn test_empty_and_stop_word_inputs_score_zero() {
    assert_eq!(score("", "complete task"), 0.0);
    assert_eq!(score("complete task", ""), 0.0);
    assert_eq!(score("the a an", "complete task"), 0.0);
}

#[test]
fn test_score_is_always_within_bounds() {
    let samples = [
        "",
        "add task clean the kitchen",
        "i think im finished with this one",
        "xyz qqq zzz",
        "complete tsk",
        "the the the",
        "go home now please",
    ];
    let catalog = Catalog::builtin();
    for input in samples {
        for command in catalog.commands() {
            for pattern in &command.patterns {
                let s = score(input, pattern);
                assert!((0.0..=1.0).contains(&s), "score({input}, {pattern}) = {s}");
            }
        }
    }
}
