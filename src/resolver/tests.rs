use super::*;
use crate::catalog::{PARAM_DIRECTION, PARAM_TITLE};

fn resolver() -> CommandResolver {
    CommandResolver::new(Catalog::builtin())
}

#[test]
fn test_empty_utterance_never_matches() {
    assert!(resolver().resolve("").is_none());
    assert!(resolver().resolve("   ").is_none());
}

#[test]
fn test_exact_pattern_resolves_with_full_confidence() {
    let matched = resolver().resolve("complete task").unwrap();
    assert_eq!(matched.command.id, "complete_task");
    assert_eq!(matched.confidence, 1.0);
    assert_eq!(matched.pattern, "complete task");
}

#[test]
fn test_original_utterance_is_preserved_verbatim() {
    let matched = resolver().resolve("  Complete Task!  ").unwrap();
    assert_eq!(matched.input, "  Complete Task!  ");
}

#[test]
fn test_loose_phrasing_resolves_through_token_fallback() {
    // No pattern matches exactly or by containment; the token-subset tier
    // carries it to the complete-task command.
    let matched = resolver()
        .resolve("i think im finished with this one")
        .unwrap();
    assert_eq!(matched.command.id, "complete_task");
    assert!(
        matched.confidence >= 0.5 && matched.confidence <= 0.8,
        "confidence {} outside the fallback band",
        matched.confidence
    );
}

#[test]
fn test_gibberish_resolves_to_nothing() {
    assert!(resolver().resolve("xyz qqq zzz").is_none());
}

#[test]
fn test_resolved_confidence_equals_the_catalog_maximum() {
    let resolver = resolver();
    let utterances = [
        "add task clean the kitchen",
        "i think im finished with this one",
        "go home",
        "please show checklist now",
        "scan",
    ];
    for utterance in utterances {
        let mut best = 0.0f32;
        for command in resolver.catalog().commands() {
            for pattern in &command.patterns {
                best = best.max(crate::matcher::score(utterance, pattern));
            }
        }
        match resolver.resolve(utterance) {
            Some(matched) => {
                assert!(best >= ACCEPT_THRESHOLD);
                assert_eq!(matched.confidence, best, "wrong maximum for '{utterance}'");
            }
            None => assert!(best < ACCEPT_THRESHOLD, "missed a match for '{utterance}'"),
        }
    }
}

#[test]
fn test_add_task_extracts_title_from_raw_utterance() {
    let matched = resolver().resolve("add task clean the kitchen").unwrap();
    assert_eq!(matched.command.id, "add_task");
    // The title keeps its article: extraction reads the raw utterance,
    // not the stop-word-stripped form.
    assert_eq!(
        matched.params.get(PARAM_TITLE).map(String::as_str),
        Some("clean the kitchen")
    );
}

#[test]
fn test_add_task_title_is_case_insensitive_on_the_pattern() {
    let matched = resolver().resolve("Add Task water the plants").unwrap();
    assert_eq!(
        matched.params.get(PARAM_TITLE).map(String::as_str),
        Some("water the plants")
    );
}

#[test]
fn test_add_task_without_remainder_omits_the_title() {
    let matched = resolver().resolve("add task").unwrap();
    assert_eq!(matched.command.id, "add_task");
    assert!(matched.params.is_empty());
}

#[test]
fn test_move_task_up_extracts_direction() {
    let matched = resolver().resolve("move task up").unwrap();
    assert_eq!(matched.command.id, "move_task");
    assert_eq!(
        matched.params.get(PARAM_DIRECTION).map(String::as_str),
        Some("up")
    );
}

#[test]
fn test_less_important_extracts_down() {
    let matched = resolver().resolve("make it less important").unwrap();
    assert_eq!(matched.command.id, "move_task");
    assert_eq!(
        matched.params.get(PARAM_DIRECTION).map(String::as_str),
        Some("down")
    );
}

#[test]
fn test_move_without_direction_vocabulary_omits_the_parameter() {
    let matched = resolver().resolve("move task around").unwrap();
    assert_eq!(matched.command.id, "move_task");
    assert!(!matched.params.contains_key(PARAM_DIRECTION));
}

#[test]
fn test_up_vocabulary_wins_when_both_directions_appear() {
    let matched = resolver().resolve("move task up not down").unwrap();
    assert_eq!(
        matched.params.get(PARAM_DIRECTION).map(String::as_str),
        Some("up")
    );
}

#[test]
fn test_commands_without_declared_params_never_populate_any() {
    let matched = resolver().resolve("go home right now please").unwrap();
    assert_eq!(matched.command.id, "go_home");
    assert!(matched.params.is_empty());
}

#[test]
fn test_suggestions_rank_by_best_pattern_score() {
    let resolver = resolver();
    let suggestions = resolver.suggestions("add", 5);
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].id, "add_task");
}

#[test]
fn test_suggestions_respect_the_limit() {
    let resolver = resolver();
    assert!(resolver.suggestions("task", 2).len() <= 2);
    assert!(resolver.suggestions("task", 0).is_empty());
}

#[test]
fn test_suggestions_surface_matches_below_the_acceptance_floor() {
    let resolver = resolver();
    // "checklist" alone resolves to nothing catalog-wide or weakly, but
    // suggestion mode should still offer the checklist commands.
    let suggestions = resolver.suggestions("checklist", 5);
    assert!(suggestions.iter().any(|c| c.id == "show_tasks"));
}

#[test]
fn test_suggestions_for_gibberish_are_empty() {
    assert!(resolver().suggestions("xyz qqq zzz", 5).is_empty());
}
