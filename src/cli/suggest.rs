//! Suggest command implementation

use tidyvox::CommandResolver;

/// Print "did you mean" suggestions for a partial utterance.
pub fn suggest_command(resolver: &CommandResolver, partial: &str, limit: usize) {
    let suggestions = resolver.suggestions(partial, limit);

    if suggestions.is_empty() {
        println!("No suggestions.");
        return;
    }

    println!("Did you mean:\n");
    for command in suggestions {
        let example = command
            .examples
            .first()
            .or_else(|| command.patterns.first())
            .map(String::as_str)
            .unwrap_or_default();
        println!("  {:<18} e.g. \"{}\"", command.id, example);
    }
}
