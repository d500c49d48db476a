//! Resolve command implementation

use anyhow::Result;

use tidyvox::CommandResolver;

/// Resolve one utterance and print the winning command, if any.
pub fn resolve_command(resolver: &CommandResolver, utterance: &str, json: bool) -> Result<()> {
    let Some(matched) = resolver.resolve(utterance) else {
        println!("No command recognized.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    println!(
        "{} [{}] (confidence {:.2}, via \"{}\")",
        matched.command.id, matched.command.category, matched.confidence, matched.pattern
    );
    for (name, value) in &matched.params {
        println!("  {} = {}", name, value);
    }

    Ok(())
}
