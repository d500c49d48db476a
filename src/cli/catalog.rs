//! Commands listing

use tidyvox::Catalog;

/// Print every catalog command with its patterns.
pub fn catalog_command(catalog: &Catalog) {
    println!("{} command(s):\n", catalog.len());

    for command in catalog.commands() {
        println!("  {} [{}]", command.id, command.category);
        if !command.description.is_empty() {
            println!("    {}", command.description);
        }
        println!("    patterns: {}", command.patterns.join(" | "));
        if !command.params.is_empty() {
            let names: Vec<&str> = command.params.keys().map(String::as_str).collect();
            println!("    params:   {}", names.join(", "));
        }
        println!();
    }
}
