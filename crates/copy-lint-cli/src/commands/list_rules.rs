//! List rules command implementation.

use copy_lint_rules::{all_guidelines, Guideline, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available guidelines:\n");
    println!("{:<24} {:<24} Description", "Id", "Name");
    println!("{}", "-".repeat(100));

    for guideline in all_guidelines() {
        println!(
            "{:<24} {:<24} {}",
            guideline.id(),
            guideline.name(),
            guideline.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let ids: Vec<&str> = preset.guidelines().iter().map(Guideline::id).collect();
        let marker = if preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<12} - {}{}", preset.name(), ids.join(", "), marker);
    }

    println!("\nUse --guidelines to run specific guidelines, e.g.:");
    println!("  copy-lint check layers.json --guidelines sentence-case,no-double-spaces");
}
