//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# copy-lint configuration

# Guideline set: recommended | basic | whitespace
preset = "recommended"

# Lowest severity that makes `copy-lint check` exit with status 1
fail_on = "error"

[filter]
# Which layers to report: all | unstyled-only | failing-only
layers = "all"
# all | visible | hidden
visibility = "all"

# Guideline configurations
# Each guideline can be enabled/disabled and have its severity overridden

[guidelines.sentence-case]
enabled = true
# severity = "warning"

[guidelines.no-trailing-spaces]
enabled = true

[guidelines.no-double-spaces]
enabled = true

[guidelines.indian-currency-commas]
enabled = true
# severity = "info"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("copy-lint.toml"), force)?;

    println!("Created copy-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit copy-lint.toml to configure guidelines");
    println!("  2. Run: copy-lint check layers.json");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
