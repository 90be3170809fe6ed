//! copy-lint CLI tool.
//!
//! Usage:
//! ```bash
//! copy-lint check [OPTIONS] [INPUT]
//! copy-lint list-rules
//! copy-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod settings;

/// Style-guideline linter for text layers in design documents
#[derive(Parser)]
#[command(name = "copy-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run guidelines over text layers
    Check {
        /// JSON layer export to lint ("-" reads stdin)
        #[arg(conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Lint literal text samples instead of a layer export
        #[arg(short, long)]
        text: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific guidelines (comma-separated ids)
        #[arg(short, long)]
        guidelines: Option<String>,

        /// Preset to start from (overrides the config file)
        #[arg(short, long)]
        preset: Option<PresetArg>,

        /// Which layers to report
        #[arg(long)]
        filter: Option<LayerFilterArg>,

        /// Which layers to report, by visibility
        #[arg(long)]
        visibility: Option<VisibilityArg>,
    },

    /// List available guidelines
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

/// Preset selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PresetArg {
    /// All built-in guidelines.
    Recommended,
    /// Casing and whitespace.
    Basic,
    /// Whitespace only.
    Whitespace,
}

/// Layer filter selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LayerFilterArg {
    /// Every layer.
    All,
    /// Layers without a text style.
    UnstyledOnly,
    /// Layers failing a guideline.
    FailingOnly,
}

/// Visibility filter selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum VisibilityArg {
    /// Every layer.
    All,
    /// Visible layers.
    Visible,
    /// Hidden layers.
    Hidden,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            input,
            text,
            format,
            guidelines,
            preset,
            filter,
            visibility,
        } => {
            let options = commands::check::CheckOptions {
                input,
                text,
                format,
                guidelines,
                preset,
                filter,
                visibility,
            };
            commands::check::run(options, cli.config.as_deref())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
