//! Shared output formatting for lint results.

use anyhow::Result;
use copy_lint_core::{LintReport, Severity, TextLayer};
use serde::Serialize;

use crate::OutputFormat;

/// JSON document: the report plus the annotated layers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a LintReport,
    layers: &'a [TextLayer],
}

/// Print lint results in the specified format.
pub fn print(report: &LintReport, layers: &[TextLayer], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report, layers),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &LintReport) {
    let (errors, warnings, _) = report.count_by_severity();

    for violation in &report.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!("{}", violation.format_with(severity_indicator));
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!("{}{}\x1b[0m", summary_color, report.summary());
    println!(
        "Guidelines: {:.0}% of layers passing",
        report.guideline_stats.passing_percent()
    );
}

fn print_json(report: &LintReport, layers: &[TextLayer]) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonOutput { report, layers })?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &LintReport) {
    for violation in &report.violations {
        println!("{violation}");
    }
}
