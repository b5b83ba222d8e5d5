//! Stylish-layout report rendering
//!
//! Produces the familiar per-file report: underlined path, one aligned row
//! per finding, and a problem summary with a fixable hint.

use colored::Colorize;

use super::{FileFindings, LintSummary, Severity};

/// Render findings in the stylish layout
///
/// Returns an empty string when there are no findings and no counts, so a
/// clean pass prints nothing.
#[must_use]
pub fn stylish(files: &[FileFindings], summary: &LintSummary) -> String {
    if files.is_empty() && summary.is_clean() {
        return String::new();
    }

    let mut out = String::new();

    for file in files {
        out.push_str(&format!("{}\n", file.path.underline()));

        let loc_width = file
            .findings
            .iter()
            .map(|f| location(f.line, f.column).len())
            .max()
            .unwrap_or(0);

        for finding in &file.findings {
            // Pad before coloring; escape codes would break column alignment
            let loc = format!("{:<loc_width$}", location(finding.line, finding.column));
            let severity = match finding.severity {
                Severity::Error => format!("{:<7}", "error").red(),
                Severity::Warning => format!("{:<7}", "warning").yellow(),
            };
            let rule = finding.rule.as_deref().unwrap_or("");

            out.push_str(&format!(
                "  {}  {}  {}  {}\n",
                loc.dimmed(),
                severity,
                finding.message,
                rule.dimmed(),
            ));
        }
        out.push('\n');
    }

    out.push_str(&summary_line(summary));
    out
}

fn location(line: u32, column: u32) -> String {
    format!("{line}:{column}")
}

fn summary_line(summary: &LintSummary) -> String {
    let problems = summary.problem_count();
    let headline = format!(
        "\u{2716} {} ({}, {})",
        plural(problems, "problem"),
        plural(summary.error_count, "error"),
        plural(summary.warning_count, "warning"),
    );

    let mut out = if summary.error_count > 0 {
        format!("{}\n", headline.red().bold())
    } else {
        format!("{}\n", headline.yellow().bold())
    };

    if summary.fixable_error_count > 0 || summary.fixable_warning_count > 0 {
        let hint = format!(
            "  {} and {} potentially fixable with the `--fix` option.",
            plural(summary.fixable_error_count, "error"),
            plural(summary.fixable_warning_count, "warning"),
        );
        out.push_str(&format!("{}\n", hint.dimmed()));
    }

    out
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
