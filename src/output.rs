//! Output formatting for human and JSON modes
//!
//! A hook pass produces one [`RunReport`]; it renders either as the stylish
//! lint report plus a status line, or as machine-parseable JSON.

use serde::Serialize;

use crate::lint::LintSummary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of one hook pass
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Whether the commit may proceed
    pub passed: bool,
    /// Staged files seen in the change set
    pub files_staged: usize,
    /// Staged files handed to the lint engine
    pub files_linted: usize,
    /// Lint aggregate; absent when the engine was never invoked
    pub summary: Option<LintSummary>,
}

impl RunReport {
    /// Report for a run with no staged changes
    #[must_use]
    pub const fn nothing_staged() -> Self {
        Self {
            passed: true,
            files_staged: 0,
            files_linted: 0,
            summary: None,
        }
    }

    /// Report for a run where no staged file was lintable
    #[must_use]
    pub const fn nothing_lintable(files_staged: usize) -> Self {
        Self {
            passed: true,
            files_staged,
            files_linted: 0,
            summary: None,
        }
    }

    /// Report for a completed lint pass
    #[must_use]
    pub fn linted(files_staged: usize, files_linted: usize, summary: LintSummary) -> Self {
        Self {
            passed: summary.is_clean(),
            files_staged,
            files_linted,
            summary: Some(summary),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files_staged == 0 {
            println!("No staged changes.");
            return;
        }

        if self.files_linted == 0 {
            println!(
                "{} staged file(s), none lintable. Commit may proceed.",
                self.files_staged
            );
            return;
        }

        if let Some(summary) = &self.summary {
            if !summary.report.is_empty() {
                println!("{}", summary.report);
            }

            if self.passed {
                println!(
                    "{} file(s) linted, no problems. Commit may proceed.",
                    self.files_linted
                );
            } else {
                println!(
                    "BLOCKED: {} lint problem(s) in {} staged file(s)",
                    summary.problem_count(),
                    self.files_linted
                );
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
