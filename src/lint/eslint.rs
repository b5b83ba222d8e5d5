//! ESLint-backed lint engine
//!
//! Shells out to the `eslint` binary with `--format json` and parses the
//! machine-readable report. ESLint's own exit code is only used to tell a
//! completed pass (0 or 1) from an engine fault (anything else); the
//! pass/fail decision belongs to the caller, which inspects the counts.

use std::process::Command;

use log::{debug, error};
use serde::Deserialize;

use super::{FileFindings, Finding, LintEngine, LintError, LintSummary, Severity, format};

/// Per-file result in ESLint's JSON report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFileResult {
    file_path: String,
    #[serde(default)]
    messages: Vec<RawMessage>,
    #[serde(default)]
    error_count: usize,
    #[serde(default)]
    warning_count: usize,
    #[serde(default)]
    fixable_error_count: usize,
    #[serde(default)]
    fixable_warning_count: usize,
}

/// One finding in ESLint's JSON report; severity is 1 (warning) or 2 (error)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessage {
    #[serde(default)]
    rule_id: Option<String>,
    severity: u8,
    message: String,
    #[serde(default)]
    line: u32,
    #[serde(default)]
    column: u32,
}

/// Lint engine that invokes the `eslint` binary from `PATH`
#[derive(Debug, Clone)]
pub struct EslintEngine {
    program: String,
}

impl Default for EslintEngine {
    fn default() -> Self {
        Self::new("eslint")
    }
}

impl EslintEngine {
    /// Create an engine invoking the given program in place of `eslint`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn fault(&self, detail: impl Into<String>) -> LintError {
        let detail = detail.into();
        error!("{} could not complete: {detail}", self.program);
        LintError::Engine {
            program: self.program.clone(),
            detail,
        }
    }
}

impl LintEngine for EslintEngine {
    fn lint(&self, files: &[String]) -> Result<LintSummary, LintError> {
        debug!("running {} on {} file(s)", self.program, files.len());

        let output = Command::new(&self.program)
            .args(["--format", "json"])
            .args(files)
            .output()
            .map_err(|source| {
                error!("failed to spawn {}: {source}", self.program);
                LintError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            })?;

        // 0 = clean, 1 = findings present; both are completed passes.
        // Anything else (2 = fatal/config error, signals) is an engine fault.
        if !matches!(output.status.code(), Some(0 | 1)) {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(self.fault(format!("{}: {stderr}", output.status)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let raw: Vec<RawFileResult> = serde_json::from_str(stdout.trim())
            .map_err(|err| self.fault(format!("unparseable report: {err}")))?;

        Ok(summarize(raw))
    }
}

/// Sum the per-file counts and render the report
fn summarize(raw: Vec<RawFileResult>) -> LintSummary {
    let mut summary = LintSummary::default();
    let mut files = Vec::with_capacity(raw.len());

    for file in raw {
        summary.error_count += file.error_count;
        summary.warning_count += file.warning_count;
        summary.fixable_error_count += file.fixable_error_count;
        summary.fixable_warning_count += file.fixable_warning_count;

        if file.messages.is_empty() {
            continue;
        }

        let findings = file
            .messages
            .into_iter()
            .map(|m| Finding {
                line: m.line,
                column: m.column,
                severity: if m.severity >= 2 {
                    Severity::Error
                } else {
                    Severity::Warning
                },
                message: m.message,
                rule: m.rule_id,
            })
            .collect();

        files.push(FileFindings {
            path: file.file_path,
            findings,
        });
    }

    summary.report = format::stylish(&files, &summary);
    summary
}
