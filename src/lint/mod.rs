//! Lint engine abstraction
//!
//! The hook treats the linter as an external capability: hand it file paths,
//! get back finding counts plus a human-readable report. The concrete
//! implementation shells out to ESLint; orchestration and tests depend only
//! on the [`LintEngine`] trait.

use serde::Serialize;
use thiserror::Error;

use crate::error::HookError;

pub mod eslint;
pub mod format;

pub use eslint::EslintEngine;

/// Errors from invoking the lint engine
///
/// Every variant means the engine could not complete a lint pass; findings
/// are never an error at this level.
#[derive(Debug, Error)]
pub enum LintError {
    /// The engine binary could not be spawned
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// The engine program name
        program: String,
        /// Underlying spawn failure
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but faulted (configuration error, internal crash)
    #[error("{program} could not complete: {detail}")]
    Engine {
        /// The engine program name
        program: String,
        /// Captured diagnostic text
        detail: String,
    },
}

impl From<LintError> for HookError {
    fn from(err: LintError) -> Self {
        Self::CommandCannotExecute(err.to_string())
    }
}

/// Severity of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory finding; still counts toward failing the hook
    Warning,
    /// Hard error
    Error,
}

/// A single lint finding within a file
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// 1-indexed line
    pub line: u32,
    /// 1-indexed column
    pub column: u32,
    /// Finding severity
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
    /// Rule that produced the finding, when the engine names one
    pub rule: Option<String>,
}

/// All findings for one linted file
#[derive(Debug, Clone, Serialize)]
pub struct FileFindings {
    /// Path as reported by the engine
    pub path: String,
    /// Findings in engine order
    pub findings: Vec<Finding>,
}

/// Aggregate result of one lint pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    /// Hard errors
    pub error_count: usize,
    /// Warnings
    pub warning_count: usize,
    /// Errors the engine claims it could auto-correct
    pub fixable_error_count: usize,
    /// Warnings the engine claims it could auto-correct
    pub fixable_warning_count: usize,
    /// Formatted report text (stylish layout), empty when nothing to report
    #[serde(skip)]
    pub report: String,
}

impl LintSummary {
    /// A pass is clean only when all four counts are zero; warnings alone
    /// are enough to fail the hook
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.error_count == 0
            && self.warning_count == 0
            && self.fixable_error_count == 0
            && self.fixable_warning_count == 0
    }

    /// Total findings (errors plus warnings)
    #[must_use]
    pub const fn problem_count(&self) -> usize {
        self.error_count + self.warning_count
    }
}

/// External lint capability: file paths in, findings aggregate out
pub trait LintEngine {
    /// Lint exactly the given paths with the engine's default configuration
    fn lint(&self, files: &[String]) -> Result<LintSummary, LintError>;
}
