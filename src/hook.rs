//! Hook orchestration
//!
//! The one piece of real design in this tool: an explicit mapping from every
//! external-command outcome to a run result, so the hook never silently
//! passes a commit it should block and never blocks one on a swallowed
//! internal fault. Control flow is strictly linear: resolve change set,
//! filter, lint, report.

use log::{debug, info};

use crate::error::HookError;
use crate::filter;
use crate::lint::LintEngine;
use crate::output::RunReport;

/// Source of the staged change set
///
/// `None` means nothing is staged; `Some` carries the raw newline-separated
/// listing. Failures arrive pre-classified as [`HookError`] kinds.
pub trait ChangeSet {
    /// Resolve the raw staged-path listing for the pending commit
    fn staged_paths_raw(&self) -> Result<Option<String>, HookError>;
}

/// Run one hook pass: resolve, filter, lint
///
/// Returns a [`RunReport`] for every completed pass, including one with lint
/// findings; the caller decides how a failed report terminates the process.
/// Errors are reserved for passes that could not complete.
pub fn run(changes: &dyn ChangeSet, engine: &dyn LintEngine) -> Result<RunReport, HookError> {
    let Some(raw) = changes.staged_paths_raw()? else {
        return Ok(RunReport::nothing_staged());
    };

    let staged_total = filter::entries(&raw).count();
    let files = filter::lintable_files(&raw);

    if files.is_empty() {
        debug!("{staged_total} staged file(s), none lintable");
        return Ok(RunReport::nothing_lintable(staged_total));
    }

    info!("linting {} of {staged_total} staged file(s)", files.len());
    let summary = engine.lint(&files)?;

    Ok(RunReport::linted(staged_total, files.len(), summary))
}
