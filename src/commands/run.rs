//! Run the lint pass over staged files (pre-commit hook entry)

use lintgate::error::HookError;
use lintgate::git::GitIndex;
use lintgate::hook;
use lintgate::lint::EslintEngine;
use lintgate::output::OutputMode;

/// Lint the staged change set and fail when findings are present
///
/// The report is rendered before a failed pass is turned into an error, so
/// the findings always reach the user.
pub fn run(mode: OutputMode) -> anyhow::Result<()> {
    let report = hook::run(&GitIndex, &EslintEngine::default())?;
    report.render(mode);

    if report.passed {
        return Ok(());
    }

    let problems = report.summary.as_ref().map_or(0, lintgate::lint::LintSummary::problem_count);
    Err(HookError::General(format!("{problems} lint problem(s) in staged files")).into())
}
