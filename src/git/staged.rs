//! Staged change-set resolution
//!
//! Runs `git --no-pager diff --cached --name-only` against the working
//! directory and classifies every way that can go wrong. Diagnostic text from
//! a failed invocation is logged before the error propagates.

use std::process::Command;

use log::{debug, error};
use thiserror::Error;

use crate::error::HookError;
use crate::hook::ChangeSet;

/// Arguments for listing staged paths, pagination disabled
const STAGED_DIFF_ARGS: [&str; 4] = ["--no-pager", "diff", "--cached", "--name-only"];

/// Errors from resolving the staged change set
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be spawned
    #[error("failed to spawn git: {0}")]
    Spawn(#[source] std::io::Error),

    /// git ran but reported a hard failure
    #[error("git {status}: {stderr}")]
    Failed {
        /// Exit status as reported by the process
        status: String,
        /// Captured standard-error text
        stderr: String,
    },

    /// git exited cleanly but wrote to its error stream; the outcome is
    /// ambiguous and treated as a general failure
    #[error("git produced unexpected diagnostics: {0}")]
    Unknown(String),
}

impl From<GitError> for HookError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::Unknown(_) => Self::General(err.to_string()),
            GitError::Spawn(_) | GitError::Failed { .. } => {
                Self::CommandCannotExecute(err.to_string())
            },
        }
    }
}

/// The git index of the process working directory
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIndex;

impl ChangeSet for GitIndex {
    fn staged_paths_raw(&self) -> Result<Option<String>, HookError> {
        staged_output().map_err(HookError::from)
    }
}

/// List the paths staged for the next commit
///
/// Returns `None` when nothing is staged, otherwise the raw newline-separated
/// listing exactly as git printed it.
pub fn staged_output() -> Result<Option<String>, GitError> {
    let output = Command::new("git").args(STAGED_DIFF_ARGS).output().map_err(|err| {
        error!("failed to spawn git: {err}");
        GitError::Spawn(err)
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !output.status.success() {
        error!("git diff --cached failed ({}): {stderr}", output.status);
        return Err(GitError::Failed {
            status: output.status.to_string(),
            stderr,
        });
    }

    if !stderr.is_empty() {
        error!("git diff --cached succeeded but wrote to stderr: {stderr}");
        return Err(GitError::Unknown(stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if stdout.trim().is_empty() {
        debug!("no staged changes");
        Ok(None)
    } else {
        Ok(Some(stdout))
    }
}
