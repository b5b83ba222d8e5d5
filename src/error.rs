//! Hook outcome errors
//!
//! The hook signals failure through a two-kind error: a clean, expected
//! failure (lint findings present, or an ambiguous external-command outcome)
//! versus "the external command could not be run at all". Exit codes are
//! applied only at the binary's outermost boundary, never inside the library.

use thiserror::Error;

/// Exit code for a general failure (lint findings, ambiguous outcome)
pub const GENERAL_ERROR: i32 = 1;

/// Exit code for "command found but could not be executed"
pub const COMMAND_CANNOT_EXECUTE: i32 = 126;

/// Errors that terminate a hook run
#[derive(Debug, Error)]
pub enum HookError {
    /// Expected failure: lint findings, or an unclassified external outcome
    #[error("{0}")]
    General(String),

    /// The external command or lint engine could not be invoked/completed
    #[error("command cannot execute: {0}")]
    CommandCannotExecute(String),
}

impl HookError {
    /// Process exit code for this error, mirroring shell conventions
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::General(_) => GENERAL_ERROR,
            Self::CommandCannotExecute(_) => COMMAND_CANNOT_EXECUTE,
        }
    }
}
