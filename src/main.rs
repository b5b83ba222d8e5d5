//! lintgate - a pre-commit hook that lints staged source files
//!
//! Invoked by git's pre-commit hook (or directly): it resolves the staged
//! change set, lints the source files in it, and exits 0 only when the
//! commit is clean.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

use lintgate::error::{GENERAL_ERROR, HookError};

/// Main entry point: exit codes are assigned here and nowhere else
fn main() {
    let code = match cli::run() {
        Ok(()) => 0,
        Err(err) => {
            log::error!("{err:#}");
            // Unclassified faults fall back to the general error code
            err.downcast_ref::<HookError>().map_or(GENERAL_ERROR, HookError::exit_code)
        },
    };
    std::process::exit(code);
}
