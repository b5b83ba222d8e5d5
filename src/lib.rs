//! lintgate - a pre-commit hook that lints staged source files
//!
//! This library provides the hook's moving parts: resolving the staged
//! change set from git, filtering it to lintable source files, running an
//! external lint engine over the survivors, and mapping the result to a
//! commit-worthy / not-commit-worthy outcome.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod filter;
pub mod git;
pub mod hook;
pub mod lint;
pub mod output;
