//! Staged-path filtering
//!
//! Turns the raw staged-file listing from git into the list of paths the
//! lint engine should see: split on the platform line terminator, drop empty
//! segments, keep source-file extensions, and never hand the hook script
//! itself to the linter.

/// Extensions the lint engine understands
const LINTABLE_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Legacy hook script path, always excluded so the hook never lints itself
pub const SELF_HOOK_PATH: &str = "scripts/pre-commit.js";

/// Line terminator used to split the staged-file listing on this platform
#[must_use]
pub const fn line_terminator() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

/// Non-empty entries of the raw staged-file listing, in order
///
/// Trailing terminators do not produce empty entries.
pub fn entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(line_terminator()).filter(|segment| !segment.is_empty())
}

/// Filter the raw staged-file listing down to lintable paths
///
/// Order is preserved from the original listing.
#[must_use]
pub fn lintable_files(raw: &str) -> Vec<String> {
    entries(raw).filter(|path| is_lintable(path)).map(String::from).collect()
}

fn is_lintable(path: &str) -> bool {
    if path == SELF_HOOK_PATH {
        return false;
    }
    LINTABLE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
