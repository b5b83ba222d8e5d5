//! Shared test helpers

pub mod git_repo;

#[cfg(unix)]
use std::ffi::OsString;
#[cfg(unix)]
use std::path::Path;

/// Write an executable fake binary into `dir`
#[cfg(unix)]
pub fn fake_bin(dir: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, script).expect("Failed to write fake binary");
    let mut perms = std::fs::metadata(&path).expect("Failed to stat fake binary").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("Failed to chmod fake binary");
}

/// A fake `eslint` that prints the given JSON report and exits with `code`
#[cfg(unix)]
pub fn fake_eslint(dir: &Path, report_json: &str, code: i32) {
    let script = format!("#!/bin/sh\ncat <<'REPORT'\n{report_json}\nREPORT\nexit {code}\n");
    fake_bin(dir, "eslint", &script);
}

/// PATH value with `dir` prepended to the inherited search path
#[cfg(unix)]
pub fn path_with(dir: &Path) -> OsString {
    let mut path = OsString::from(dir);
    path.push(":");
    path.push(std::env::var_os("PATH").unwrap_or_default());
    path
}
