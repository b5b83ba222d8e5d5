//! End-to-end tests for the lintgate binary
//!
//! The git side runs against throwaway repositories; the lint engine is a
//! fake `eslint` script placed ahead of the real one on PATH so the tests
//! control every exit code and report shape.

mod common;

use assert_cmd::Command;
use common::git_repo::TempGitRepo;
use predicates::prelude::*;

fn lintgate() -> Command {
    Command::cargo_bin("lintgate").expect("binary exists")
}

#[test]
fn version_prints_version() {
    lintgate()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lintgate v"));
}

#[test]
fn version_json_is_machine_readable() {
    lintgate()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn nothing_staged_exits_zero() {
    let repo = TempGitRepo::new();
    lintgate()
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No staged changes."));
}

#[test]
fn non_source_files_exit_zero_without_engine() {
    let repo = TempGitRepo::new();
    repo.write_file("README.md", "# hello\n");
    repo.stage("README.md");

    // No eslint needed: the filter never lets README.md through
    lintgate()
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("none lintable"));
}

#[test]
fn hook_script_alone_exits_zero() {
    let repo = TempGitRepo::new();
    repo.write_file("scripts/pre-commit.js", "// legacy hook\n");
    repo.stage("scripts/pre-commit.js");

    lintgate().current_dir(repo.path()).assert().success();
}

#[test]
fn install_writes_executable_hook() {
    let repo = TempGitRepo::new();
    lintgate()
        .current_dir(repo.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed pre-commit hook"));

    let hook = std::fs::read_to_string(repo.path().join(".git/hooks/pre-commit")).unwrap();
    assert!(hook.contains("lintgate run"));

    // Second install is a no-op without --force
    lintgate()
        .current_dir(repo.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));
}

#[cfg(unix)]
mod with_fake_engine {
    use super::*;
    use tempfile::TempDir;

    const CLEAN_REPORT: &str = r#"[{"filePath": "src/app.ts", "messages": [], "errorCount": 0, "warningCount": 0, "fixableErrorCount": 0, "fixableWarningCount": 0}]"#;

    const WARNING_REPORT: &str = r#"[{"filePath": "src/app.ts", "messages": [{"ruleId": "semi", "severity": 1, "message": "Missing semicolon.", "line": 1, "column": 10}], "errorCount": 0, "warningCount": 1, "fixableErrorCount": 0, "fixableWarningCount": 1}]"#;

    fn staged_source_repo() -> TempGitRepo {
        let repo = TempGitRepo::new();
        repo.write_file("src/app.ts", "const x = 1\n");
        repo.stage("src/app.ts");
        repo
    }

    #[test]
    fn clean_lint_exits_zero() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        common::fake_eslint(bin.path(), CLEAN_REPORT, 0);

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .success()
            .stdout(predicate::str::contains("Commit may proceed"));
    }

    #[test]
    fn warnings_alone_exit_one() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        common::fake_eslint(bin.path(), WARNING_REPORT, 0);

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("BLOCKED"));
    }

    #[test]
    fn report_is_printed_on_failure() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        common::fake_eslint(bin.path(), WARNING_REPORT, 0);

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Missing semicolon."))
            .stdout(predicate::str::contains("semi"));
    }

    #[test]
    fn engine_fault_exits_126() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        common::fake_bin(
            bin.path(),
            "eslint",
            "#!/bin/sh\necho 'Oops! Something went wrong!' >&2\nexit 2\n",
        );

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .code(126);
    }

    #[test]
    fn unparseable_engine_output_exits_126() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        common::fake_bin(bin.path(), "eslint", "#!/bin/sh\necho 'not json'\nexit 0\n");

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .code(126);
    }

    #[test]
    fn failing_git_exits_126() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        common::fake_bin(
            bin.path(),
            "git",
            "#!/bin/sh\necho 'fatal: index corrupted' >&2\nexit 128\n",
        );

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .code(126)
            .stderr(predicate::str::contains("index corrupted"));
    }

    #[test]
    fn git_stderr_on_success_exits_one() {
        let repo = staged_source_repo();
        let bin = TempDir::new().unwrap();
        // Exit 0 but noise on stderr: ambiguous outcome, general failure
        common::fake_bin(
            bin.path(),
            "git",
            "#!/bin/sh\necho 'warning: something odd' >&2\necho 'src/app.ts'\nexit 0\n",
        );

        lintgate()
            .current_dir(repo.path())
            .env("PATH", common::path_with(bin.path()))
            .assert()
            .code(1);
    }
}
