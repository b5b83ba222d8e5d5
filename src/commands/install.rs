//! Pre-commit hook installation

use std::fs;
use std::path::Path;

use lintgate::output::{OperationResult, OutputMode};

const HOOK_CONTENT: &str = "#!/bin/sh
# lintgate pre-commit hook
# Lints staged source files; a non-zero exit blocks the commit.

exec lintgate run
";

/// Install the pre-commit hook into the current repository
pub fn install(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let hooks_dir = Path::new(".git/hooks");
    if !hooks_dir.exists() {
        anyhow::bail!("Not a git repository (.git/hooks not found)");
    }

    let hook_path = hooks_dir.join("pre-commit");

    let message = if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if existing.contains("lintgate") && !force {
            "Pre-commit hook already installed (use --force to rewrite)".to_string()
        } else if existing.contains("lintgate") {
            fs::write(&hook_path, HOOK_CONTENT)?;
            "Rewrote pre-commit hook".to_string()
        } else {
            // Append to existing hook
            let new_content = format!("{}\n\n# lintgate\n{}", existing.trim(), HOOK_CONTENT);
            fs::write(&hook_path, new_content)?;
            "Appended lintgate to existing pre-commit hook".to_string()
        }
    } else {
        fs::write(&hook_path, HOOK_CONTENT)?;
        "Installed pre-commit hook".to_string()
    };

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    OperationResult {
        success: true,
        message,
    }
    .render(mode);

    Ok(())
}
