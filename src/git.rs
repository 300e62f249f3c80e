use std::path::Path;
use std::process::Command;

use crate::error::SetupError;

// Exit code git config uses when unsetting an option that does not exist.
const GIT_EXIT_KEY_NOT_FOUND: i32 = 5;

fn is_mocking() -> bool {
    std::env::var("GITSIGN_MOCKING").is_ok()
}

/// Read-only check for the `.git` marker in the current directory. A plain
/// file also passes, which covers linked worktrees and submodules.
pub fn check_worktree() -> Result<(), SetupError> {
    if Path::new(".git").exists() {
        Ok(())
    } else {
        Err(SetupError::NotAGitRepository)
    }
}

/// Removes `key` from the local config scope. A key that is not set counts
/// as already clean.
pub fn unset_local(key: &str) -> Result<(), SetupError> {
    let mut cmd = Command::new("git");
    cmd.args(["config", "--local", "--unset", key]);

    if is_mocking() {
        eprintln!("[DRY-RUN] {:?}", cmd);
        return Ok(());
    }

    let status = cmd.status().map_err(|e| SetupError::CleanupFailed {
        key: key.to_string(),
        cause: e.to_string(),
    })?;

    if status.success() || status.code() == Some(GIT_EXIT_KEY_NOT_FOUND) {
        Ok(())
    } else {
        Err(SetupError::CleanupFailed {
            key: key.to_string(),
            cause: format!("git exited with status: {}", status),
        })
    }
}

/// Writes `key = value` into the local config scope.
pub fn set_local(key: &str, value: &str) -> Result<(), SetupError> {
    let mut cmd = Command::new("git");
    cmd.args(["config", "--local", key, value]);

    if is_mocking() {
        eprintln!("[DRY-RUN] {:?}", cmd);
        return Ok(());
    }

    let status = cmd.status().map_err(|e| SetupError::ApplyFailed {
        key: key.to_string(),
        cause: e.to_string(),
    })?;

    if !status.success() {
        return Err(SetupError::ApplyFailed {
            key: key.to_string(),
            cause: format!("git exited with status: {}", status),
        });
    }
    Ok(())
}
