use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_setup_mocking_dry_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config");
    let repo_dir = temp_dir.path().join("repo");

    fs::create_dir_all(&repo_dir)?;
    std::process::Command::new("git")
        .arg("init")
        .current_dir(&repo_dir)
        .stdout(std::process::Stdio::null())
        .output()?;

    let before = fs::read_to_string(repo_dir.join(".git/config"))?;

    Command::new(env!("CARGO_BIN_EXE_gitsign-setup"))
        .env("GITSIGN_CONFIG_PATH", &config_path)
        .env("GITSIGN_MOCKING", "1")
        .current_dir(&repo_dir)
        .args(&["setup-gitsign", "-e", "a@b.co"])
        .assert()
        .success()
        // Cleanup and apply are both echoed instead of executed.
        .stderr(predicates::str::contains("[DRY-RUN]"))
        .stderr(predicates::str::contains("--unset"))
        .stderr(predicates::str::contains("user.signingkey"))
        .stderr(predicates::str::contains("commit.gpgsign"))
        .stderr(predicates::str::contains("user.email"));

    // The repository config is untouched in dry-run mode.
    let after = fs::read_to_string(repo_dir.join(".git/config"))?;
    assert_eq!(before, after);

    Ok(())
}
