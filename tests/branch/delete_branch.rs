use crate::common::command::{init_repository_dir, run_gitlet_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn removed_branch_disappears_from_status(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "doomed"])
        .assert()
        .success();

    run_gitlet_command(dir, &["rm-branch", "doomed"])
        .assert()
        .success();

    assert!(!dir.join(".gitlet/refs/heads/doomed").exists());
    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.starts_with("=== Branches ===\n*master\n\n"));

    Ok(())
}
