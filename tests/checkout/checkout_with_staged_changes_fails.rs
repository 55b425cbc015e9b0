use crate::common::command::{
    checkout, gitlet_commit, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::staged_addition(&["add", "extra.txt"], "=== Staged Files ===\nextra.txt\n\n")]
#[case::staged_removal(&["rm", "wug.txt"], "=== Removed Files ===\nwug.txt\n\n")]
fn checkout_branch_keeps_pending_changes_and_refuses(
    init_repository_dir: TempDir,
    #[case] stage: &[&str],
    #[case] pending_section: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("extra.txt"), "extra\n".to_string()));
    run_gitlet_command(dir, stage).assert().success();

    run_gitlet_command(dir, &["checkout", "other"])
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");

    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.starts_with("=== Branches ===\n*master\nother\n\n"), "{status}");
    assert!(status.contains(pending_section), "{status}");

    // once committed, the switch goes through
    gitlet_commit(dir, "pending work").assert().success();
    checkout(dir, "other");

    Ok(())
}
