use crate::common::command::{checkout, commit_file, repository_dir, run_gitlet_command, stdout_of};
use crate::common::commit_ids;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_follows_first_parents_only(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();
    commit_file(dir, "base.txt", "base\n", "base");
    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success();
    checkout(dir, "feature");
    commit_file(dir, "feature.txt", "feature\n", "feature work");
    checkout(dir, "master");
    commit_file(dir, "master.txt", "master\n", "master work");
    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success();

    let log = stdout_of(&mut run_gitlet_command(dir, &["log"]));

    assert!(log.starts_with("===\ncommit "));
    assert!(log.contains("Merged feature into master.\n"));
    assert!(log.contains("master work\n"));
    assert!(!log.contains("feature work\n"));
    assert_eq!(commit_ids(&log).len(), 4);

    Ok(())
}
