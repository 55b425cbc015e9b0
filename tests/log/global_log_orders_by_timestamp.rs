use crate::common::command::{
    checkout, commit_file_at, repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::commit_ids;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit_by_timestamp(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();
    let older = commit_file_at(dir, "a.txt", "older", "2025-01-01 00:00:00 +0000");
    run_gitlet_command(dir, &["branch", "side"])
        .assert()
        .success();
    let newest = commit_file_at(dir, "b.txt", "newest", "2025-01-03 00:00:00 +0000");
    checkout(dir, "side");
    let middle = commit_file_at(dir, "c.txt", "middle", "2025-01-02 00:00:00 +0000");
    run_gitlet_command(dir, &["rm-branch", "master"])
        .assert()
        .success();

    let global_log = stdout_of(&mut run_gitlet_command(dir, &["global-log"]));
    let ids = commit_ids(&global_log);

    assert_eq!(ids.len(), 4);
    assert_eq!(&ids[..3], &[newest, middle, older]);

    Ok(())
}
