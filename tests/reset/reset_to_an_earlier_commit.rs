use crate::common::command::{
    commit_file, gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reset_removes_files_absent_from_target_and_clears_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let target = head_commit_id(dir);
    commit_file(dir, "later.txt", "later\n", "later file");
    write_file(FileSpec::new(dir.join("staged.txt"), "staged\n".to_string()));
    run_gitlet_command(dir, &["add", "staged.txt"])
        .assert()
        .success();

    run_gitlet_command(dir, &["reset", &target])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!dir.join("later.txt").exists());
    assert_eq!(head_commit_id(dir), target);
    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nstaged.txt\n\n"));

    // nothing survives in the index
    gitlet_commit(dir, "nothing staged")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    Ok(())
}

#[rstest]
fn reset_to_an_unknown_commit_is_rejected(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir);

    run_gitlet_command(dir, &["reset", "abcdef0"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");

    assert_eq!(head_commit_id(dir), head);

    Ok(())
}
