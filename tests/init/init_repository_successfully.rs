use crate::common::command::{repository_dir, run_gitlet_command};
use crate::common::root_commit_id;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn new_repository_initiated_with_gitlet_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(repository_dir.path().join(".gitlet").is_dir());
    assert!(repository_dir.path().join(".gitlet/HEAD").is_file());
    assert!(repository_dir.path().join(".gitlet/refs/heads/master").is_file());

    Ok(())
}

#[test]
fn independent_repositories_share_the_root_commit() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    for dir in [&first, &second] {
        run_gitlet_command(dir.path(), &["init"]).assert().success();
    }

    assert_eq!(root_commit_id(first.path()), root_commit_id(second.path()));

    Ok(())
}

#[rstest]
fn root_commit_is_logged_with_the_epoch_timestamp(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_gitlet_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^===\ncommit [0-9a-f]{40}\nDate: Wed Dec 31 16:00:00 1969 -0800\ninitial commit\n\n$",
        )?);

    Ok(())
}
