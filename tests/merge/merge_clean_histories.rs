use crate::common::command::{checkout, commit_file, run_gitlet_command, stdout_of};
use crate::common::file::read_file;
use crate::forked_repository_dir;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_takes_given_changes_to_files_untouched_on_current(
    forked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = forked_repository_dir.path();
    commit_file(dir, "master.txt", "from master\n", "master file");

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(&dir.join("file1.txt")), "y\n");
    assert_eq!(read_file(&dir.join("master.txt")), "from master\n");
    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.contains("=== Staged Files ===\n\n=== Removed Files ===\n\n"));

    Ok(())
}

/// History:
///       A
///      / \
///     C   B ----- D (feature)
///      \   \
///       M1--+
///       |
///       E (master)
///
/// The second merge must use B, not A, as its split point.
#[rstest]
fn merge_after_merge_uses_the_earlier_given_tip(
    forked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = forked_repository_dir.path();
    commit_file(dir, "other.txt", "c\n", "C");
    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    checkout(dir, "feature");
    commit_file(dir, "file1.txt", "d\n", "D");
    checkout(dir, "master");
    commit_file(dir, "other.txt", "e\n", "E");

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(&dir.join("file1.txt")), "d\n");
    assert_eq!(read_file(&dir.join("other.txt")), "e\n");

    Ok(())
}
