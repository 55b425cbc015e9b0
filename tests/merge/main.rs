#[path = "../common/mod.rs"]
mod common;

mod merge_clean_histories;
mod merge_with_conflicts;

use crate::common::command::{checkout, commit_file, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::fixture;

/// History:
///       A (file1 = x)
///      /
///     B (feature, file1 = y)
///
/// with master still at A and checked out
#[fixture]
pub fn forked_repository_dir(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();
    commit_file(dir, "file1.txt", "x\n", "A");
    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success();
    checkout(dir, "feature");
    commit_file(dir, "file1.txt", "y\n", "B");
    checkout(dir, "master");

    repository_dir
}
