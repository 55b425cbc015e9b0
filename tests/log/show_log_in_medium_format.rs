use crate::common::command::{commit_file_at, repository_dir, run_gitlet_command};
use crate::common::root_commit_id;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_history_newest_first_in_medium_format(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();
    let root = root_commit_id(dir);
    let first = commit_file_at(dir, "a.txt", "first", "2025-03-01 09:30:00 +0200");
    let second = commit_file_at(dir, "b.txt", "second", "Mon, 3 Mar 2025 10:00:05 -0500");

    run_gitlet_command(dir, &["log"])
        .assert()
        .success()
        .stdout(format!(
            "===\ncommit {second}\nDate: Mon Mar 3 10:00:05 2025 -0500\nsecond\n\n\
             ===\ncommit {first}\nDate: Sat Mar 1 09:30:00 2025 +0200\nfirst\n\n\
             ===\ncommit {root}\nDate: Wed Dec 31 16:00:00 1969 -0800\ninitial commit\n\n"
        ));

    Ok(())
}
