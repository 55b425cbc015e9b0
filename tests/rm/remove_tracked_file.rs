use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn rm_stages_removal_and_deletes_tracked_file(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(init_repository_dir.path(), &["rm", "wug.txt"])
        .assert()
        .success();

    assert!(!init_repository_dir.path().join("wug.txt").exists());
    let status = stdout_of(&mut run_gitlet_command(init_repository_dir.path(), &["status"]));
    assert!(status.contains("=== Removed Files ===\nwug.txt\n\n"));

    gitlet_commit(init_repository_dir.path(), "removed wug")
        .assert()
        .success();
    let status = stdout_of(&mut run_gitlet_command(init_repository_dir.path(), &["status"]));
    assert!(status.contains("=== Removed Files ===\n\n"));

    Ok(())
}

#[rstest]
fn rm_of_a_staged_new_file_only_unstages_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("fresh.txt"), "fresh\n".to_string()));
    run_gitlet_command(dir, &["add", "fresh.txt"]).assert().success();

    run_gitlet_command(dir, &["rm", "fresh.txt"]).assert().success();

    assert!(dir.join("fresh.txt").exists());
    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.contains("=== Staged Files ===\n\n=== Removed Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\nfresh.txt\n\n"));

    Ok(())
}
