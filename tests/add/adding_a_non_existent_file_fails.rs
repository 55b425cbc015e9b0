use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("real.txt"), "real\n".to_string()));

    run_gitlet_command(dir, &["add", "real.txt", "ghost.txt"])
        .assert()
        .success()
        .stdout("File does not exist.\n");

    // nothing from the same invocation is staged
    gitlet_commit(dir, "nothing")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    Ok(())
}
