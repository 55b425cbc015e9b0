use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_lists_every_commit_with_the_message(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a\n".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();
    gitlet_commit(dir, "same message").assert().success();
    write_file(FileSpec::new(dir.join("b.txt"), "b\n".to_string()));
    run_gitlet_command(dir, &["add", "b.txt"]).assert().success();
    gitlet_commit(dir, "same message").assert().success();

    let found = stdout_of(&mut run_gitlet_command(dir, &["find", "same message"]));
    assert_eq!(found.lines().count(), 2);

    run_gitlet_command(dir, &["find", "no such message"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");

    Ok(())
}
