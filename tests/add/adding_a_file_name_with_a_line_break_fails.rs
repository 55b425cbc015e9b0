use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn adding_a_file_name_with_a_line_break_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("plain.txt"), "plain\n".to_string()));
    write_file(FileSpec::new(dir.join("two\nlines.txt"), "odd\n".to_string()));

    run_gitlet_command(dir, &["add", "."])
        .assert()
        .success()
        .stdout("Unsupported file name: two\nlines.txt\n");

    gitlet_commit(dir, "nothing")
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    // the rest of the tree can still be committed once the file is gone
    std::fs::remove_file(dir.join("two\nlines.txt"))?;
    run_gitlet_command(dir, &["add", "."]).assert().success();
    gitlet_commit(dir, "plain file")
        .assert()
        .success()
        .stdout("");

    Ok(())
}
