use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn staged_file_edited_again_is_reported_as_modified(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("wug.txt"), "second\n".to_string()));
    run_gitlet_command(dir, &["add", "wug.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("wug.txt"), "third\n".to_string()));

    let output = run_gitlet_command(dir, &["status"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("=== Staged Files ===\nwug.txt\n\n"));
    assert!(stdout.contains("=== Modifications Not Staged For Commit ===\nwug.txt (modified)\n\n"));

    Ok(())
}
