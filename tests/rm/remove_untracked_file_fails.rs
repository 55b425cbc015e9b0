use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn rm_of_untracked_unstaged_file_is_rejected(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        init_repository_dir.path().join("loose.txt"),
        "loose\n".to_string(),
    ));

    run_gitlet_command(init_repository_dir.path(), &["rm", "loose.txt"])
        .assert()
        .success()
        .stdout("No reason to remove the file.\n");
    assert!(init_repository_dir.path().join("loose.txt").exists());

    Ok(())
}
