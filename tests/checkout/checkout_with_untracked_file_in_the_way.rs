use crate::common::command::{
    checkout, commit_file, init_repository_dir, run_gitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn untracked_file_in_the_way_blocks_branch_switch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"])
        .assert()
        .success();
    checkout(dir, "other");
    commit_file(dir, "clash.txt", "tracked on other\n", "clash on other");
    checkout(dir, "master");
    write_file(FileSpec::new(dir.join("clash.txt"), "mine\n".to_string()));

    run_gitlet_command(dir, &["checkout", "other"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(read_file(&dir.join("clash.txt")), "mine\n");
    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.starts_with("=== Branches ===\n*master\n"));

    Ok(())
}
