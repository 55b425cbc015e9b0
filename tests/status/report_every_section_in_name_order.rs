use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_every_section_in_name_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("goodbye.txt"), "bye\n".to_string()));
    write_file(FileSpec::new(dir.join("junk.txt"), "junk\n".to_string()));
    run_gitlet_command(dir, &["add", "goodbye.txt", "junk.txt"])
        .assert()
        .success();
    run_gitlet_command(dir, &["commit", "-m", "two more"])
        .assert()
        .success();
    run_gitlet_command(dir, &["branch", "other-branch"])
        .assert()
        .success();

    // staged: wug2, removed: goodbye, deleted: junk, modified: wug, untracked: random
    write_file(FileSpec::new(dir.join("wug2.txt"), "another wug\n".to_string()));
    run_gitlet_command(dir, &["add", "wug2.txt"])
        .assert()
        .success();
    run_gitlet_command(dir, &["rm", "goodbye.txt"])
        .assert()
        .success();
    std::fs::remove_file(dir.join("junk.txt"))?;
    write_file(FileSpec::new(dir.join("wug.txt"), "changed wug\n".to_string()));
    write_file(FileSpec::new(dir.join("random.stuff"), "?\n".to_string()));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n\
             *master\n\
             other-branch\n\
             \n\
             === Staged Files ===\n\
             wug2.txt\n\
             \n\
             === Removed Files ===\n\
             goodbye.txt\n\
             \n\
             === Modifications Not Staged For Commit ===\n\
             junk.txt (deleted)\n\
             wug.txt (modified)\n\
             \n\
             === Untracked Files ===\n\
             random.stuff\n\
             \n",
        );

    Ok(())
}
