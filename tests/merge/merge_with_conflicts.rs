use crate::common::command::{checkout, commit_file, head_commit_id, run_gitlet_command, stdout_of};
use crate::common::commit_ids;
use crate::common::file::read_file;
use crate::forked_repository_dir;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn divergent_edits_produce_a_conflicted_merge_commit(
    forked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = forked_repository_dir.path();
    checkout(dir, "feature");
    let given = head_commit_id(dir);
    checkout(dir, "master");
    commit_file(dir, "file1.txt", "z\n", "C");
    let current = head_commit_id(dir);

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("file1.txt")),
        "<<<<<<< HEAD\nz\n=======\ny\n>>>>>>>\n"
    );

    let log = stdout_of(&mut run_gitlet_command(dir, &["log"]));
    let expected_header = format!("Merge: {} {}\n", &current[..7], &given[..7]);
    assert!(log.contains(&expected_header), "{log}");
    assert!(log.contains("Merged feature into master.\n"));
    assert_eq!(commit_ids(&log)[1], current);

    Ok(())
}

#[rstest]
fn removal_on_current_against_edit_on_given_conflicts(
    forked_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = forked_repository_dir.path();
    checkout(dir, "feature");
    commit_file(dir, "feature.txt", "from feature\n", "feature file");
    checkout(dir, "master");
    commit_file(dir, "master.txt", "from master\n", "master file");
    run_gitlet_command(dir, &["rm", "file1.txt"])
        .assert()
        .success();
    run_gitlet_command(dir, &["commit", "-m", "drop file1 on master"])
        .assert()
        .success();

    run_gitlet_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    // file1 was removed on master and modified on feature
    assert_eq!(
        read_file(&dir.join("file1.txt")),
        "<<<<<<< HEAD\n=======\ny\n>>>>>>>\n"
    );
    assert_eq!(read_file(&dir.join("feature.txt")), "from feature\n");
    assert_eq!(read_file(&dir.join("master.txt")), "from master\n");

    Ok(())
}
