use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Pinned commit date for commits whose timestamp does not matter
pub const DEFAULT_COMMIT_DATE: &str = "2025-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with `wug.txt` committed on master
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("wug.txt"),
        "This is a wug.\n".to_string(),
    ));
    run_gitlet_command(repository_dir.path(), &["add", "wug.txt"])
        .assert()
        .success();
    gitlet_commit(repository_dir.path(), "added wug")
        .assert()
        .success();

    repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("GITLET_LOG", "off")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlet_commit(dir: &Path, message: &str) -> Command {
    gitlet_commit_with_timestamp(dir, message, DEFAULT_COMMIT_DATE)
}

pub fn gitlet_commit_with_timestamp(dir: &Path, message: &str, timestamp: &str) -> Command {
    let mut cmd = run_gitlet_command(dir, &["commit", "-m", message]);
    cmd.env("GITLET_COMMIT_DATE", timestamp);
    cmd
}

/// Overwrite `name` with `content`, stage it and commit
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    run_gitlet_command(dir, &["add", name]).assert().success();
    gitlet_commit(dir, message).assert().success();
}

/// Commit `name` holding `message` at the given date and return the new head id
pub fn commit_file_at(dir: &Path, name: &str, message: &str, timestamp: &str) -> String {
    write_file(FileSpec::new(dir.join(name), format!("{message}\n")));
    run_gitlet_command(dir, &["add", name]).assert().success();
    gitlet_commit_with_timestamp(dir, message, timestamp)
        .assert()
        .success();

    head_commit_id(dir)
}

pub fn checkout(dir: &Path, branch: &str) {
    run_gitlet_command(dir, &["checkout", branch])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run gitlet");
    String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

/// Id of the head commit of the active branch
pub fn head_commit_id(dir: &Path) -> String {
    let log = stdout_of(&mut run_gitlet_command(dir, &["log"]));

    crate::common::commit_ids(&log)
        .first()
        .cloned()
        .expect("log should list at least the root commit")
}
