#[path = "../common/mod.rs"]
mod common;

mod remove_tracked_file;
mod remove_untracked_file_fails;
