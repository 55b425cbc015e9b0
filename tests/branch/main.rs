#[path = "../common/mod.rs"]
mod common;

mod delete_branch;
