#[path = "../common/mod.rs"]
mod common;

mod init_repository_successfully;
mod init_existing_repository;
mod command_outside_a_repository;
