#[path = "../common/mod.rs"]
mod common;

mod reset_to_an_earlier_commit;
