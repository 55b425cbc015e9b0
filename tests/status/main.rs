#[path = "../common/mod.rs"]
mod common;

mod print_empty_sections_when_nothing_changed;
mod report_every_section_in_name_order;
mod list_staged_file_edited_again_as_modified;
