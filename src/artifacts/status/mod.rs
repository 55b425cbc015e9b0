//! Working tree classification
//!
//! - `file_change`: kinds of unstaged changes
//! - `status_info`: comparison of the head snapshot, the staging area and the work tree

pub mod file_change;
pub mod status_info;
