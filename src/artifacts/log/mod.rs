//! Commit history traversal
//!
//! `rev_list` walks first parents from a starting commit down to the root,
//! yielding a [`log_entry::LogEntry`] per commit.

pub mod log_entry;
pub mod rev_list;
