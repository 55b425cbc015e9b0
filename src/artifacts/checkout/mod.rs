//! Working tree migrations
//!
//! Moving the work tree from one snapshot to another (checkout of a branch,
//! reset, fast-forward, merge) is planned in full before anything is written,
//! so a file in the way aborts the operation with the work tree untouched.

pub mod migration;
