//! Version-control data structures and algorithms
//!
//! - `branch`: branch names, branch records and commit id prefixes
//! - `checkout`: planned work tree migrations
//! - `core`: shared output helpers (pager writer)
//! - `index`: on-disk layout of the staging area
//! - `log`: commit history traversal
//! - `merge`: split point search and three-way reconciliation
//! - `objects`: blobs, commits and their digests
//! - `status`: work tree classification

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
