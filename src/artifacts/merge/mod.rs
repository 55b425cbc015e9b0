//! Three-way merge
//!
//! - `split_point`: lowest common ancestor of two branch heads
//! - `resolution`: per-path reconciliation of split, current and given snapshots

pub mod resolution;
pub mod split_point;
