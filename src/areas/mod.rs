//! Repository state
//!
//! - `database`: content-addressed stores for blobs and commits
//! - `graph`: branch heads, histories and the active branch
//! - `index`: staging area
//! - `refs`: persistence of branches and `HEAD`
//! - `repository`: the context value every operation runs against
//! - `workspace`: the user's files

pub mod database;
pub mod graph;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
