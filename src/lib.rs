//! gitlet: a local, single-user version-control engine
//!
//! - `areas`: the persisted state of a repository (object stores, refs, index,
//!   work tree) and the [`Repository`](areas::repository::Repository) that ties them together
//! - `artifacts`: the data types and algorithms those areas are built on
//! - `commands`: user-facing operations on a repository
//! - `config`: per-invocation settings
//! - `errors`: the error taxonomy returned by every operation

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
