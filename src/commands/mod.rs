//! Command implementations
//!
//! Every command is an `impl Repository` block under `porcelain`. Commands
//! return plain values; formatting the report is left to the binary.

pub mod porcelain;
