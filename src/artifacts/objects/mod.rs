//! Object types and operations
//!
//! All content is stored as immutable objects identified by SHA-1 digests:
//!
//! - **Blob**: file content (raw bytes)
//! - **Commit**: snapshot of tracked paths with message, timestamp and parents
//!
//! Both serialize as `<type> <size>\0<content>`; the digest covers the header.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
