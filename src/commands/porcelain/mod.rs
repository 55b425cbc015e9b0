//! User-facing operations
//!
//! - `init`: create the repository and the root commit
//! - `add`, `rm`: stage additions and removals
//! - `commit`: snapshot the staging area
//! - `status`: branches, staging area and work tree changes
//! - `log`: first-parent history, every commit, lookup by message
//! - `checkout`: restore files or switch branches
//! - `branch`: create and delete branches
//! - `reset`: move the active branch to another commit
//! - `merge`: three-way merge of another branch into the active one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
