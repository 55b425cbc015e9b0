//! Branches and their histories
//!
//! - `branch_name`: validated branch names
//! - `branch`: a named head plus the set of commits reachable from it
//! - `revision`: resolution of full or abbreviated commit ids

pub mod branch;
pub mod branch_name;
pub mod revision;

/// Names that would break the `refs/heads/<name>` file layout or read as an id
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch every repository starts on
pub const DEFAULT_BRANCH: &str = "master";
