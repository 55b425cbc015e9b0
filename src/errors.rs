//! Error taxonomy
//!
//! [`GitletError`] is returned by every [`Repository`](crate::areas::repository::Repository)
//! operation. Its `Display` output is the message shown to the user, and
//! [`GitletError::kind`] groups the variants into the categories callers branch on.
//! Storage failures from the object store, refs or work tree are carried through
//! as [`GitletError::Storage`] with their `anyhow` context chain intact.

use crate::artifacts::branch::branch_name::BranchName;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request: bad arguments, empty message, wrong repository state
    UserInput,
    /// Unknown commit, branch or path
    NotFound,
    /// The request is well formed but the repository state forbids it
    Precondition,
    /// The object store or the work tree could not be read or written
    Storage,
}

#[derive(Debug, Error)]
pub enum GitletError {
    #[error("Please enter a commit message.")]
    MissingCommitMessage,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Unsupported file name: {}", .0.display())]
    UnsupportedFileName(PathBuf),

    #[error("No commit with that id exists.")]
    CommitNotFound(String),

    #[error("Commit id {prefix} is ambiguous; {candidates} commits match.")]
    AmbiguousCommitId { prefix: String, candidates: usize },

    #[error("A branch with that name does not exist.")]
    BranchNotFound(BranchName),

    #[error("File does not exist in that commit.")]
    FileNotInCommit(PathBuf),

    #[error("File does not exist.")]
    FileNotFound(PathBuf),

    #[error("Found no commit with that message.")]
    NoCommitWithMessage(String),

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay(Vec<PathBuf>),

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    #[error("No reason to remove the file.")]
    NothingToRemove(PathBuf),

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists(BranchName),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl GitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitletError::MissingCommitMessage
            | GitletError::NotInitialized
            | GitletError::AlreadyInitialized
            | GitletError::InvalidBranchName(_)
            | GitletError::UnsupportedFileName(_) => ErrorKind::UserInput,
            GitletError::CommitNotFound(_)
            | GitletError::AmbiguousCommitId { .. }
            | GitletError::BranchNotFound(_)
            | GitletError::FileNotInCommit(_)
            | GitletError::FileNotFound(_)
            | GitletError::NoCommitWithMessage(_) => ErrorKind::NotFound,
            GitletError::UntrackedFileInTheWay(_)
            | GitletError::UncommittedChanges
            | GitletError::MergeWithSelf
            | GitletError::RemoveCurrentBranch
            | GitletError::CheckoutCurrentBranch
            | GitletError::NothingToRemove(_)
            | GitletError::NothingToCommit
            | GitletError::BranchAlreadyExists(_) => ErrorKind::Precondition,
            GitletError::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<std::io::Error> for GitletError {
    fn from(error: std::io::Error) -> Self {
        GitletError::Storage(error.into())
    }
}

pub type Result<T> = std::result::Result<T, GitletError>;
