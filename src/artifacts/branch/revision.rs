use crate::areas::database::Database;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;

/// A commit id as typed by the user: the full digest or any unique prefix of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision(String);

impl Revision {
    pub fn try_parse(raw: &str) -> Result<Self, GitletError> {
        let raw = raw.trim();

        if ObjectId::is_valid_prefix(raw) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(GitletError::CommitNotFound(raw.to_string()))
        }
    }

    /// Expand the id against the commits in `commits`
    pub fn resolve(&self, commits: &Database) -> Result<ObjectId, GitletError> {
        let mut candidates = commits.find_objects_by_prefix(&self.0)?;

        match candidates.len() {
            0 => Err(GitletError::CommitNotFound(self.0.clone())),
            1 => Ok(candidates.remove(0)),
            count => Err(GitletError::AmbiguousCommitId {
                prefix: self.0.clone(),
                candidates: count,
            }),
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
