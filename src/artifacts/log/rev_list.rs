use crate::areas::database::Database;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use derive_new::new;

/// First-parent walk from `start` to the root commit
#[derive(Clone, new)]
pub struct RevList<'r> {
    commits: &'r Database,
    start: ObjectId,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = Result<LogEntry, GitletError>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            commits: self.commits,
            current_commit_oid: Some(self.start),
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    commits: &'r Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = Result<LogEntry, GitletError>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.current_commit_oid.take()?;

        match self.commits.parse_object_as_commit(&oid) {
            Ok(commit) => {
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok(LogEntry { oid, commit }))
            }
            // stop after reporting the first unreadable commit
            Err(error) => Some(Err(error.into())),
        }
    }
}
