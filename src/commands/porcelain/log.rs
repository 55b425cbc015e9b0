use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitletError, Result};

pub use crate::artifacts::log::log_entry::LogEntry;

impl Repository {
    /// First-parent history of the active head, newest first
    pub fn log(&self) -> Result<Vec<LogEntry>> {
        RevList::new(&self.commits, self.head_oid()?)
            .into_iter()
            .collect()
    }

    /// Every commit ever made, newest first
    pub fn global_log(&self) -> Result<Vec<LogEntry>> {
        let mut entries = self
            .commits
            .list_objects()?
            .into_iter()
            .map(|oid| {
                let commit = self.load_commit(&oid)?;
                Ok(LogEntry { oid, commit })
            })
            .collect::<Result<Vec<_>>>()?;

        entries.sort_by(|left, right| {
            right
                .commit
                .timestamp()
                .cmp(&left.commit.timestamp())
                .then_with(|| left.oid.cmp(&right.oid))
        });

        Ok(entries)
    }

    /// Ids of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> Result<Vec<ObjectId>> {
        let matches = self
            .global_log()?
            .into_iter()
            .filter(|entry| entry.commit.message() == message.trim())
            .map(|entry| entry.oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(GitletError::NoCommitWithMessage(message.to_string()));
        }

        Ok(matches)
    }
}
