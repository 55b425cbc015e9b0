use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, Parents};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitletError, Result};

impl Repository {
    /// Record the staged changes on top of the active head
    pub fn commit(&mut self, message: &str) -> Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(GitletError::MissingCommitMessage);
        }
        if self.index.is_empty() {
            return Err(GitletError::NothingToCommit);
        }

        let parent = self.head_oid()?;
        self.write_commit(Parents::Single(parent), message)
    }

    /// Build a commit from the head snapshot and the index, advance the active
    /// branch to it and clear the index
    pub(crate) fn write_commit(&mut self, parents: Parents, message: &str) -> Result<ObjectId> {
        let mut files = self.head_commit()?.into_files();
        for path in self.index.removed() {
            files.remove(path);
        }
        for (path, oid) in self.index.staged() {
            files.insert(path.clone(), oid.clone());
        }

        let commit = Commit::try_new(parents, self.config.now(), files, message)?;
        let oid = self.commits.store(&commit)?;

        let active = self.graph.active_name().clone();
        self.graph.add_commit(&active, oid.clone(), |oid| {
            self.commit_cache.get_or_load_slim_commit(&self.commits, oid)
        })?;
        self.index.clear();
        self.flush()?;

        tracing::info!(branch = %active, commit = %oid, "created commit");

        Ok(oid)
    }
}
