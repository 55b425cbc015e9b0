use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{GitletError, Result};
use std::path::Path;

impl Repository {
    /// Restore `path` from the active head commit, leaving the index alone
    pub fn checkout_file(&mut self, path: &Path) -> Result<()> {
        let head = self.head_oid()?;
        self.restore_file(&head.to_string(), path)
    }

    /// Restore `path` from the commit named by a full or abbreviated id
    pub fn checkout_commit_file(&mut self, commit: &str, path: &Path) -> Result<()> {
        self.restore_file(commit, path)
    }

    fn restore_file(&mut self, commit: &str, path: &Path) -> Result<()> {
        let oid = self.resolve_commit(commit)?;
        let path = self.workspace.relativize(path)?;
        let commit = self.load_commit(&oid)?;

        let blob_oid = commit
            .file(&path)
            .ok_or_else(|| GitletError::FileNotInCommit(path.clone()))?;
        let blob = self.blobs.parse_object_as_blob(blob_oid)?;
        self.workspace.write_file(&path, blob.content())?;

        tracing::debug!(path = %path.display(), commit = %oid, "restored file");

        Ok(())
    }

    /// Switch to `name`: the work tree takes that branch's head snapshot.
    ///
    /// Refused while anything is staged, so the index is already empty when the
    /// switch succeeds.
    pub fn checkout_branch(&mut self, name: &str) -> Result<()> {
        let name = BranchName::try_parse(name.to_string())?;
        let target = self.graph.branch(&name)?.head().clone();

        if &name == self.graph.active_name() {
            return Err(GitletError::CheckoutCurrentBranch);
        }
        if !self.index.is_empty() {
            return Err(GitletError::UncommittedChanges);
        }

        let status = self.status_info()?;
        let current = self.head_commit()?;
        let target_commit = self.load_commit(&target)?;
        self.migrate(current.files(), target_commit.files(), &status)?;

        self.graph.set_active(&name)?;
        self.flush()?;

        tracing::info!(branch = %name, head = %target, "switched branch");

        Ok(())
    }
}
