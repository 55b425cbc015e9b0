use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Result;

impl Repository {
    /// Create `name` at the active head; the active branch does not change
    pub fn branch(&mut self, name: &str) -> Result<()> {
        let name = BranchName::try_parse(name.to_string())?;
        let head = self.head_oid()?;
        let active = self.graph.active_name().clone();

        self.graph.create_branch(name, head, &active, |oid| {
            self.commit_cache.get_or_load_slim_commit(&self.commits, oid)
        })?;

        self.flush()
    }

    /// Delete the branch pointer; its commits stay in the store
    pub fn rm_branch(&mut self, name: &str) -> Result<()> {
        let name = BranchName::try_parse(name.to_string())?;

        self.graph.remove_branch(&name)?;
        tracing::info!(branch = %name, "removed branch");

        self.flush()
    }
}
