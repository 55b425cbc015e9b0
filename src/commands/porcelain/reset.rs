use crate::areas::repository::Repository;
use crate::errors::Result;

impl Repository {
    /// Check out every file of `commit`, delete tracked files it lacks, move the
    /// active head there and clear the index
    pub fn reset(&mut self, commit: &str) -> Result<()> {
        let oid = self.resolve_commit(commit)?;
        let target = self.load_commit(&oid)?;
        let status = self.status_info()?;
        let current = self.head_commit()?;

        self.migrate(current.files(), target.files(), &status)?;

        let active = self.graph.active_name().clone();
        self.graph.reset_head(&active, oid.clone(), |oid| {
            self.commit_cache.get_or_load_slim_commit(&self.commits, oid)
        })?;
        self.index.clear();
        self.flush()?;

        tracing::info!(branch = %active, head = %oid, "reset branch");

        Ok(())
    }
}
