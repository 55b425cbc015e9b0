use crate::areas::graph::CommitGraph;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitletError, Result};
use anyhow::Context;

impl Repository {
    /// Create `.gitlet`, store the root commit and start on the default branch
    pub fn init(&mut self) -> Result<ObjectId> {
        if self.is_initialized() {
            return Err(GitletError::AlreadyInitialized);
        }

        for store in [self.blobs.objects_path(), self.commits.objects_path()] {
            std::fs::create_dir_all(store)
                .with_context(|| format!("Unable to create {}", store.display()))?;
        }
        let heads_path = self.refs.heads_path();
        std::fs::create_dir_all(&heads_path)
            .with_context(|| format!("Unable to create {}", heads_path.display()))?;

        let root = self.commits.store(&Commit::root())?;
        self.graph = CommitGraph::new(root.clone());
        self.index.clear();
        self.flush()?;

        tracing::info!(path = %self.path().display(), root = %root, "initialized repository");

        Ok(root)
    }
}
