use crate::areas::repository::Repository;
use crate::errors::Result;
use std::path::PathBuf;

impl Repository {
    /// Stage the current content of `paths`; directories stage every file below them.
    ///
    /// All paths are checked before anything is staged.
    pub fn add(&mut self, paths: &[PathBuf]) -> Result<()> {
        let files = self.workspace.expand_paths(paths)?;
        let head = self.head_commit()?;

        for file in files {
            let blob = self.workspace.parse_blob(&file)?;
            let oid = self.blobs.store(&blob)?;

            tracing::debug!(path = %file.display(), oid = %oid, "staging file");
            self.index.stage(file.clone(), oid, head.file(&file));
        }

        self.flush()
    }
}
