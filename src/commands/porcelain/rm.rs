use crate::areas::repository::Repository;
use crate::errors::Result;
use std::path::Path;

impl Repository {
    /// Unstage `path`, and when the head commit tracks it, stage its removal
    /// and delete it from the work tree
    pub fn rm(&mut self, path: &Path) -> Result<()> {
        let path = self.workspace.relativize(path)?;
        let tracked = self.head_commit()?.file(&path).is_some();

        self.index.mark_removed(&path, tracked)?;
        if tracked {
            self.workspace.remove_file(&path)?;
        }

        self.flush()
    }
}
