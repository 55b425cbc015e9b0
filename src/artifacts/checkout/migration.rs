use crate::areas::database::Database;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::GitletError;
use bytes::Bytes;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Type of file system action required for a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Modify existing file
    Modify,
}

/// Planned actions grouped by type; deletions carry no digest
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

/// Plan for moving the work tree from one snapshot to another
#[derive(Debug)]
pub struct Migration<'r> {
    blobs: &'r Database,
    actions: ActionsSet,
    /// Untracked files the plan would overwrite or delete
    conflicts: BTreeSet<PathBuf>,
    /// Directories to create before writing files
    mkdirs: BTreeSet<PathBuf>,
    /// Directories to remove after deleting files, when they end up empty
    rmdirs: BTreeSet<PathBuf>,
}

impl<'r> Migration<'r> {
    pub fn new(blobs: &'r Database) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        Migration {
            blobs,
            actions,
            conflicts: BTreeSet::new(),
            mkdirs: BTreeSet::new(),
            rmdirs: BTreeSet::new(),
        }
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    pub fn mkdirs(&self) -> &BTreeSet<PathBuf> {
        &self.mkdirs
    }

    pub fn rmdirs(&self) -> &BTreeSet<PathBuf> {
        &self.rmdirs
    }

    pub fn is_empty(&self) -> bool {
        self.actions.values().all(Vec::is_empty)
    }

    /// Plan the move from `old` to `new`.
    ///
    /// Fails without planning anything further when an untracked file listed in
    /// `status` sits where the plan would write or delete.
    pub fn plan(
        &mut self,
        old: &FileMap,
        new: &FileMap,
        status: &StatusInfo,
    ) -> Result<(), GitletError> {
        for (path, old_oid) in old {
            match new.get(path) {
                None => self.record(path, ActionType::Delete, None, status),
                Some(new_oid) if new_oid != old_oid => {
                    self.record(path, ActionType::Modify, Some(new_oid), status)
                }
                Some(_) => {}
            }
        }

        for (path, new_oid) in new {
            if !old.contains_key(path) {
                self.record(path, ActionType::Add, Some(new_oid), status);
            }
        }

        if self.conflicts.is_empty() {
            Ok(())
        } else {
            tracing::info!(paths = ?self.conflicts, "untracked files block the migration");
            Err(GitletError::UntrackedFileInTheWay(
                self.conflicts.iter().cloned().collect(),
            ))
        }
    }

    fn record(
        &mut self,
        path: &Path,
        action: ActionType,
        oid: Option<&ObjectId>,
        status: &StatusInfo,
    ) {
        if Self::blocked_by_untracked(path, action, status) {
            self.conflicts.insert(path.to_path_buf());
        }

        let parents = path
            .ancestors()
            .skip(1)
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf);
        match action {
            ActionType::Delete => self.rmdirs.extend(parents),
            ActionType::Add | ActionType::Modify => self.mkdirs.extend(parents),
        }

        self.actions
            .entry(action)
            .or_default()
            .push((path.to_path_buf(), oid.cloned()));
    }

    // an untracked file at the path, at one of its parent directories, or below
    // the path when the path is a directory in the work tree
    fn blocked_by_untracked(path: &Path, action: ActionType, status: &StatusInfo) -> bool {
        if status.is_untracked(path) {
            return true;
        }
        if action == ActionType::Delete {
            return false;
        }

        path.ancestors()
            .skip(1)
            .any(|parent| status.is_untracked(parent))
            || status
                .untracked
                .iter()
                .any(|untracked| untracked.starts_with(path))
    }

    pub fn load_blob_data(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self.blobs.parse_object_as_blob(oid)?.into_content())
    }
}
