use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;

/// Every path of interest sorted into the buckets reported by `status`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub staged: FileMap,
    pub removed: FileSet,
    pub modified: ChangeSet,
    pub untracked: FileSet,
}

impl StatusInfo {
    /// Compare the head snapshot, the staging area and the digests of the work tree
    pub fn classify(
        head_files: &FileMap,
        staged: &FileMap,
        removed: &FileSet,
        working_tree: &FileMap,
    ) -> Self {
        let mut modified = ChangeSet::new();

        for (path, staged_oid) in staged {
            if let Some(change) = Self::compare(staged_oid, working_tree.get(path)) {
                modified.insert(path.clone(), change);
            }
        }

        for (path, head_oid) in head_files {
            if staged.contains_key(path) || removed.contains(path) {
                continue;
            }
            if let Some(change) = Self::compare(head_oid, working_tree.get(path)) {
                modified.insert(path.clone(), change);
            }
        }

        // a removed file that reappears is untracked again
        let untracked = working_tree
            .keys()
            .filter(|path| {
                !staged.contains_key(*path)
                    && (!head_files.contains_key(*path) || removed.contains(*path))
            })
            .cloned()
            .collect();

        StatusInfo {
            staged: staged.clone(),
            removed: removed.clone(),
            modified,
            untracked,
        }
    }

    fn compare(expected: &ObjectId, actual: Option<&ObjectId>) -> Option<WorkspaceChangeType> {
        match actual {
            None => Some(WorkspaceChangeType::Deleted),
            Some(actual) if actual != expected => Some(WorkspaceChangeType::Modified),
            Some(_) => None,
        }
    }

    pub fn is_untracked(&self, path: &Path) -> bool {
        self.untracked.contains(path)
    }
}
