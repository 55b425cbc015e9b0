//! Staging area
//!
//! Holds the changes proposed for the next commit: files staged for addition
//! with the digest of their content, and paths staged for removal. The two sets
//! are always disjoint. The index is persisted to `.gitlet/index` and verified
//! with a trailing SHA-1 checksum on load.

use crate::artifacts::index::checksum::ChecksummedFile;
use crate::artifacts::index::index_entry::{StagedEntry, pack_path, read_path};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::{FileSet, StatusInfo};
use crate::errors::GitletError;
use anyhow::{Context, anyhow};
use fake::rand;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.gitlet/index`)
    path: Box<Path>,
    staged: FileMap,
    removed: FileSet,
    /// Set when the in-memory state differs from the file
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            staged: FileMap::new(),
            removed: FileSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn staged(&self) -> &FileMap {
        &self.staged
    }

    pub fn removed(&self) -> &FileSet {
        &self.removed
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    /// Stage `path` with content `oid`.
    ///
    /// Any pending removal of the path is cancelled. When the content equals the
    /// version in the head commit the path is unstaged instead, so staging is
    /// idempotent and never records a no-op change.
    pub fn stage(&mut self, path: PathBuf, oid: ObjectId, head_oid: Option<&ObjectId>) {
        self.changed |= self.removed.remove(&path);

        if head_oid == Some(&oid) {
            self.changed |= self.staged.remove(&path).is_some();
        } else if self.staged.get(&path) != Some(&oid) {
            self.staged.insert(path, oid);
            self.changed = true;
        }
    }

    /// Drop `path` from the staged additions; returns whether it was staged
    pub fn unstage(&mut self, path: &Path) -> bool {
        let unstaged = self.staged.remove(path).is_some();
        self.changed |= unstaged;
        unstaged
    }

    /// Handle `rm` for `path`.
    ///
    /// A staged addition is dropped. A path tracked by the head commit is also
    /// staged for removal. A path that is neither has nothing to remove.
    pub fn mark_removed(&mut self, path: &Path, tracked: bool) -> Result<(), GitletError> {
        let unstaged = self.unstage(path);

        if tracked {
            self.changed |= self.removed.insert(path.to_path_buf());
        } else if !unstaged {
            return Err(GitletError::NothingToRemove(path.to_path_buf()));
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        self.changed |= !self.is_empty();
        self.staged.clear();
        self.removed.clear();
    }

    /// Sort the work tree into status buckets relative to `head_files` and this index
    pub fn classify(&self, head_files: &FileMap, working_tree: &FileMap) -> StatusInfo {
        StatusInfo::classify(head_files, &self.staged, &self.removed, working_tree)
    }

    /// Load the index from disk.
    ///
    /// A missing or empty file is an empty index. Takes a shared lock while reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.staged.clear();
        self.removed.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = ChecksummedFile::new(lock);
        let header = self.parse_header(&mut reader)?;

        for _ in 0..header.staged_count {
            let entry = StagedEntry::read_from(&mut reader)?;
            self.staged.insert(entry.path, entry.oid);
        }
        for _ in 0..header.removed_count {
            self.removed.insert(read_path(&mut reader)?);
        }

        reader.verify().context("Index file is corrupt")
    }

    fn parse_header(&self, reader: &mut ChecksummedFile) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    /// Persist the index if it changed since it was loaded.
    ///
    /// The new content is written to a temp file under an exclusive lock and
    /// renamed over the old index.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let parent = self
            .path
            .parent()
            .context(format!("Invalid index path {}", self.path.display()))?;
        let temp_path = parent.join(format!("tmp-index-{}", rand::random::<u32>()));

        {
            let mut index_file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Unable to open index {}", temp_path.display()))?;
            let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;
            let mut writer = ChecksummedFile::new(lock);

            let header = IndexHeader::new(
                String::from(SIGNATURE),
                VERSION,
                u32::try_from(self.staged.len())?,
                u32::try_from(self.removed.len())?,
            );
            writer.write(&header.serialize()?)?;

            for (path, oid) in &self.staged {
                let entry = StagedEntry {
                    path: path.clone(),
                    oid: oid.clone(),
                };
                writer.write(&entry.pack()?)?;
            }
            for path in &self.removed {
                writer.write(&pack_path(path)?)?;
            }

            writer.finish()?;
        }

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Unable to replace index {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }
}
