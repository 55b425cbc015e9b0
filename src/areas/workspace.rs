use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object::Object;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".gitlet"];

/// The user's files, relative to the work tree root
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied path into one relative to the work tree root.
    ///
    /// Paths that leave the work tree name no file it could hold.
    pub fn relativize(&self, path: &Path) -> Result<PathBuf, GitletError> {
        let outside = || GitletError::FileNotFound(path.to_path_buf());
        let relative_path = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| outside())?
        } else {
            path
        };

        let mut relative = PathBuf::new();
        for component in relative_path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => relative.push(name),
                _ => return Err(outside()),
            }
        }

        Ok(relative)
    }

    /// A line break would split the `file <oid> <path>` record of a commit
    fn check_trackable(path: &Path) -> Result<(), GitletError> {
        if path.to_string_lossy().contains(['\n', '\r']) {
            return Err(GitletError::UnsupportedFileName(path.to_path_buf()));
        }

        Ok(())
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    pub fn parse_blob(&self, path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(path)?))
    }

    /// Every file under `root_file_path` (the whole work tree when `None`)
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root);
        }

        let mut files = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .map(|name| IGNORED_PATHS.contains(&name.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }

    /// Digest of every file in the work tree, as it would be stored
    pub fn snapshot(&self) -> anyhow::Result<FileMap> {
        self.list_files(None)?
            .into_iter()
            .map(|file_path| {
                let oid = self.parse_blob(&file_path)?.object_id()?;
                Ok((file_path, oid))
            })
            .collect()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            self.make_directory(parent)?;
        }
        if full_path.is_dir() {
            std::fs::remove_dir_all(&full_path).with_context(|| {
                format!("Failed to remove existing directory: {:?}", file_path)
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file if present, then drop parent directories left empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if full_path.is_file() {
            std::fs::remove_file(&full_path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        let mut parent = file_path.parent();
        while let Some(dir) = parent.filter(|dir| !dir.as_os_str().is_empty()) {
            if !self.remove_empty_directory(dir)? {
                break;
            }
            parent = dir.parent();
        }

        Ok(())
    }

    // Deletions go first so that a file can replace a directory and vice versa;
    // directories are pruned deepest first and created shallowest first.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        self.apply_migration_action_set(migration, ActionType::Delete)?;
        for dir_path in migration.rmdirs().iter().rev() {
            self.remove_empty_directory(dir_path)?;
        }

        for dir_path in migration.mkdirs() {
            self.make_directory(&self.path.join(dir_path))?;
        }
        self.apply_migration_action_set(migration, ActionType::Modify)?;
        self.apply_migration_action_set(migration, ActionType::Add)?;

        Ok(())
    }

    fn apply_migration_action_set(
        &self,
        migration: &Migration,
        action: ActionType,
    ) -> anyhow::Result<()> {
        let entries = migration
            .actions()
            .get(&action)
            .ok_or_else(|| anyhow::anyhow!("Invalid action type"))?;

        for (file_path, oid) in entries {
            match (action, oid) {
                (ActionType::Delete, None) => {
                    let full_path = self.path.join(file_path);
                    if full_path.is_file() {
                        std::fs::remove_file(&full_path)
                            .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
                    }
                }
                (ActionType::Add | ActionType::Modify, Some(oid)) => {
                    let data = migration.load_blob_data(oid)?;
                    self.write_file(file_path, &data)?;
                }
                _ => anyhow::bail!("Invalid action and entry combination"),
            }
        }

        Ok(())
    }

    // returns whether the directory is gone
    fn remove_empty_directory(&self, dir_path: &Path) -> anyhow::Result<bool> {
        let full_path = self.path.join(dir_path);

        if !full_path.is_dir() {
            return Ok(!full_path.exists());
        }
        if full_path.read_dir()?.next().is_some() {
            return Ok(false);
        }

        std::fs::remove_dir(&full_path)
            .with_context(|| format!("Failed to remove directory: {:?}", dir_path))?;

        Ok(true)
    }

    fn make_directory(&self, full_path: &Path) -> anyhow::Result<()> {
        // a file may sit where a directory is needed
        for ancestor in full_path.ancestors() {
            if ancestor == self.path.as_ref() {
                break;
            }
            if ancestor.is_file() {
                std::fs::remove_file(ancestor)
                    .with_context(|| format!("Failed to remove file: {:?}", ancestor))?;
            }
        }

        std::fs::create_dir_all(full_path)
            .with_context(|| format!("Failed to create directory: {:?}", full_path))?;

        Ok(())
    }

    /// Resolve user paths to the files they name, failing on the first missing
    /// or untrackable one
    pub fn expand_paths(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, GitletError> {
        let mut files = Vec::new();

        for path in paths {
            let relative = self.relativize(path)?;
            if relative.as_os_str().is_empty() {
                files.extend(self.list_files(None)?);
            } else if self.exists(&relative) && !Self::is_ignored(&relative) {
                files.extend(self.list_files(Some(&relative))?);
            } else {
                return Err(GitletError::FileNotFound(path.clone()));
            }
        }

        files.sort();
        files.dedup();
        for file in &files {
            Self::check_trackable(file)?;
        }

        Ok(files)
    }
}
