//! Branch references
//!
//! Each branch is a text file under `refs/heads/<name>`: the first line is the
//! head commit, the following lines are the branch history in the order commits
//! joined it. `HEAD` holds `ref: refs/heads/<name>` for the active branch.
//!
//! Files are replaced atomically: the new content goes to a locked temp file
//! that is then renamed over the old one.

use crate::artifacts::branch::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use file_guard::Lock;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Regex pattern for parsing the symbolic `HEAD` reference
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (`.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    /// Name of the branch `HEAD` points at
    pub fn read_active_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read {:?}", head_path))?;

        let captures = regex::Regex::new(SYMREF_REGEX)?
            .captures(content.trim())
            .with_context(|| format!("malformed HEAD reference: {}", content.trim()))?;

        Ok(BranchName::try_parse(captures[1].to_string())?)
    }

    pub fn write_active_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), format!("ref: refs/heads/{name}\n"))
    }

    /// Load every branch under `refs/heads`
    pub fn load_branches(&self) -> anyhow::Result<BTreeMap<BranchName, Branch>> {
        let heads_path = self.heads_path();
        let mut branches = BTreeMap::new();

        for entry in std::fs::read_dir(&heads_path)
            .with_context(|| format!("failed to list branches in {:?}", heads_path))?
        {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            // a crashed writer may leave its temp file behind
            let Ok(name) = BranchName::try_parse(name.to_string()) else {
                tracing::warn!(file = ?entry.path(), "ignoring unexpected file in refs/heads");
                continue;
            };

            let branch = self.read_branch(name.clone(), &entry.path())?;
            branches.insert(name, branch);
        }

        Ok(branches)
    }

    fn read_branch(&self, name: BranchName, path: &Path) -> anyhow::Result<Branch> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let mut lines = content.lines().map(str::trim).filter(|line| !line.is_empty());

        let head = lines
            .next()
            .with_context(|| format!("branch {name} has no head commit"))?;
        let head = ObjectId::try_parse(head.to_string())?;
        let history = lines
            .map(|line| ObjectId::try_parse(line.to_string()))
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("branch {name} has a malformed history"))?;

        Ok(Branch::from_parts(name, head, history))
    }

    pub fn write_branch(&self, branch: &Branch) -> anyhow::Result<()> {
        let mut content = format!("{}\n", branch.head());
        for oid in branch.history() {
            content.push_str(oid.as_ref());
            content.push('\n');
        }

        let branch_path = self.heads_path().join(branch.name().to_string());
        self.update_ref_file(&branch_path, content)
    }

    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.heads_path().join(name.to_string());

        if branch_path.exists() {
            std::fs::remove_file(&branch_path)
                .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        }

        Ok(())
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref path {:?}", path))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent directories for {:?}", path))?;

        let temp_path = parent.join(format!(".tmp-ref-{}", rand::random::<u32>()));
        {
            let mut ref_file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("failed to open ref file at {:?}", temp_path))?;
            let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
            lock.deref_mut().write_all(raw_ref.as_bytes())?;
        }

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("failed to replace ref file at {:?}", path))?;

        Ok(())
    }
}
