//! Commit graph
//!
//! In-memory view of every branch and the active branch for one invocation.
//! Commits themselves live in the commit store; the graph only tracks branch
//! heads and histories, and remembers which branches changed so that
//! [`CommitGraph::flush`] rewrites just those.

use crate::areas::refs::Refs;
use crate::artifacts::branch::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct CommitGraph {
    branches: BTreeMap<BranchName, Branch>,
    active: BranchName,
    dirty: BTreeSet<BranchName>,
    deleted: BTreeSet<BranchName>,
    active_changed: bool,
}

impl CommitGraph {
    /// A graph with the default branch pointing at `root`
    pub fn new(root: ObjectId) -> Self {
        let active = BranchName::default();

        CommitGraph {
            branches: BTreeMap::from([(active.clone(), Branch::new(active.clone(), root))]),
            dirty: BTreeSet::from([active.clone()]),
            deleted: BTreeSet::new(),
            active,
            active_changed: true,
        }
    }

    pub fn load(refs: &Refs) -> anyhow::Result<Self> {
        let branches = refs.load_branches()?;
        let active = refs.read_active_branch()?;

        if !branches.contains_key(&active) {
            anyhow::bail!("HEAD points at missing branch {active}");
        }

        Ok(CommitGraph {
            branches,
            active,
            dirty: BTreeSet::new(),
            deleted: BTreeSet::new(),
            active_changed: false,
        })
    }

    pub fn active_name(&self) -> &BranchName {
        &self.active
    }

    pub fn active_branch(&self) -> Result<&Branch, GitletError> {
        self.branch(&self.active)
    }

    pub fn branch(&self, name: &BranchName) -> Result<&Branch, GitletError> {
        self.branches
            .get(name)
            .ok_or_else(|| GitletError::BranchNotFound(name.clone()))
    }

    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }

    fn branch_mut(&mut self, name: &BranchName) -> Result<&mut Branch, GitletError> {
        self.dirty.insert(name.clone());
        self.branches
            .get_mut(name)
            .ok_or_else(|| GitletError::BranchNotFound(name.clone()))
    }

    /// Advance `name` to `oid`, a commit whose parents are already stored
    pub fn add_commit<F>(
        &mut self,
        name: &BranchName,
        oid: ObjectId,
        commit_loader: F,
    ) -> Result<(), GitletError>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        self.branch_mut(name)?.advance(oid, commit_loader)?;

        Ok(())
    }

    pub fn create_branch<F>(
        &mut self,
        name: BranchName,
        at: ObjectId,
        copy_from: &BranchName,
        commit_loader: F,
    ) -> Result<(), GitletError>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        if self.branches.contains_key(&name) {
            return Err(GitletError::BranchAlreadyExists(name));
        }

        let branch = self.branch(copy_from)?.fork(name.clone(), at, commit_loader)?;
        tracing::info!(branch = %name, head = %branch.head(), "created branch");

        self.deleted.remove(&name);
        self.dirty.insert(name.clone());
        self.branches.insert(name, branch);

        Ok(())
    }

    pub fn remove_branch(&mut self, name: &BranchName) -> Result<(), GitletError> {
        if !self.branches.contains_key(name) {
            return Err(GitletError::BranchNotFound(name.clone()));
        }
        if name == &self.active {
            return Err(GitletError::RemoveCurrentBranch);
        }

        self.branches.remove(name);
        self.dirty.remove(name);
        self.deleted.insert(name.clone());

        Ok(())
    }

    pub fn set_active(&mut self, name: &BranchName) -> Result<(), GitletError> {
        self.branch(name)?;

        if name != &self.active {
            self.active = name.clone();
            self.active_changed = true;
        }

        Ok(())
    }

    /// Point `name` at `oid` and rebuild its history from that commit
    pub fn reset_head<F>(
        &mut self,
        name: &BranchName,
        oid: ObjectId,
        commit_loader: F,
    ) -> Result<(), GitletError>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        self.branch_mut(name)?.rewind(oid, commit_loader)?;

        Ok(())
    }

    pub fn find_split_point<F>(
        &self,
        a: &BranchName,
        b: &BranchName,
        commit_loader: F,
    ) -> Result<ObjectId, GitletError>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        let finder = SplitPointFinder::new(commit_loader);

        Ok(finder.find_split_point(self.branch(a)?, self.branch(b)?)?)
    }

    pub fn is_ancestor(&self, oid: &ObjectId, name: &BranchName) -> Result<bool, GitletError> {
        Ok(self.branch(name)?.contains(oid))
    }

    /// Persist changed branches and the active branch name
    pub fn flush(&mut self, refs: &Refs) -> anyhow::Result<()> {
        for name in &self.dirty {
            if let Some(branch) = self.branches.get(name) {
                refs.write_branch(branch)?;
            }
        }
        if self.active_changed {
            refs.write_active_branch(&self.active)?;
        }
        for name in &self.deleted {
            refs.delete_branch(name)?;
        }

        self.dirty.clear();
        self.deleted.clear();
        self.active_changed = false;

        Ok(())
    }
}
