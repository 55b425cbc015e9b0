//! Branch state
//!
//! A branch is a name, the commit it points at, and its history: every commit
//! reachable from the head through any parent link. The history is kept in the
//! order commits joined it and is closed under ancestry, so membership checks
//! never need to walk the graph.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: BranchName,
    head: ObjectId,
    history: Vec<ObjectId>,
    members: HashSet<ObjectId>,
}

impl Branch {
    /// A branch whose history is exactly its head; used for the root commit
    pub fn new(name: BranchName, head: ObjectId) -> Self {
        Branch {
            name,
            history: vec![head.clone()],
            members: HashSet::from([head.clone()]),
            head,
        }
    }

    /// Rebuild a branch from its persisted head and history
    pub fn from_parts(name: BranchName, head: ObjectId, history: Vec<ObjectId>) -> Self {
        let mut branch = Branch {
            name,
            head: head.clone(),
            history: Vec::with_capacity(history.len() + 1),
            members: HashSet::with_capacity(history.len() + 1),
        };

        for oid in history.into_iter().chain(std::iter::once(head)) {
            branch.push(oid);
        }

        branch
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn head(&self) -> &ObjectId {
        &self.head
    }

    pub fn history(&self) -> &[ObjectId] {
        &self.history
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.members.contains(oid)
    }

    /// Move the head to `oid`, pulling every ancestor not yet in the history along
    pub fn advance<F>(&mut self, oid: ObjectId, commit_loader: F) -> anyhow::Result<()>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        self.absorb(&oid, commit_loader)?;
        self.head = oid;

        Ok(())
    }

    /// A new branch that starts with this branch's history and points at `at`
    pub fn fork<F>(&self, name: BranchName, at: ObjectId, commit_loader: F) -> anyhow::Result<Self>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        let mut branch = Branch {
            name,
            head: at.clone(),
            history: self.history.clone(),
            members: self.members.clone(),
        };
        branch.absorb(&at, commit_loader)?;

        Ok(branch)
    }

    /// Point the head at `oid` and replace the history with that commit's ancestry
    pub fn rewind<F>(&mut self, oid: ObjectId, commit_loader: F) -> anyhow::Result<()>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        self.history.clear();
        self.members.clear();
        self.absorb(&oid, commit_loader)?;
        self.head = oid;

        Ok(())
    }

    // breadth-first over all parents, stopping at commits already in the history;
    // ancestors of a member are members, so nothing past them can be missing
    fn absorb<F>(&mut self, start: &ObjectId, commit_loader: F) -> anyhow::Result<()>
    where
        F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
    {
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(oid) = queue.pop_front() {
            if self.contains(&oid) {
                continue;
            }

            let commit = commit_loader(&oid)?;
            self.push(oid);
            queue.extend(
                commit
                    .parents
                    .into_iter()
                    .filter(|parent| !self.contains(parent)),
            );
        }

        Ok(())
    }

    fn push(&mut self, oid: ObjectId) {
        if self.members.insert(oid.clone()) {
            self.history.push(oid);
        }
    }
}
