//! Split point search
//!
//! The split point of two branches is the latest commit both of them contain.
//! Each branch carries its full reachable history, so the search is two
//! breadth-first walks:
//!
//! - from `a.head` over every parent link until commits of `b.history` are found
//! - from `b.head` over every parent link until commits of `a.history` are found
//!
//! A walk stops at the first depth holding a member of the other branch and keeps
//! every member at that depth, minus those that are ancestors of another one.
//! Between the two walks' picks, a descendant beats its ancestor; otherwise the
//! pick found in fewer steps wins and equal depths go to `a`. Both walks follow
//! both parents of merge commits.
//!
//! Tracing output of the walk is compiled in with the `debug_merge` feature.

use crate::artifacts::branch::branch::Branch;
use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

/// Commit picked by one of the two walks, with its distance from the walk's start
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    oid: ObjectId,
    depth: usize,
}

pub struct SplitPointFinder<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: F,
}

impl<F> SplitPointFinder<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: F) -> Self {
        SplitPointFinder { commit_loader }
    }

    pub fn find_split_point(&self, a: &Branch, b: &Branch) -> anyhow::Result<ObjectId> {
        let from_a = self.nearest_member(a.head(), b)?;
        let from_b = self.nearest_member(b.head(), a)?;

        debug_log!(?from_a, ?from_b, branch_a = %a.name(), branch_b = %b.name(), "split point candidates");

        let split_point = match (from_a, from_b) {
            (Some(from_a), Some(from_b)) => self.lowest_of(from_a, from_b)?,
            (Some(from_a), None) => from_a,
            (None, Some(from_b)) => from_b,
            (None, None) => anyhow::bail!(
                "branches {} and {} share no history",
                a.name(),
                b.name()
            ),
        };

        tracing::debug!(split_point = %split_point.oid, "found split point");

        Ok(split_point.oid)
    }

    fn lowest_of(&self, from_a: Candidate, from_b: Candidate) -> anyhow::Result<Candidate> {
        if from_a.oid == from_b.oid || self.is_reachable(&from_b.oid, &from_a.oid)? {
            return Ok(from_a);
        }
        if self.is_reachable(&from_a.oid, &from_b.oid)? {
            return Ok(from_b);
        }

        if from_b.depth < from_a.depth {
            Ok(from_b)
        } else {
            Ok(from_a)
        }
    }

    fn nearest_member(
        &self,
        start: &ObjectId,
        other: &Branch,
    ) -> anyhow::Result<Option<Candidate>> {
        let mut level = vec![start.clone()];
        let mut visited = HashSet::from([start.clone()]);
        let mut depth = 0;

        while !level.is_empty() {
            debug_log!(depth, commits = level.len(), "visiting level");

            let members = level
                .iter()
                .filter(|oid| other.contains(oid))
                .cloned()
                .collect::<Vec<_>>();

            if !members.is_empty() {
                let oid = self.lowest_member(members)?;
                return Ok(Some(Candidate { oid, depth }));
            }

            let mut next_level = Vec::new();
            for oid in &level {
                let commit = (self.commit_loader)(oid)?;
                for parent in commit.parents {
                    if visited.insert(parent.clone()) {
                        next_level.push(parent);
                    }
                }
            }

            level = next_level;
            depth += 1;
        }

        Ok(None)
    }

    // first member that no other member descends from
    fn lowest_member(&self, members: Vec<ObjectId>) -> anyhow::Result<ObjectId> {
        for member in &members {
            let mut redundant = false;
            for other in members.iter().filter(|other| *other != member) {
                if self.is_reachable(member, other)? {
                    redundant = true;
                    break;
                }
            }

            if !redundant {
                return Ok(member.clone());
            }
        }

        members
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("no split point candidates"))
    }

    /// Whether `ancestor` can be reached from `descendant` through parent links
    fn is_reachable(&self, ancestor: &ObjectId, descendant: &ObjectId) -> anyhow::Result<bool> {
        let mut queue = VecDeque::from([descendant.clone()]);
        let mut visited = HashSet::from([descendant.clone()]);

        while let Some(oid) = queue.pop_front() {
            if &oid == ancestor {
                return Ok(true);
            }

            for parent in (self.commit_loader)(&oid)?.parents {
                if visited.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        Ok(false)
    }
}
