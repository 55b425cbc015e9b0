use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

const CONFLICT_CURRENT_MARKER: &[u8] = b"<<<<<<< HEAD\n";
const CONFLICT_SEPARATOR_MARKER: &[u8] = b"=======\n";
const CONFLICT_END_MARKER: &[u8] = b">>>>>>>\n";

/// What a three-way merge does with one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    /// Check out and stage the given branch's version
    TakeGiven(ObjectId),
    /// Stage the path for removal and delete it from the work tree
    Remove,
    /// Both sides changed the path differently; absent sides are `None`
    Conflict {
        current: Option<ObjectId>,
        given: Option<ObjectId>,
    },
}

/// Per-path outcome of reconciling the split point with both heads.
///
/// Paths where the current branch's version is kept are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    resolutions: BTreeMap<PathBuf, PathResolution>,
}

impl MergePlan {
    pub fn reconcile(split: &FileMap, current: &FileMap, given: &FileMap) -> Self {
        let paths = split
            .keys()
            .chain(current.keys())
            .chain(given.keys())
            .collect::<BTreeSet<_>>();

        let resolutions = paths
            .into_iter()
            .filter_map(|path| {
                let resolution =
                    Self::resolve(split.get(path), current.get(path), given.get(path))?;
                Some((path.clone(), resolution))
            })
            .collect();

        MergePlan { resolutions }
    }

    fn resolve(
        split: Option<&ObjectId>,
        current: Option<&ObjectId>,
        given: Option<&ObjectId>,
    ) -> Option<PathResolution> {
        if current == given || given == split {
            return None;
        }

        if current == split {
            return Some(match given {
                Some(given) => PathResolution::TakeGiven(given.clone()),
                None => PathResolution::Remove,
            });
        }

        Some(PathResolution::Conflict {
            current: current.cloned(),
            given: given.cloned(),
        })
    }

    pub fn resolutions(&self) -> &BTreeMap<PathBuf, PathResolution> {
        &self.resolutions
    }

    pub fn conflicts(&self) -> BTreeSet<PathBuf> {
        self.resolutions
            .iter()
            .filter(|(_, resolution)| matches!(resolution, PathResolution::Conflict { .. }))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

/// Content of a conflicted file: both versions between markers
pub fn conflict_content(current: Option<&[u8]>, given: Option<&[u8]>) -> Bytes {
    let current = current.unwrap_or_default();
    let given = given.unwrap_or_default();

    let mut content = Vec::with_capacity(
        CONFLICT_CURRENT_MARKER.len()
            + current.len()
            + CONFLICT_SEPARATOR_MARKER.len()
            + given.len()
            + CONFLICT_END_MARKER.len(),
    );
    content.extend_from_slice(CONFLICT_CURRENT_MARKER);
    content.extend_from_slice(current);
    content.extend_from_slice(CONFLICT_SEPARATOR_MARKER);
    content.extend_from_slice(given);
    content.extend_from_slice(CONFLICT_END_MARKER);

    Bytes::from(content)
}

/// Result of merging a branch into the active one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The given head is already part of the current branch
    AlreadyUpToDate,
    /// The current head was an ancestor of the given head and now equals it
    FastForwarded,
    /// A merge commit was created; `conflicts` lists the conflict-marked paths
    Merged {
        commit: ObjectId,
        conflicts: BTreeSet<PathBuf>,
    },
}

impl MergeOutcome {
    pub fn has_conflicts(&self) -> bool {
        matches!(self, MergeOutcome::Merged { conflicts, .. } if !conflicts.is_empty())
    }
}
