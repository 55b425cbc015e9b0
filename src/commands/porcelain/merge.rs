use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::resolution::{
    MergeOutcome, MergePlan, PathResolution, conflict_content,
};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Parents;
use crate::artifacts::objects::object::Object;
use crate::errors::{GitletError, Result};

impl Repository {
    /// Merge branch `name` into the active branch.
    ///
    /// Every precondition, including untracked files in the way, is checked
    /// before the work tree, the index or any branch changes. Conflicts do not
    /// abort the merge: the conflicted files are written with markers, staged
    /// and committed, and reported in the outcome.
    pub fn merge(&mut self, name: &str) -> Result<MergeOutcome> {
        let given_name = BranchName::try_parse(name.to_string())?;
        let given_head = self.graph.branch(&given_name)?.head().clone();
        let current_name = self.graph.active_name().clone();
        let current_head = self.head_oid()?;

        if !self.index.is_empty() {
            return Err(GitletError::UncommittedChanges);
        }
        if given_name == current_name {
            return Err(GitletError::MergeWithSelf);
        }

        let split = self
            .graph
            .find_split_point(&current_name, &given_name, |oid| {
                self.commit_cache.get_or_load_slim_commit(&self.commits, oid)
            })?;
        tracing::debug!(split = %split, current = %current_head, given = %given_head, "merging");

        let status = self.status_info()?;
        let current = self.load_commit(&current_head)?;
        let given = self.load_commit(&given_head)?;

        if self.graph.is_ancestor(&given_head, &current_name)? {
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        if split == current_head {
            self.migrate(current.files(), given.files(), &status)?;
            self.graph.add_commit(&current_name, given_head.clone(), |oid| {
                self.commit_cache.get_or_load_slim_commit(&self.commits, oid)
            })?;
            self.flush()?;

            tracing::info!(branch = %current_name, head = %given_head, "fast-forwarded");
            return Ok(MergeOutcome::FastForwarded);
        }

        let split_commit = self.load_commit(&split)?;
        let plan = MergePlan::reconcile(split_commit.files(), current.files(), given.files());

        // conflict files are built in memory so the whole merge result can be
        // checked against the work tree before anything is written
        let mut merged_files = current.files().clone();
        let mut conflict_blobs = Vec::new();
        for (path, resolution) in plan.resolutions() {
            match resolution {
                PathResolution::TakeGiven(oid) => {
                    merged_files.insert(path.clone(), oid.clone());
                }
                PathResolution::Remove => {
                    merged_files.remove(path);
                }
                PathResolution::Conflict { current, given } => {
                    let current = current
                        .as_ref()
                        .map(|oid| self.blobs.parse_object_as_blob(oid))
                        .transpose()?;
                    let given = given
                        .as_ref()
                        .map(|oid| self.blobs.parse_object_as_blob(oid))
                        .transpose()?;
                    let blob = Blob::new(conflict_content(
                        current.as_ref().map(|blob| &blob.content()[..]),
                        given.as_ref().map(|blob| &blob.content()[..]),
                    ));

                    merged_files.insert(path.clone(), blob.object_id()?);
                    conflict_blobs.push(blob);
                }
            }
        }

        for blob in &conflict_blobs {
            self.blobs.store(blob)?;
        }
        self.migrate(current.files(), &merged_files, &status)?;

        for (path, resolution) in plan.resolutions() {
            match resolution {
                PathResolution::Remove => {
                    self.index.mark_removed(path, true)?;
                }
                PathResolution::TakeGiven(_) | PathResolution::Conflict { .. } => {
                    if let Some(oid) = merged_files.get(path) {
                        self.index
                            .stage(path.clone(), oid.clone(), current.file(path));
                    }
                }
            }
        }

        let message = format!("Merged {given_name} into {current_name}.");
        let commit = self.write_commit(Parents::Merge(current_head, given_head), &message)?;
        let conflicts = plan.conflicts();

        if !conflicts.is_empty() {
            tracing::warn!(paths = ?conflicts, "merge produced conflicts");
        }

        Ok(MergeOutcome::Merged { commit, conflicts })
    }
}
