use crate::areas::database::{CommitCache, Database};
use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::{Commit, FileMap, SlimCommit};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::StatusInfo;
use crate::config::Config;
use crate::errors::{GitletError, Result};
use anyhow::Context;
use std::path::Path;

/// Name of the repository directory inside the work tree
pub const GITLET_DIR: &str = ".gitlet";

/// Everything one invocation reads and mutates.
///
/// Operations change the in-memory state and call [`Repository::flush`] only
/// once they have succeeded, so a failed operation leaves the files on disk as
/// they were.
pub struct Repository {
    pub(crate) path: Box<Path>,
    pub(crate) config: Config,
    pub(crate) blobs: Database,
    pub(crate) commits: Database,
    pub(crate) commit_cache: CommitCache,
    pub(crate) workspace: Workspace,
    pub(crate) refs: Refs,
    pub(crate) index: Index,
    pub(crate) graph: CommitGraph,
}

impl Repository {
    /// Lay out the areas of a repository rooted at `path` without touching the disk
    pub fn new(path: &Path, config: Config) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve work tree {}", path.display()))?;
        let gitlet_path = path.join(GITLET_DIR);

        Ok(Repository {
            blobs: Database::new(gitlet_path.join("blobs").into_boxed_path()),
            commits: Database::new(gitlet_path.join("commits").into_boxed_path()),
            commit_cache: CommitCache::default(),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(gitlet_path.clone().into_boxed_path()),
            index: Index::new(gitlet_path.join("index").into_boxed_path()),
            graph: CommitGraph::new(Commit::root().object_id()?),
            path: path.into_boxed_path(),
            config,
        })
    }

    /// Open an initialized repository and load its state
    pub fn open(path: &Path, config: Config) -> Result<Self> {
        let mut repository = Self::new(path, config)?;
        repository.load()?;

        Ok(repository)
    }

    pub fn load(&mut self) -> Result<()> {
        if !self.is_initialized() {
            return Err(GitletError::NotInitialized);
        }

        self.graph = CommitGraph::load(&self.refs).context("Unable to load branches")?;
        self.index.rehydrate().context("Unable to load the index")?;

        tracing::debug!(
            active = %self.graph.active_name(),
            staged = self.index.staged().len(),
            removed = self.index.removed().len(),
            "loaded repository"
        );

        Ok(())
    }

    /// Persist branch records and the index
    pub fn flush(&mut self) -> Result<()> {
        self.graph.flush(&self.refs)?;
        self.index.write_updates()?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> Box<Path> {
        self.path.join(GITLET_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().is_dir()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn head_oid(&self) -> Result<ObjectId> {
        Ok(self.graph.active_branch()?.head().clone())
    }

    pub fn head_commit(&self) -> Result<Commit> {
        self.load_commit(&self.head_oid()?)
    }

    pub fn load_commit(&self, oid: &ObjectId) -> Result<Commit> {
        Ok(self.commits.parse_object_as_commit(oid)?)
    }

    pub fn load_slim_commit(&self, oid: &ObjectId) -> anyhow::Result<SlimCommit> {
        self.commit_cache.get_or_load_slim_commit(&self.commits, oid)
    }

    /// Expand a full or abbreviated commit id
    pub fn resolve_commit(&self, reference: &str) -> Result<ObjectId> {
        Revision::try_parse(reference)?.resolve(&self.commits)
    }

    /// Classify the work tree against the head commit and the index
    pub fn status_info(&self) -> Result<StatusInfo> {
        let head = self.head_commit()?;
        let working_tree = self.workspace.snapshot()?;

        Ok(self.index.classify(head.files(), &working_tree))
    }

    /// Move the work tree from `old` to `new`, refusing to clobber untracked files
    pub(crate) fn migrate(&self, old: &FileMap, new: &FileMap, status: &StatusInfo) -> Result<()> {
        let mut migration = Migration::new(&self.blobs);
        migration.plan(old, new, status)?;
        self.workspace.apply_migration(&migration)?;

        Ok(())
    }
}
