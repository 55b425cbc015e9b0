//! Commit objects
//!
//! A commit is an immutable snapshot: a message, a timestamp, zero to two parent
//! digests and the full mapping of tracked paths to blob digests.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>          (zero, one or two lines)
//! timestamp <unix-seconds> <±hhmm>
//! file <blob-sha> <path>       (one line per tracked path, sorted by path)
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Message of the commit every repository starts from
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Offset the root commit's epoch timestamp is rendered in
const ROOT_COMMIT_OFFSET_SECONDS: i32 = -8 * 3600;

/// Snapshot of tracked paths, keyed by path relative to the work tree
pub type FileMap = BTreeMap<PathBuf, ObjectId>;

/// Ordered parent links of a commit
///
/// The first parent is the mainline followed by `log`; a second parent only
/// exists on merge commits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Parents {
    #[default]
    Root,
    Single(ObjectId),
    Merge(ObjectId, ObjectId),
}

impl Parents {
    pub fn first(&self) -> Option<&ObjectId> {
        match self {
            Parents::Root => None,
            Parents::Single(first) | Parents::Merge(first, _) => Some(first),
        }
    }

    pub fn second(&self) -> Option<&ObjectId> {
        match self {
            Parents::Merge(_, second) => Some(second),
            _ => None,
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, Parents::Merge(..))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.first().into_iter().chain(self.second())
    }

    pub fn to_vec(&self) -> Vec<ObjectId> {
        self.iter().cloned().collect()
    }
}

impl TryFrom<Vec<ObjectId>> for Parents {
    type Error = anyhow::Error;

    fn try_from(parents: Vec<ObjectId>) -> anyhow::Result<Self> {
        let mut parents = parents.into_iter();

        match (parents.next(), parents.next(), parents.next()) {
            (None, _, _) => Ok(Parents::Root),
            (Some(first), None, _) => Ok(Parents::Single(first)),
            (Some(first), Some(second), None) => Ok(Parents::Merge(first, second)),
            _ => Err(anyhow::anyhow!("a commit cannot have more than two parents")),
        }
    }
}

/// Parent links and identity of a commit, without its file snapshot
///
/// Used by graph walks that only need to follow ancestry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parents: Parents,
    timestamp: DateTime<FixedOffset>,
    files: FileMap,
    message: String,
}

impl Commit {
    /// Build a commit, rejecting an empty message
    pub fn try_new(
        parents: Parents,
        timestamp: DateTime<FixedOffset>,
        files: FileMap,
        message: &str,
    ) -> Result<Self, GitletError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(GitletError::MissingCommitMessage);
        }

        Ok(Commit {
            parents,
            timestamp,
            files,
            message: message.to_string(),
        })
    }

    /// The commit shared by every repository: no parents, no files, epoch timestamp
    pub fn root() -> Self {
        let offset = FixedOffset::east_opt(ROOT_COMMIT_OFFSET_SECONDS).unwrap_or(Utc.fix());

        Commit {
            parents: Parents::Root,
            timestamp: DateTime::<Utc>::default().with_timezone(&offset),
            files: FileMap::new(),
            message: ROOT_COMMIT_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &Parents {
        &self.parents
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn into_files(self) -> FileMap {
        self.files
    }

    pub fn file(&self, path: &Path) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp as shown by `log`, e.g. "Wed Dec 31 16:00:00 1969 -0800"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self.parents.to_vec(),
        }
    }

    fn render_body(&self) -> anyhow::Result<String> {
        let mut lines = vec![];

        for parent in self.parents.iter() {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.files {
            let path = path
                .to_str()
                .with_context(|| format!("path {path:?} is not valid UTF-8"))?;
            lines.push(format!("file {oid} {path}"));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        Ok(lines.join("\n"))
    }
}

fn parse_timestamp(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let (seconds, offset) = raw
        .split_once(' ')
        .context("Invalid commit object: malformed timestamp")?;
    let seconds = seconds
        .parse::<i64>()
        .context("Invalid commit object: timestamp is not a number")?;

    // offset is rendered as ±hhmm
    if offset.len() != 5 || !offset.is_char_boundary(1) {
        anyhow::bail!("Invalid commit object: malformed timezone {offset}");
    }
    let (sign, digits) = offset.split_at(1);
    let hours = digits
        .get(0..2)
        .and_then(|h| h.parse::<i32>().ok())
        .context("Invalid commit object: malformed timezone")?;
    let minutes = digits
        .get(2..4)
        .and_then(|m| m.parse::<i32>().ok())
        .context("Invalid commit object: malformed timezone")?;
    let offset_seconds = (hours * 3600 + minutes * 60) * if sign == "-" { -1 } else { 1 };

    let offset =
        FixedOffset::east_opt(offset_seconds).context("Invalid commit object: bad timezone")?;
    let utc = DateTime::from_timestamp(seconds, 0).context("Invalid commit object: bad time")?;

    Ok(utc.with_timezone(&offset))
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(frame(&self.object_type(), self.render_body()?.as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.split('\n');

        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;

        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            next_line = lines
                .next()
                .context("Invalid commit object: missing timestamp line")?;
        }

        let timestamp = next_line
            .strip_prefix("timestamp ")
            .context("Invalid commit object: invalid timestamp line")?;
        let timestamp = parse_timestamp(timestamp)?;

        let mut files = FileMap::new();
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            let (oid, path) = line
                .strip_prefix("file ")
                .and_then(|entry| entry.split_once(' '))
                .context("Invalid commit object: invalid file line")?;
            files.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
        }

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Commit {
            parents: Parents::try_from(parents)?,
            timestamp,
            files,
            message,
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
