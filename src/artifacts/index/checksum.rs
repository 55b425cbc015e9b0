//! Index file access with a running SHA-1 over every byte that passes through

use crate::artifacts::index::CHECKSUM_SIZE;
use anyhow::{Context, bail};
use bytes::Bytes;
use file_guard::FileGuard;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{Read, Write};
use std::ops::DerefMut;

/// A locked index file; reads and writes feed the trailing checksum
#[derive(Debug)]
pub struct ChecksummedFile<'f> {
    file: FileGuard<&'f mut File>,
    hasher: Sha1,
    offset: usize,
}

impl<'f> ChecksummedFile<'f> {
    pub fn new(file: FileGuard<&'f mut File>) -> Self {
        ChecksummedFile {
            file,
            hasher: Sha1::new(),
            offset: 0,
        }
    }

    /// Read exactly `size` bytes of index content
    pub fn read(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.file
            .deref_mut()
            .read_exact(&mut buffer)
            .with_context(|| {
                format!("Index ends early: wanted {size} bytes at offset {}", self.offset)
            })?;

        self.consume(&buffer);
        Ok(Bytes::from(buffer))
    }

    pub fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.file
            .deref_mut()
            .write_all(data)
            .with_context(|| format!("Unable to write index at offset {}", self.offset))?;

        self.consume(data);
        Ok(())
    }

    fn consume(&mut self, data: &[u8]) {
        self.hasher.update(data);
        self.offset += data.len();
    }

    /// Append the digest of everything written so far
    pub fn finish(mut self) -> anyhow::Result<()> {
        let digest = self.hasher.finalize_reset();
        self.file
            .deref_mut()
            .write_all(&digest)
            .context("Unable to write the index checksum")?;

        Ok(())
    }

    /// Compare the stored trailer with the digest of everything read so far
    pub fn verify(mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        self.file
            .deref_mut()
            .read_exact(&mut stored)
            .context("Index has no checksum")?;

        if stored != self.hasher.finalize_reset().as_slice() {
            bail!("Index checksum mismatch after {} bytes", self.offset);
        }

        Ok(())
    }
}
