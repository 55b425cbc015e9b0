use crate::artifacts::index::checksum::ChecksummedFile;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

const PATH_LENGTH_SIZE: usize = 2;

/// Encode a path as a length-prefixed UTF-8 string
pub fn pack_path(path: &Path) -> anyhow::Result<Bytes> {
    let name = path
        .to_str()
        .with_context(|| format!("path {path:?} is not valid UTF-8"))?;
    let length = u16::try_from(name.len())
        .with_context(|| format!("path {name} is too long for the index"))?;

    let mut bytes = Vec::with_capacity(PATH_LENGTH_SIZE + name.len());
    bytes.write_u16::<byteorder::NetworkEndian>(length)?;
    bytes.write_all(name.as_bytes())?;

    Ok(Bytes::from(bytes))
}

pub fn read_path(reader: &mut ChecksummedFile) -> anyhow::Result<PathBuf> {
    let length = byteorder::NetworkEndian::read_u16(&reader.read(PATH_LENGTH_SIZE)?);
    let name = reader.read(length as usize)?;
    let name = String::from_utf8(name.to_vec()).context("Invalid path in index entry")?;

    Ok(PathBuf::from(name))
}

/// A file staged for addition, with the digest of its staged content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedEntry {
    pub path: PathBuf,
    pub oid: ObjectId,
}

impl StagedEntry {
    pub fn pack(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::new();
        self.oid.write_h40_to(&mut bytes)?;
        bytes.extend_from_slice(&pack_path(&self.path)?);

        Ok(Bytes::from(bytes))
    }

    pub fn read_from(reader: &mut ChecksummedFile) -> anyhow::Result<Self> {
        let raw_oid = reader.read(OBJECT_ID_LENGTH / 2)?;
        let oid = ObjectId::read_h40_from(&mut &raw_oid[..])?;
        let path = read_path(reader)?;

        Ok(StagedEntry { path, oid })
    }
}
