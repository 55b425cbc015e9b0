use anyhow::{Context, bail};
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// Kind of a stored object, as named in its `<kind> <size>\0` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Consume a frame header and return the kind with the declared content size
    pub fn read_header(reader: &mut impl BufRead) -> anyhow::Result<(ObjectType, usize)> {
        let kind = read_field(reader, b' ').context("Object header has no kind")?;
        let size = read_field(reader, b'\0').context("Object header has no size")?;

        let size = size
            .parse()
            .with_context(|| format!("Object header has an invalid size {size:?}"))?;

        Ok((kind.parse()?, size))
    }
}

fn read_field(reader: &mut impl BufRead, delimiter: u8) -> anyhow::Result<String> {
    let mut field = Vec::new();
    reader.read_until(delimiter, &mut field)?;
    if field.pop() != Some(delimiter) {
        bail!("unterminated field");
    }

    Ok(String::from_utf8(field)?)
}

impl FromStr for ObjectType {
    type Err = anyhow::Error;

    fn from_str(kind: &str) -> anyhow::Result<Self> {
        match kind {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            _ => bail!("Unknown object kind {kind:?}"),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
