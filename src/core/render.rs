use std::io::{self, Write};

use crate::models::FsEntry;

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const VERTICAL: &str = "│   ";
pub const SPACE: &str = "    ";

/// Connector drawn in front of an entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Connector {
    Branch,
    LastBranch,
}

impl Connector {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::LastBranch
        } else {
            Connector::Branch
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Branch => BRANCH,
            Connector::LastBranch => LAST_BRANCH,
        }
    }

    /// Fragment that the children of this entry inherit.
    pub fn continuation(self) -> &'static str {
        match self {
            Connector::Branch => VERTICAL,
            Connector::LastBranch => SPACE,
        }
    }
}

/// Write the indentation for one line, one fragment per open ancestor.
pub fn write_prefix<W, I>(writer: &mut W, ancestors: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Connector>,
{
    for connector in ancestors {
        writer.write_all(connector.continuation().as_bytes())?;
    }
    Ok(())
}

pub fn write_entry<W, I>(
    writer: &mut W,
    ancestors: I,
    connector: Connector,
    entry: &FsEntry,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Connector>,
{
    write_prefix(writer, ancestors)?;
    writer.write_all(connector.glyph().as_bytes())?;
    writer.write_all(entry.name.as_bytes())?;

    if entry.kind.is_dir() {
        writer.write_all(b"/")?;
    }

    writer.write_all(b"\n")
}

/// Placeholder for a directory whose contents could not be listed.
/// Always drawn with the branch connector.
/// `ancestors` is the prefix its children would have had.
pub fn write_access_denied<W, I>(writer: &mut W, ancestors: I, name: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Connector>,
{
    write_prefix(writer, ancestors)?;
    writeln!(writer, "{BRANCH}[Access Denied: {name}]")
}
