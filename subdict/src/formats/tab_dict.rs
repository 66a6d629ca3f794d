//! Support for the tab-separated dictionary source format.
//!
//! One entry per line: `<shortcut>\t<phrase>[\t<extra>...]`. Lines whose
//! trimmed form is empty or starts with `!` are comments and skipped
//! silently. Anything else that fails to yield a valid entry is discarded
//! with a [`Warning`], never an error.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
    str::FromStr,
};

use crate::{
    error::Error,
    types::{Entry, Warning},
};

/// Comment marker for dictionary source lines.
const COMMENT_MARKER: char = '!';

/// A parsed tab-separated dictionary: the valid entries in source order,
/// plus the warnings accumulated for every discarded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Valid entries, in order of first appearance. Duplicate shortcuts are
    /// kept as separate entries.
    pub entries: Vec<Entry>,
    /// One warning per discarded data line, plus [`Warning::NoEntries`] when
    /// nothing valid was found.
    pub warnings: Vec<Warning>,
}

impl Format {
    /// Parse from any reader. Handles both LF and CRLF line endings.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut entries = Vec::new();
        let mut warnings = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
                continue;
            }

            // Fields beyond index 1 (e.g. a part-of-speech tag) are dropped.
            let mut fields = trimmed.split('\t');
            match (fields.next(), fields.next()) {
                (Some(shortcut), Some(phrase)) => match Entry::new(shortcut, phrase) {
                    Some(entry) => entries.push(entry),
                    None => warnings.push(Warning::EmptyField { line: line.clone() }),
                },
                _ => warnings.push(Warning::NotEnoughFields { line: line.clone() }),
            }
        }

        if entries.is_empty() {
            warnings.push(Warning::NoEntries);
        }

        Ok(Format { entries, warnings })
    }

    /// Parse from a file path.
    ///
    /// A missing file maps to [`Error::InputNotFound`]; any other open
    /// failure maps to [`Error::Read`], keeping the read phase
    /// distinguishable from write failures downstream.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
            _ => Error::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(Cursor::new(s))
    }
}
