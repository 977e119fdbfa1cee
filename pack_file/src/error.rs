// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while writing or reading a pack.
#[derive(Debug)]
#[non_exhaustive]
pub enum PackError {
    /// An I/O operation failed, on the given file when known.
    Io {
        /// The file being accessed, if any.
        path: Option<PathBuf>,
        /// The underlying error.
        source: io::Error,
    },
    /// An input is not a regular file.
    NotAFile(PathBuf),
    /// An input's base name cannot be written as a single header token.
    InvalidEntryName(PathBuf),
    /// An input changed size between listing and copying.
    SizeMismatch {
        /// The input file.
        path: PathBuf,
        /// Size written in the header.
        expected: u64,
        /// Bytes actually copied.
        actual: u64,
    },
    /// The data does not start with the pack magic line.
    NotAPack,
    /// A directory line is not `<name> <size>`.
    MalformedEntry {
        /// 1-based line number within the header.
        line: usize,
    },
    /// The directory never ends with the trailer line.
    MissingTrailer,
    /// No entry has the requested name.
    EntryNotFound(String),
}

impl PackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "{}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "{source}"),
            Self::NotAFile(path) => write!(f, "{}: not a regular file", path.display()),
            Self::InvalidEntryName(path) => {
                write!(f, "{}: name cannot be stored in a pack", path.display())
            }
            Self::SizeMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected {expected} bytes but copied {actual}",
                path.display()
            ),
            Self::NotAPack => f.write_str("invalid pack file"),
            Self::MalformedEntry { line } => write!(f, "malformed pack entry at line {line}"),
            Self::MissingTrailer => f.write_str("pack directory is not terminated"),
            Self::EntryNotFound(name) => write!(f, "can not find {name}"),
        }
    }
}

impl core::error::Error for PackError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PackError {
    fn from(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
