// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorting and sizing the pack inputs.

use core::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::{PackError, MAGIC_LINE, TRAILER_LINE};

/// One directory line of a pack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackEntry {
    /// Base name of the input file.
    pub name: String,
    /// Size of the input file in bytes.
    pub size: u64,
}

/// Inputs in pack order, with their directory entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Input paths, sorted.
    pub paths: Vec<PathBuf>,
    /// Directory entries, parallel to `paths`.
    pub entries: Vec<PackEntry>,
}

impl Listing {
    /// Total payload size: the sum of every entry's size.
    pub fn payload_len(&self) -> u64 {
        self.entries.iter().map(|entry| entry.size).sum()
    }

    /// Payload offset of every entry, in order.
    pub fn offsets(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().scan(0, |offset, entry| {
            let start = *offset;
            *offset += entry.size;
            Some(start)
        })
    }

    /// The header text: magic line, one line per entry, trailer line.
    pub fn header(&self) -> String {
        let mut header = String::new();
        header.push_str(MAGIC_LINE);
        header.push('\n');
        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = writeln!(header, "{} {}", entry.name, entry.size);
        }
        header.push_str(TRAILER_LINE);
        header.push('\n');
        header
    }
}

/// Sorts `paths` and reads the size of every file.
///
/// Paths are ordered by comparing the full path strings as given, not their base
/// names, so `b/a.bin` sorts after `a/z.bin`. Every input must be a regular file
/// whose base name has no whitespace.
pub fn build_listing<I, P>(paths: I) -> Result<Listing, PackError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let entries = paths
        .iter()
        .map(|path| {
            let entry = entry_for(path)?;
            log::debug!("{} -> {} ({} bytes)", path.display(), entry.name, entry.size);
            Ok(entry)
        })
        .collect::<Result<Vec<_>, PackError>>()?;

    Ok(Listing { paths, entries })
}

fn entry_for(path: &Path) -> Result<PackEntry, PackError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty() && !name.contains(char::is_whitespace))
        .ok_or_else(|| PackError::InvalidEntryName(path.to_owned()))?;
    let metadata = std::fs::metadata(path).map_err(|err| PackError::io(path, err))?;
    if !metadata.is_file() {
        return Err(PackError::NotAFile(path.to_owned()));
    }
    Ok(PackEntry {
        name: name.to_owned(),
        size: metadata.len(),
    })
}
