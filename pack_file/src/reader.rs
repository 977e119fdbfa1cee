// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opening a pack and reading its entries back.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use hashbrown::HashMap;

use crate::{PackError, MAGIC_LINE, TRAILER_LINE};

/// An entry of an opened pack, located within the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name as stored in the directory.
    pub name: String,
    /// Absolute byte offset of the entry's data.
    pub offset: u64,
    /// Size of the entry's data in bytes.
    pub size: u64,
}

/// A pack whose directory has been parsed.
#[derive(Debug)]
pub struct PackArchive<R> {
    reader: R,
    entries: Vec<ArchiveEntry>,
    index: HashMap<String, usize>,
}

impl PackArchive<BufReader<File>> {
    /// Opens the pack at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PackError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| PackError::io(path, err))?;
        Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            PackError::Io { path: None, source } => PackError::io(path, source),
            other => other,
        })
    }
}

impl<R: BufRead + Seek> PackArchive<R> {
    /// Parses the directory at the current position of `reader`.
    ///
    /// Entry data is located relative to the end of the trailer line.
    pub fn from_reader(mut reader: R) -> Result<Self, PackError> {
        let mut line = Vec::new();
        match read_line(&mut reader, &mut line) {
            Ok(Some(MAGIC_LINE)) => {}
            Ok(_) => return Err(PackError::NotAPack),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(PackError::NotAPack);
            }
            Err(err) => return Err(err.into()),
        }

        let mut pending = Vec::new();
        let mut line_number = 1;
        loop {
            line_number += 1;
            let text = match read_line(&mut reader, &mut line) {
                Ok(Some(text)) => text,
                Ok(None) => return Err(PackError::MissingTrailer),
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    return Err(PackError::MalformedEntry { line: line_number });
                }
                Err(err) => return Err(err.into()),
            };
            if text == TRAILER_LINE {
                break;
            }
            let (name, size) = parse_entry(text).ok_or(PackError::MalformedEntry {
                line: line_number,
            })?;
            pending.push((name.to_owned(), size));
        }

        let mut offset = reader.stream_position()?;
        let mut entries = Vec::with_capacity(pending.len());
        let mut index = HashMap::with_capacity(pending.len());
        for (name, size) in pending {
            if index.insert(name.clone(), entries.len()).is_some() {
                log::warn!("duplicate pack entry {name}, the later one wins");
            }
            entries.push(ArchiveEntry { name, offset, size });
            offset += size;
        }
        log::debug!("opened pack with {} entries", entries.len());

        Ok(Self {
            reader,
            entries,
            index,
        })
    }
}

impl<R: Read + Seek> PackArchive<R> {
    /// Every directory entry, in file order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&ArchiveEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Reads the whole of the named entry.
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>, PackError> {
        let mut entry = self.entry_reader(name)?;
        let mut data = Vec::with_capacity(usize::try_from(entry.len()).unwrap_or(0));
        entry.read_to_end(&mut data)?;
        Ok(data)
    }

    /// A reader confined to the named entry's bytes.
    pub fn entry_reader(&mut self, name: &str) -> Result<EntryReader<'_, R>, PackError> {
        let entry = self
            .get(name)
            .ok_or_else(|| PackError::EntryNotFound(name.to_owned()))?;
        let (start, size) = (entry.offset, entry.size);
        Ok(EntryReader {
            inner: &mut self.reader,
            start,
            size,
            pos: 0,
        })
    }

    /// Unwraps the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Reads and seeks within one entry of a pack.
///
/// Positions are relative to the start of the entry, and reads stop at its end.
#[derive(Debug)]
pub struct EntryReader<'a, R> {
    inner: &'a mut R,
    start: u64,
    size: u64,
    pos: u64,
}

impl<R> EntryReader<'_, R> {
    /// Size of the entry in bytes.
    pub fn len(&self) -> u64 {
        self.size
    }

    /// Whether the entry has no data.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<R: Read + Seek> Read for EntryReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.size - self.pos;
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let len = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
        self.inner.seek(SeekFrom::Start(self.start + self.pos))?;
        let read = self.inner.read(&mut buf[..len])?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "pack ends before the entry does",
            ));
        }
        self.pos += read as u64;
        Ok(read)
    }
}

impl<R> Seek for EntryReader<'_, R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => self.size.checked_add_signed(delta),
            SeekFrom::Current(delta) => self.pos.checked_add_signed(delta),
        };
        match target {
            Some(target) if target <= self.size => {
                self.pos = target;
                Ok(target)
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek outside of pack entry",
            )),
        }
    }
}

/// Reads one line without its terminator, or `None` at end of input.
fn read_line<'a>(reader: &mut impl BufRead, line: &'a mut Vec<u8>) -> io::Result<Option<&'a str>> {
    line.clear();
    if reader.read_until(b'\n', line)? == 0 {
        return Ok(None);
    }
    let text = core::str::from_utf8(line)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(Some(text.trim_end_matches(['\n', '\r'])))
}

fn parse_entry(text: &str) -> Option<(&str, u64)> {
    let mut fields = text.split_whitespace();
    let name = fields.next()?;
    let size = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some((name, size))
}
