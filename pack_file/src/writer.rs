// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing a pack: header first, then every input streamed in order.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::{build_listing, Listing, PackError};

/// Inputs are copied in chunks of this many bytes.
pub const CHUNK_SIZE: usize = 4096;

/// Streams a pack into any writer.
#[derive(Debug)]
pub struct PackWriter<W: Write> {
    inner: W,
    buffer: Box<[u8; CHUNK_SIZE]>,
}

impl<W: Write> PackWriter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Box::new([0; CHUNK_SIZE]),
        }
    }

    /// Writes the magic line, the directory and the trailer line.
    pub fn write_header(&mut self, listing: &Listing) -> Result<(), PackError> {
        self.inner.write_all(listing.header().as_bytes())?;
        Ok(())
    }

    /// Copies `source` verbatim, returning the number of bytes copied.
    pub fn append(&mut self, source: impl Read) -> Result<u64, PackError> {
        self.copy(source).map_err(|err| match err {
            CopyError::Read(err) | CopyError::Write(err) => err.into(),
        })
    }

    fn copy(&mut self, mut source: impl Read) -> Result<u64, CopyError> {
        let mut copied = 0;
        loop {
            let read = match source.read(&mut self.buffer[..]) {
                Ok(0) => return Ok(copied),
                Ok(read) => read,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(CopyError::Read(err)),
            };
            self.inner
                .write_all(&self.buffer[..read])
                .map_err(CopyError::Write)?;
            copied += read as u64;
        }
    }

    /// Flushes and returns the inner writer.
    pub fn finish(mut self) -> Result<W, PackError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Which side of a copy failed.
enum CopyError {
    Read(std::io::Error),
    Write(std::io::Error),
}

/// Writes the header for `listing` followed by the contents of every input.
///
/// Fails with [`PackError::SizeMismatch`] if an input no longer has the size
/// recorded in the listing.
pub fn write_pack<W: Write>(listing: &Listing, out: W) -> Result<W, PackError> {
    let mut writer = PackWriter::new(out);
    writer.write_header(listing)?;
    for (path, entry) in listing.paths.iter().zip(&listing.entries) {
        let file = File::open(path).map_err(|err| PackError::io(path, err))?;
        let copied = writer.copy(file).map_err(|err| match err {
            CopyError::Read(err) => PackError::io(path, err),
            CopyError::Write(err) => PackError::from(err),
        })?;
        if copied != entry.size {
            return Err(PackError::SizeMismatch {
                path: path.clone(),
                expected: entry.size,
                actual: copied,
            });
        }
    }
    writer.finish()
}

/// Packs `inputs` into a freshly truncated file at `output`.
pub fn create_pack<I, P>(inputs: I, output: impl AsRef<Path>) -> Result<Listing, PackError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let output = output.as_ref();
    let listing = build_listing(inputs)?;
    let file = File::create(output).map_err(|err| PackError::io(output, err))?;
    write_pack(&listing, BufWriter::new(file)).map_err(|err| match err {
        PackError::Io { path: None, source } => PackError::io(output, source),
        other => other,
    })?;
    log::info!(
        "packed {} files ({} bytes) into {}",
        listing.entries.len(),
        listing.payload_len(),
        output.display()
    );
    Ok(listing)
}
