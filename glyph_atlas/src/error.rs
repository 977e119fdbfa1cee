// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;
use std::path::PathBuf;

use skrifa::raw::ReadError;

/// Errors produced while building or writing a font atlas.
#[derive(Debug)]
#[non_exhaustive]
pub enum AtlasError {
    /// Neither the requested family nor any fallback family is installed.
    FontNotFound {
        /// The family that was requested.
        family: String,
    },
    /// The font data could not be parsed.
    InvalidFont(ReadError),
    /// A drawing surface of the given size could not be allocated.
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The measured glyphs have no extent to fit into a texture.
    EmptyAtlas,
    /// The rendered atlas could not be encoded as PNG.
    Encode(Box<dyn core::error::Error + Send + Sync>),
    /// Reading or writing a file failed.
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

impl AtlasError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontNotFound { family } => write!(f, "no font found for family {family:?}"),
            Self::InvalidFont(err) => write!(f, "invalid font data: {err}"),
            Self::Surface { width, height } => {
                write!(f, "unable to allocate a {width}x{height} surface")
            }
            Self::EmptyAtlas => f.write_str("glyphs have no extent to pack"),
            Self::Encode(err) => write!(f, "unable to encode atlas image: {err}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl core::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidFont(err) => Some(err),
            Self::Encode(err) => Some(err.as_ref()),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ReadError> for AtlasError {
    fn from(err: ReadError) -> Self {
        Self::InvalidFont(err)
    }
}

/// Kinds of errors that can occur when parsing a metrics file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseMetricsErrorKind {
    /// A `glyph` line did not carry seven integers.
    InvalidGlyph,
    /// A glyph code lies outside the printable ASCII range.
    CodeOutOfRange,
    /// Glyph codes are not strictly ascending.
    OutOfOrder,
    /// A `texture` line has no file name.
    InvalidTexture,
    /// The file never names its texture.
    MissingTexture,
}

/// Error returned when parsing a metrics file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseMetricsError {
    kind: ParseMetricsErrorKind,
    line: usize,
}

impl ParseMetricsError {
    pub(crate) const fn new(kind: ParseMetricsErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseMetricsErrorKind {
        self.kind
    }

    /// Returns the 1-based line the error was detected on.
    ///
    /// For [`ParseMetricsErrorKind::MissingTexture`] this is the number of lines read.
    pub const fn line(self) -> usize {
        self.line
    }
}

impl fmt::Display for ParseMetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseMetricsErrorKind::InvalidGlyph => "invalid glyph",
            ParseMetricsErrorKind::CodeOutOfRange => "glyph code out of range",
            ParseMetricsErrorKind::OutOfOrder => "glyph codes not ascending",
            ParseMetricsErrorKind::InvalidTexture => "texture line without a file name",
            ParseMetricsErrorKind::MissingTexture => "missing texture line",
        };
        write!(f, "{msg} at line {}", self.line)
    }
}

impl core::error::Error for ParseMetricsError {}
