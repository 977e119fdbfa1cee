// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pack File concatenates asset files into one blob behind a plain-text directory.
//!
//! ```text
//! POKE 59458,62
//! font.fnt 2314
//! font.png 8829
//! JMP FFFF:0000
//! <bytes of font.fnt><bytes of font.png>
//! ```
//!
//! Entries are sorted by their full input path, and the payload follows the same
//! order, so an entry's offset is the sum of the sizes listed before it.
//!
//! - [`build_listing`] sorts and sizes the inputs.
//! - [`write_pack`] and [`create_pack`] write the header and stream the payload.
//! - [`PackArchive`] reads a pack back.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod listing;
mod reader;
mod writer;

pub use error::PackError;
pub use listing::{build_listing, Listing, PackEntry};
pub use reader::{ArchiveEntry, EntryReader, PackArchive};
pub use writer::{create_pack, write_pack, PackWriter, CHUNK_SIZE};

/// First line of every pack.
pub const MAGIC_LINE: &str = "POKE 59458,62";

/// Line ending the directory; the payload starts right after it.
pub const TRAILER_LINE: &str = "JMP FFFF:0000";

/// File name the game opens at start-up.
pub const DEFAULT_PACK_NAME: &str = "kaal.dat";
