// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asset Tools holds the command-line front ends of the asset pipeline.
//!
//! - `create_font [--shadow] <font_family> <point_size> <output.fnt>` renders a
//!   glyph atlas with [`glyph_atlas`].
//! - `create_pack <files>...` writes `kaal.dat` with [`pack_file`].
//! - `list_pack [pack]` prints the directory of an existing pack.
//!
//! The argument structs live here so the binaries stay thin and the parsing can
//! be tested without spawning processes.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod font;
mod pack;

use std::ffi::OsString;

pub use font::CreateFont;
pub use pack::{CreatePack, ListPack};

/// Installs `env_logger`, filtered by `RUST_LOG` and showing warnings by default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Rewrites the historical single-dash `-shadow` flag to `--shadow`.
///
/// Only the first argument after the program name is a flag position; a later
/// `-shadow` is left for clap to reject or take as a value.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let Some(first) = args.get_mut(1) {
        if first.as_os_str() == "-shadow" {
            *first = OsString::from("--shadow");
        }
    }
    args
}
