// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a font into `<output>.fnt` and `<output>.png`.

use asset_tools::{init_logging, normalize_args, CreateFont};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CreateFont::parse_from(normalize_args(std::env::args_os()));
    args.run(&mut std::io::stdout().lock())
}
