// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the directory of a pack.

use asset_tools::{init_logging, ListPack};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    init_logging();
    ListPack::parse().run(&mut std::io::stdout().lock())
}
