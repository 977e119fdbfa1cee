// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packs the given files into `kaal.dat`.

use asset_tools::{init_logging, CreatePack};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    init_logging();
    CreatePack::parse().run()
}
