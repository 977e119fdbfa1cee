// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pack_file::{create_pack, PackArchive, DEFAULT_PACK_NAME};

/// Arguments of `create_pack`.
#[derive(Debug, Parser)]
#[command(name = "create_pack")]
#[command(version, about = "Concatenate files into a data pack", long_about = None)]
pub struct CreatePack {
    /// Files to pack, in any order.
    pub files: Vec<PathBuf>,

    /// Where to write the pack.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_PACK_NAME)]
    pub output: PathBuf,
}

impl CreatePack {
    /// Writes the pack.
    pub fn run(self) -> anyhow::Result<()> {
        create_pack(&self.files, &self.output)
            .with_context(|| format!("failed to create {}", self.output.display()))?;
        Ok(())
    }
}

/// Arguments of `list_pack`.
#[derive(Debug, Parser)]
#[command(name = "list_pack")]
#[command(version, about = "Print the directory of a data pack", long_about = None)]
pub struct ListPack {
    /// Pack to read.
    #[arg(default_value = DEFAULT_PACK_NAME)]
    pub pack: PathBuf,
}

impl ListPack {
    /// Writes `name offset size` for every entry to `out`.
    pub fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let archive = PackArchive::open(&self.pack)
            .with_context(|| format!("failed to open {}", self.pack.display()))?;
        for entry in archive.entries() {
            writeln!(out, "{} {} {}", entry.name, entry.offset, entry.size)?;
        }
        Ok(())
    }
}
