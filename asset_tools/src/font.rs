// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use glyph_atlas::{AtlasOptions, FontSource};

/// Arguments of `create_font`.
///
/// The positionals are optional plain strings so that a short invocation prints
/// the usage and succeeds, whatever the given arguments look like. The size is
/// only parsed once all three are present.
#[derive(Debug, Parser)]
#[command(name = "create_font")]
#[command(version, about = "Render a font into a glyph atlas and metrics file", long_about = None)]
pub struct CreateFont {
    /// Draw a black outline beneath every glyph.
    #[arg(long)]
    pub shadow: bool,

    /// Load the font from a file instead of resolving the family.
    #[arg(long, value_name = "PATH")]
    pub font_file: Option<PathBuf>,

    /// Installed font family, e.g. "DejaVu Sans".
    pub font_family: Option<String>,

    /// Font size in pixels per em.
    pub point_size: Option<String>,

    /// Metrics file to write. The image is written next to it as a `.png`.
    pub output: Option<PathBuf>,
}

impl CreateFont {
    /// Builds the atlas, or writes the usage to `out` if an argument is missing.
    pub fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let (Some(family), Some(point_size), Some(output)) =
            (self.font_family, self.point_size, self.output)
        else {
            writeln!(out, "{}", Self::command().render_usage())?;
            return Ok(());
        };
        let point_size: f32 = point_size
            .parse()
            .with_context(|| format!("invalid point size {point_size:?}"))?;

        let source = match self.font_file {
            Some(path) => {
                log::info!("using {} instead of family {family}", path.display());
                FontSource::file(path)
            }
            None => FontSource::family(family),
        };
        let options = AtlasOptions::new(point_size).with_shadow(self.shadow);
        glyph_atlas::generate(&source, &options, &output)
            .with_context(|| format!("failed to create font atlas {}", output.display()))?;
        Ok(())
    }
}
