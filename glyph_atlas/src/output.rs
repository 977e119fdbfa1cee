// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output file naming and the end-to-end atlas generation.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::{build_atlas, AtlasError, AtlasOptions, FontSource, SkiaBackend};

/// The pair of files an atlas is written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasPaths {
    /// The metrics file.
    pub metrics: PathBuf,
    /// The texture image: the metrics path with a `png` extension.
    pub image: PathBuf,
}

impl AtlasPaths {
    /// Derives the image path from the metrics path.
    pub fn new(metrics: impl Into<PathBuf>) -> Self {
        let metrics = metrics.into();
        let image = metrics.with_extension("png");
        Self { metrics, image }
    }

    /// The image's file name, as recorded in the metrics file.
    pub fn texture_name(&self) -> String {
        self.image
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Renders an atlas for `font` and writes the image and metrics file.
///
/// The image is written first, so a metrics file never names a texture that
/// failed to be written.
pub fn generate(
    font: &FontSource,
    options: &AtlasOptions,
    metrics_path: impl AsRef<Path>,
) -> Result<AtlasPaths, AtlasError> {
    let paths = AtlasPaths::new(metrics_path.as_ref());
    let backend = SkiaBackend::new(font.load()?, options.point_size)?;
    let atlas = build_atlas(&backend, options, &paths.texture_name())?;

    atlas.surface.save_png(&paths.image)?;
    log::info!(
        "wrote {}x{} atlas to {}",
        atlas.width,
        atlas.height,
        paths.image.display()
    );

    let file = File::create(&paths.metrics).map_err(|err| AtlasError::io(&paths.metrics, err))?;
    atlas
        .metrics
        .write_to(BufWriter::new(file))
        .map_err(|err| AtlasError::io(&paths.metrics, err))?;
    log::info!(
        "wrote {} glyph records to {}",
        atlas.metrics.glyphs.len(),
        paths.metrics.display()
    );
    Ok(paths)
}
