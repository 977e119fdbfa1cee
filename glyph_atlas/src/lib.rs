// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Atlas rasterizes the printable ASCII range of a font into a single-row,
//! power-of-two texture and writes a line-oriented metrics file next to it.
//!
//! The pipeline is split in two halves:
//!
//! - [`build_atlas`] runs the measurement and render passes against any
//!   [`GlyphBackend`]. It knows nothing about font files or pixels.
//! - [`SkiaBackend`] implements the drawing interface with [fontique] for family
//!   resolution, [skrifa] for glyph metrics and outlines and [tiny-skia] for
//!   rasterization and PNG encoding.
//!
//! The metrics file can be read back with [`FontMetrics::parse`] and used to place
//! textured glyph quads with [`TextLayout`].
//!
//! ```no_run
//! use glyph_atlas::{AtlasOptions, FontSource};
//!
//! let options = AtlasOptions::new(16.0).with_shadow(true);
//! glyph_atlas::generate(&FontSource::family("DejaVu Sans"), &options, "small.fnt")
//!     .expect("atlas written");
//! ```
//!
//! [fontique]: https://docs.rs/fontique
//! [skrifa]: https://docs.rs/skrifa
//! [tiny-skia]: https://docs.rs/tiny-skia

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

mod atlas;
mod error;
mod font;
mod metrics;
mod output;
mod skia;
mod surface;
mod text;

#[cfg(test)]
mod testing;

pub use atlas::{
    build_atlas, measure_extent, power_of_two, AtlasOptions, FontAtlas, FILL_COLOR,
    SHADOW_COLOR, SHADOW_STROKE_WIDTH,
};
pub use error::{AtlasError, ParseMetricsError, ParseMetricsErrorKind};
pub use font::{resolve_family, FontSource, ResolvedFont};
pub use metrics::{FontMetrics, GlyphRecord, GLYPH_CODES, GLYPH_COUNT};
pub use output::{generate, AtlasPaths};
pub use skia::{SkiaBackend, SkiaSurface};
pub use surface::{GlyphBackend, GlyphBox, GlyphSurface, Pen, TextExtents};
pub use text::{GlyphQuad, TextLayout};
