// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement and render passes of the atlas builder.
//!
//! Glyphs are packed left to right in a single row, in ascending code order.
//! There is no vertical packing, so the atlas is exactly one glyph tall.

use peniko::color::palette;
use peniko::Color;

use crate::{
    AtlasError, FontMetrics, GlyphBackend, GlyphBox, GlyphRecord, GlyphSurface, Pen, GLYPH_CODES,
    GLYPH_COUNT,
};

/// Line width of the shadow outline.
pub const SHADOW_STROKE_WIDTH: f32 = 2.0;

/// Color of the shadow outline.
pub const SHADOW_COLOR: Color = palette::css::BLACK;

/// Color of the glyph fill.
pub const FILL_COLOR: Color = palette::css::WHITE;

/// Options for a single atlas build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasOptions {
    /// Font size in pixels per em.
    pub point_size: f32,
    /// Draw a black outline beneath every glyph.
    pub shadow: bool,
}

impl AtlasOptions {
    /// Creates options for the given size, without shadow.
    pub const fn new(point_size: f32) -> Self {
        Self {
            point_size,
            shadow: false,
        }
    }

    /// Enables or disables the shadow outline.
    #[must_use]
    pub const fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Margin around each glyph's ink box, in pixels.
    ///
    /// The shadow stroke needs an extra pixel on every side.
    pub const fn padding(&self) -> i32 {
        if self.shadow {
            2
        } else {
            1
        }
    }
}

impl Default for AtlasOptions {
    fn default() -> Self {
        Self::new(16.0)
    }
}

/// A rendered atlas: the surface holding the pixels and the metrics describing them.
#[derive(Debug)]
pub struct FontAtlas<S> {
    /// Glyph metrics, ready to be written next to the image.
    pub metrics: FontMetrics,
    /// The surface the glyphs were drawn on.
    pub surface: S,
    /// Atlas width in pixels, a power of two.
    pub width: u32,
    /// Atlas height in pixels, a power of two.
    pub height: u32,
}

/// Rounds `value` up to the nearest power of two.
///
/// A zero extent has no meaningful texture size and is reported as
/// [`AtlasError::EmptyAtlas`], as is an extent beyond the largest `u32` power of two.
pub fn power_of_two(value: u32) -> Result<u32, AtlasError> {
    if value == 0 {
        return Err(AtlasError::EmptyAtlas);
    }
    value.checked_next_power_of_two().ok_or(AtlasError::EmptyAtlas)
}

/// Measures every glyph and returns the padded row width and tallest padded height.
pub fn measure_extent<S: GlyphSurface>(surface: &mut S, padding: i32) -> (u32, u32) {
    let mut total_width = 0_u32;
    let mut total_height = 0_u32;
    for code in GLYPH_CODES {
        let glyph = GlyphBox::from_extents(surface.measure(char::from(code)));
        let width = (glyph.width + 2 * padding).unsigned_abs();
        let height = (glyph.height + 2 * padding).unsigned_abs();
        total_width += width;
        total_height = total_height.max(height);
    }
    (total_width, total_height)
}

/// Builds the atlas for the printable ASCII range.
///
/// The first pass measures every glyph on a 1x1 scratch surface to size the atlas.
/// The second pass allocates the real surface, measures again and draws each glyph
/// in its column: the shadow stroke first when enabled, then the fill, both at the
/// same pen position.
pub fn build_atlas<'b, B: GlyphBackend>(
    backend: &'b B,
    options: &AtlasOptions,
    texture: &str,
) -> Result<FontAtlas<B::Surface<'b>>, AtlasError> {
    let padding = options.padding();

    let (total_width, total_height) = {
        let mut scratch = backend.create_surface(1, 1)?;
        measure_extent(&mut scratch, padding)
    };
    let width = power_of_two(total_width)?;
    let height = power_of_two(total_height)?;
    log::info!(
        "packing {GLYPH_COUNT} glyphs into {width}x{height} (row {total_width}x{total_height}, padding {padding})"
    );

    let mut surface = backend.create_surface(width, height)?;
    let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
    let mut x = 0;
    for code in GLYPH_CODES {
        let ch = char::from(code);
        let glyph = GlyphBox::from_extents(surface.measure(ch));
        let record = GlyphRecord::padded(code, glyph, padding);
        let pen = Pen::new(x - glyph.x + padding, -glyph.y + padding);
        log::debug!("{record} at column {x}");

        if options.shadow {
            surface.stroke_glyph(ch, pen, SHADOW_STROKE_WIDTH, SHADOW_COLOR);
        }
        surface.fill_glyph(ch, pen, FILL_COLOR);

        x += record.width;
        glyphs.push(record);
    }

    Ok(FontAtlas {
        metrics: FontMetrics {
            texture: texture.to_owned(),
            glyphs,
        },
        surface,
        width,
        height,
    })
}
