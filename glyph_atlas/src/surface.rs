// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing interface the atlas builder renders through.

use peniko::Color;

use crate::AtlasError;

/// Text extents of a single glyph, in the convention of a y-down drawing surface.
///
/// `x_bearing` and `y_bearing` are the offset from the pen position to the
/// top-left corner of the inked region, so `y_bearing` is negative for glyphs
/// that rise above the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    /// Horizontal offset from the pen to the left edge of the ink.
    pub x_bearing: f32,
    /// Vertical offset from the pen to the top edge of the ink.
    pub y_bearing: f32,
    /// Width of the ink.
    pub width: f32,
    /// Height of the ink.
    pub height: f32,
    /// Horizontal pen advance.
    pub x_advance: f32,
    /// Vertical pen advance.
    pub y_advance: f32,
}

/// Glyph extents snapped to whole pixels.
///
/// The ink origin is floored and the far ink edge is ceiled so the box always
/// covers every touched pixel. Advances are rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphBox {
    /// Left edge of the ink relative to the pen.
    pub x: i32,
    /// Top edge of the ink relative to the pen.
    pub y: i32,
    /// Ink width in pixels.
    pub width: i32,
    /// Ink height in pixels.
    pub height: i32,
    /// Horizontal advance in pixels.
    pub x_advance: i32,
    /// Vertical advance in pixels.
    pub y_advance: i32,
}

impl GlyphBox {
    /// Quantizes floating point extents to the pixel grid.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "glyph extents at any sane point size fit comfortably in i32"
    )]
    pub fn from_extents(extents: TextExtents) -> Self {
        if extents.width <= 0.0 || extents.height <= 0.0 {
            return Self {
                x_advance: extents.x_advance.round() as i32,
                y_advance: extents.y_advance.round() as i32,
                ..Self::default()
            };
        }
        let x0 = extents.x_bearing.floor();
        let y0 = extents.y_bearing.floor();
        let x1 = (extents.x_bearing + extents.width).ceil();
        let y1 = (extents.y_bearing + extents.height).ceil();
        Self {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as i32,
            height: (y1 - y0) as i32,
            x_advance: extents.x_advance.round() as i32,
            y_advance: extents.y_advance.round() as i32,
        }
    }
}

/// A pen position on the surface, in whole pixels, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pen {
    /// Horizontal pen position.
    pub x: i32,
    /// Baseline position.
    pub y: i32,
}

impl Pen {
    /// Creates a pen at the given position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A drawing surface with a font and size already selected.
pub trait GlyphSurface {
    /// Measures the extents of a single character.
    ///
    /// Characters the font cannot render measure as zero-sized.
    fn measure(&mut self, ch: char) -> TextExtents;

    /// Strokes the outline of `ch` with its origin at `pen`.
    fn stroke_glyph(&mut self, ch: char, pen: Pen, line_width: f32, color: Color);

    /// Fills `ch` with its origin at `pen`.
    fn fill_glyph(&mut self, ch: char, pen: Pen, color: Color);
}

/// Creates drawing surfaces for one font at one size.
pub trait GlyphBackend {
    /// The surface type produced by this backend.
    type Surface<'a>: GlyphSurface
    where
        Self: 'a;

    /// Allocates a transparent surface of the given pixel size.
    fn create_surface(&self, width: u32, height: u32) -> Result<Self::Surface<'_>, AtlasError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_covers_fractional_ink() {
        let extents = TextExtents {
            x_bearing: 0.4,
            y_bearing: -7.2,
            width: 5.3,
            height: 7.2,
            x_advance: 6.6,
            y_advance: 0.0,
        };
        let glyph = GlyphBox::from_extents(extents);
        assert_eq!(glyph.x, 0, "left edge should be floored");
        assert_eq!(glyph.y, -8, "top edge should be floored");
        assert_eq!(glyph.width, 6, "right edge 5.7 should ceil to 6");
        assert_eq!(glyph.height, 8, "bottom edge 0.0 stays at the baseline");
        assert_eq!(glyph.x_advance, 7, "advance should round");
    }

    #[test]
    fn empty_ink_keeps_only_advance() {
        let extents = TextExtents {
            x_bearing: 3.0,
            y_bearing: 1.0,
            x_advance: 4.4,
            ..TextExtents::default()
        };
        let glyph = GlyphBox::from_extents(extents);
        assert_eq!(
            glyph,
            GlyphBox {
                x_advance: 4,
                ..GlyphBox::default()
            },
            "a blank glyph has no ink box"
        );
    }
}
