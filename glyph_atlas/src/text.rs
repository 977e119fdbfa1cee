// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing text with a loaded atlas.
//!
//! The metrics file carries no atlas coordinates. Because glyphs are packed in a
//! single row in code order, a glyph's column is the sum of the padded widths of
//! every glyph before it.

use crate::{FontMetrics, GlyphRecord, GLYPH_CODES};

/// A textured rectangle for one character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphQuad {
    /// Character code.
    pub code: u8,
    /// Left edge on screen.
    pub x: i32,
    /// Top edge on screen.
    pub y: i32,
    /// Width on screen, equal to the glyph's width in the atlas.
    pub width: i32,
    /// Height on screen, equal to the glyph's height in the atlas.
    pub height: i32,
    /// Texture coordinates `[u0, v0, u1, v1]` of the glyph's atlas column.
    pub uv: [f32; 4],
}

/// Glyph metrics indexed by code, with the atlas column of every glyph.
#[derive(Clone, Debug)]
pub struct TextLayout {
    glyphs: Vec<Option<PlacedGlyph>>,
    line_height: i32,
}

#[derive(Clone, Copy, Debug)]
struct PlacedGlyph {
    record: GlyphRecord,
    column: i32,
}

impl TextLayout {
    /// Computes atlas columns for `metrics`.
    pub fn new(metrics: &FontMetrics) -> Self {
        let mut glyphs = vec![None; GLYPH_CODES.count()];
        let mut column = 0;
        for record in &metrics.glyphs {
            let slot = record
                .code
                .checked_sub(*GLYPH_CODES.start())
                .and_then(|index| glyphs.get_mut(usize::from(index)));
            if let Some(slot) = slot {
                *slot = Some(PlacedGlyph {
                    record: *record,
                    column,
                });
            }
            column += record.width;
        }
        // Lines are one and a half capital heights apart.
        let line_height = metrics
            .glyph(b'W')
            .map_or(0, |glyph| glyph.height * 3 / 2);
        Self {
            glyphs,
            line_height,
        }
    }

    fn placed(&self, ch: char) -> Option<&PlacedGlyph> {
        let code = u8::try_from(ch).ok()?;
        if !GLYPH_CODES.contains(&code) {
            return None;
        }
        self.glyphs
            .get(usize::from(code - GLYPH_CODES.start()))?
            .as_ref()
    }

    /// The x position of a glyph's column in the atlas.
    pub fn column(&self, code: u8) -> Option<i32> {
        self.placed(char::from(code)).map(|glyph| glyph.column)
    }

    /// Distance between baselines.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Width of the widest line of `text`, by summing advances.
    ///
    /// Characters outside printable ASCII take no space.
    pub fn text_width(&self, text: &str) -> i32 {
        let mut width = 0;
        let mut x = 0;
        for ch in text.chars() {
            if ch == '\n' {
                width = width.max(x);
                x = 0;
            } else if let Some(glyph) = self.placed(ch) {
                x += glyph.record.x_advance;
            }
        }
        width.max(x)
    }

    /// Lays out `text` with its first baseline at y = 0, returning one quad per
    /// printable character.
    ///
    /// `atlas_width` and `atlas_height` are the texture dimensions used to
    /// normalize texture coordinates.
    pub fn quads(&self, text: &str, atlas_width: u32, atlas_height: u32) -> Vec<GlyphQuad> {
        let tex_width = atlas_width.max(1) as f32;
        let tex_height = atlas_height.max(1) as f32;
        let mut quads = Vec::with_capacity(text.len());
        let (mut x, mut y) = (0, 0);
        for ch in text.chars() {
            if ch == '\n' {
                x = 0;
                y += self.line_height;
                continue;
            }
            let Some(glyph) = self.placed(ch) else {
                continue;
            };
            let record = &glyph.record;
            quads.push(GlyphQuad {
                code: record.code,
                x: x + record.x,
                y: y + record.y,
                width: record.width,
                height: record.height,
                uv: [
                    glyph.column as f32 / tex_width,
                    0.0,
                    (glyph.column + record.width) as f32 / tex_width,
                    record.height as f32 / tex_height,
                ],
            });
            x += record.x_advance;
        }
        quads
    }
}
