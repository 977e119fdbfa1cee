// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing backend built on Skrifa outlines and Tiny-Skia rasterization.

use core::fmt;
use std::path::Path;

use peniko::Color;
use skrifa::charmap::Charmap;
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::{DrawSettings, OutlineGlyphCollection, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{FillRule, Paint, Path as SkiaPath, PathBuilder, Pixmap, Stroke, Transform};

use crate::{AtlasError, GlyphBackend, GlyphSurface, Pen, ResolvedFont, TextExtents};

/// Renders glyphs of one font at one size into Tiny-Skia pixmaps.
#[derive(Clone, Debug)]
pub struct SkiaBackend {
    font: ResolvedFont,
    size: f32,
}

impl SkiaBackend {
    /// Creates a backend, checking that the font data can be parsed.
    pub fn new(font: ResolvedFont, point_size: f32) -> Result<Self, AtlasError> {
        FontRef::from_index(font.data.as_ref(), font.index)?;
        Ok(Self {
            font,
            size: point_size,
        })
    }

    /// The font this backend draws with.
    pub fn font(&self) -> &ResolvedFont {
        &self.font
    }
}

impl GlyphBackend for SkiaBackend {
    type Surface<'a>
        = SkiaSurface<'a>
    where
        Self: 'a;

    fn create_surface(&self, width: u32, height: u32) -> Result<SkiaSurface<'_>, AtlasError> {
        let pixmap = Pixmap::new(width, height).ok_or(AtlasError::Surface { width, height })?;
        let font = FontRef::from_index(self.font.data.as_ref(), self.font.index)?;
        let size = Size::new(self.size);
        Ok(SkiaSurface {
            charmap: font.charmap(),
            outlines: font.outline_glyphs(),
            glyph_metrics: font.glyph_metrics(size, LocationRef::default()),
            size,
            pixmap,
        })
    }
}

/// A Tiny-Skia pixmap with a font selected.
pub struct SkiaSurface<'a> {
    charmap: Charmap<'a>,
    outlines: OutlineGlyphCollection<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    size: Size,
    pixmap: Pixmap,
}

impl SkiaSurface<'_> {
    /// The rendered pixels.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consumes the surface, returning its pixels.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Encodes the surface as a PNG image.
    pub fn encode_png(&self) -> Result<Vec<u8>, AtlasError> {
        self.pixmap
            .encode_png()
            .map_err(|err| AtlasError::Encode(Box::new(err)))
    }

    /// Writes the surface to `path` as a PNG image.
    pub fn save_png(&self, path: &Path) -> Result<(), AtlasError> {
        let png = self.encode_png()?;
        std::fs::write(path, png).map_err(|err| AtlasError::io(path, err))
    }

    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let id = self.charmap.map(ch);
        if id.is_none() {
            log::debug!("{ch:?} is not mapped by the font");
        }
        id
    }

    /// Builds the outline of `glyph_id` with its origin at `(x, y)`, y down.
    fn glyph_path(&self, glyph_id: GlyphId, x: f32, y: f32) -> Option<SkiaPath> {
        let outline = self.outlines.get(glyph_id)?;
        let mut pen = PathPen::new(x, y);
        let settings = DrawSettings::unhinted(self.size, LocationRef::default());
        if let Err(err) = outline.draw(settings, &mut pen) {
            log::warn!("unable to draw glyph {glyph_id:?}: {err}");
            return None;
        }
        pen.builder.finish()
    }

    fn path_at(&self, ch: char, pen: Pen) -> Option<SkiaPath> {
        let glyph_id = self.glyph_id(ch)?;
        self.glyph_path(glyph_id, pen.x as f32, pen.y as f32)
    }
}

impl GlyphSurface for SkiaSurface<'_> {
    fn measure(&mut self, ch: char) -> TextExtents {
        let Some(glyph_id) = self.glyph_id(ch) else {
            return TextExtents::default();
        };
        let x_advance = self.glyph_metrics.advance_width(glyph_id).unwrap_or_default();
        let Some(path) = self.glyph_path(glyph_id, 0.0, 0.0) else {
            return TextExtents {
                x_advance,
                ..TextExtents::default()
            };
        };
        let bounds = path.bounds();
        TextExtents {
            x_bearing: bounds.left(),
            y_bearing: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
            x_advance,
            y_advance: 0.0,
        }
    }

    fn stroke_glyph(&mut self, ch: char, pen: Pen, line_width: f32, color: Color) {
        let Some(path) = self.path_at(ch, pen) else {
            return;
        };
        let stroke = Stroke {
            width: line_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    fn fill_glyph(&mut self, ch: char, pen: Pen, color: Color) {
        let Some(path) = self.path_at(ch, pen) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

impl fmt::Debug for SkiaSurface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkiaSurface")
            .field("size", &self.size)
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish_non_exhaustive()
    }
}

fn paint(color: Color) -> Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    paint
}

/// Collects a Skrifa outline into a Tiny-Skia path, flipping y.
struct PathPen {
    builder: PathBuilder,
    x: f32,
    y: f32,
}

impl PathPen {
    fn new(x: f32, y: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            x,
            y,
        }
    }
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fontique::Blob;

    use super::*;
    use crate::{build_atlas, resolve_family, AtlasOptions, GlyphBox};

    // Rendering tests need an installed font; they pass vacuously on machines without one.
    fn system_backend(size: f32) -> Option<SkiaBackend> {
        let font = resolve_family("sans-serif").ok()?;
        SkiaBackend::new(font, size).ok()
    }

    #[test]
    fn rejects_garbage_font_data() {
        let font = ResolvedFont {
            name: "garbage".into(),
            data: Blob::new(Arc::new(vec![0_u8; 16])),
            index: 0,
        };
        assert!(
            matches!(
                SkiaBackend::new(font, 12.0),
                Err(AtlasError::InvalidFont(_))
            ),
            "sixteen zero bytes are not a font"
        );
    }

    #[test]
    fn empty_surface_is_an_error() {
        let Some(backend) = system_backend(12.0) else {
            return;
        };
        assert!(
            matches!(
                backend.create_surface(0, 4),
                Err(AtlasError::Surface {
                    width: 0,
                    height: 4
                })
            ),
            "zero-width pixmaps cannot be allocated"
        );
    }

    #[test]
    fn metrics_do_not_depend_on_surface_size() {
        let Some(backend) = system_backend(24.0) else {
            return;
        };
        let mut scratch = backend.create_surface(1, 1).unwrap();
        let mut large = backend.create_surface(1024, 64).unwrap();
        for ch in ['A', 'g', '~', ' '] {
            assert_eq!(scratch.measure(ch), large.measure(ch), "extents of {ch:?}");
        }
    }

    #[test]
    fn space_has_advance_but_no_ink() {
        let Some(backend) = system_backend(24.0) else {
            return;
        };
        let mut surface = backend.create_surface(1, 1).unwrap();
        let space = GlyphBox::from_extents(surface.measure(' '));
        assert_eq!((space.width, space.height), (0, 0), "space has no ink");
        assert!(space.x_advance > 0, "space still advances the pen");
    }

    #[test]
    fn capitals_sit_on_the_baseline() {
        let Some(backend) = system_backend(32.0) else {
            return;
        };
        let mut surface = backend.create_surface(1, 1).unwrap();
        let extents = surface.measure('H');
        assert!(extents.y_bearing < 0.0, "ink rises above the baseline");
        assert!(
            (extents.y_bearing + extents.height).abs() < 1.0,
            "H has no descender"
        );
    }

    #[test]
    fn renders_ink_into_atlas() {
        let Some(backend) = system_backend(16.0) else {
            return;
        };
        let atlas = build_atlas(&backend, &AtlasOptions::new(16.0), "t.png").unwrap();
        let pixmap = atlas.surface.pixmap();
        assert_eq!(
            (pixmap.width(), pixmap.height()),
            (atlas.width, atlas.height),
            "pixmap has the atlas size"
        );
        assert!(
            pixmap.pixels().iter().any(|pixel| pixel.alpha() > 0),
            "some glyph was drawn"
        );
        let png = atlas.surface.encode_png().unwrap();
        let decoded = Pixmap::decode_png(&png).unwrap();
        assert_eq!(decoded.width(), atlas.width, "png width");
        assert_eq!(decoded.height(), atlas.height, "png height");
    }

    #[test]
    fn shadow_darkens_glyph_edges() {
        let Some(backend) = system_backend(16.0) else {
            return;
        };
        let atlas = build_atlas(
            &backend,
            &AtlasOptions::new(16.0).with_shadow(true),
            "t.png",
        )
        .unwrap();
        let pixels = atlas.surface.pixmap().pixels();
        assert!(
            pixels
                .iter()
                .any(|pixel| pixel.alpha() > 0 && pixel.red() == 0),
            "black outline pixels exist"
        );
        assert!(
            pixels.iter().any(|pixel| pixel.red() > 0),
            "white fill pixels exist"
        );
    }
}
