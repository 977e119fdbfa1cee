// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic drawing backend that records what it is asked to draw.

use std::cell::RefCell;

use peniko::Color;

use crate::{AtlasError, GlyphBackend, GlyphSurface, Pen, TextExtents};

/// A draw call recorded by [`FakeSurface`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    Stroke {
        ch: char,
        pen: Pen,
        line_width: f32,
        color: Color,
    },
    Fill {
        ch: char,
        pen: Pen,
        color: Color,
    },
}

/// Synthesizes glyph extents from the character code, with fractional edges
/// so quantization is exercised.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    missing: Vec<char>,
    created: RefCell<Vec<(u32, u32)>>,
}

impl FakeBackend {
    /// Makes `code` measure as an unsupported, empty glyph.
    pub(crate) fn without(mut self, code: u8) -> Self {
        self.missing.push(char::from(code));
        self
    }

    /// Sizes of every surface created so far, in order.
    pub(crate) fn created_sizes(&self) -> Vec<(u32, u32)> {
        self.created.borrow().clone()
    }
}

impl GlyphBackend for FakeBackend {
    type Surface<'a>
        = FakeSurface
    where
        Self: 'a;

    fn create_surface(&self, width: u32, height: u32) -> Result<FakeSurface, AtlasError> {
        self.created.borrow_mut().push((width, height));
        Ok(FakeSurface {
            width,
            height,
            missing: self.missing.clone(),
            commands: Vec::new(),
        })
    }
}

#[derive(Debug)]
pub(crate) struct FakeSurface {
    pub(crate) width: u32,
    pub(crate) height: u32,
    missing: Vec<char>,
    pub(crate) commands: Vec<DrawCommand>,
}

impl GlyphSurface for FakeSurface {
    fn measure(&mut self, ch: char) -> TextExtents {
        if ch == ' ' || self.missing.contains(&ch) {
            return TextExtents {
                x_advance: if ch == ' ' { 4.0 } else { 0.0 },
                ..TextExtents::default()
            };
        }
        let code = u8::try_from(ch).unwrap_or(b'?');
        let width = f32::from(code % 7) + 2.5;
        let height = f32::from(code % 11) + 4.25;
        let descent = if code % 3 == 0 { 2.5 } else { 0.0 };
        TextExtents {
            x_bearing: f32::from(code % 2) * 0.5,
            y_bearing: -(height - descent),
            width,
            height,
            x_advance: width + 1.5,
            y_advance: 0.0,
        }
    }

    fn stroke_glyph(&mut self, ch: char, pen: Pen, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::Stroke {
            ch,
            pen,
            line_width,
            color,
        });
    }

    fn fill_glyph(&mut self, ch: char, pen: Pen, color: Color) {
        self.commands.push(DrawCommand::Fill { ch, pen, color });
    }
}
