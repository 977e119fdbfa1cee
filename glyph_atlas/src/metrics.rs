// Copyright 2026 the Kaal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line-oriented glyph metrics file.
//!
//! ```text
//! texture small.png
//! glyph 32 -1 -1 2 2 4 0
//! glyph 33 0 -13 4 15 4 0
//! ...
//! ```

use core::fmt;
use core::ops::RangeInclusive;
use std::io::{self, Write};

use crate::error::{ParseMetricsError, ParseMetricsErrorKind};
use crate::GlyphBox;

/// The character codes an atlas covers: printable ASCII.
pub const GLYPH_CODES: RangeInclusive<u8> = 32..=126;

/// Number of glyphs in every atlas.
pub const GLYPH_COUNT: usize = 95;

/// Placement and advance of one glyph in the atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphRecord {
    /// Character code.
    pub code: u8,
    /// Offset from the pen to the left edge of the padded box.
    pub x: i32,
    /// Offset from the pen to the top edge of the padded box.
    pub y: i32,
    /// Padded box width; also the glyph's column width in the atlas.
    pub width: i32,
    /// Padded box height.
    pub height: i32,
    /// Horizontal advance, unpadded.
    pub x_advance: i32,
    /// Vertical advance, unpadded.
    pub y_advance: i32,
}

impl GlyphRecord {
    /// Builds the record for a measured glyph surrounded by `padding` pixels.
    pub fn padded(code: u8, glyph: GlyphBox, padding: i32) -> Self {
        Self {
            code,
            x: glyph.x - padding,
            y: glyph.y - padding,
            width: glyph.width + 2 * padding,
            height: glyph.height + 2 * padding,
            x_advance: glyph.x_advance,
            y_advance: glyph.y_advance,
        }
    }
}

impl fmt::Display for GlyphRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "glyph {} {} {} {} {} {} {}",
            self.code, self.x, self.y, self.width, self.height, self.x_advance, self.y_advance
        )
    }
}

/// Contents of a metrics file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontMetrics {
    /// Base name of the texture image.
    pub texture: String,
    /// Glyph records in ascending code order.
    pub glyphs: Vec<GlyphRecord>,
}

impl FontMetrics {
    /// Looks up the record for a character code.
    pub fn glyph(&self, code: u8) -> Option<&GlyphRecord> {
        self.glyphs
            .binary_search_by_key(&code, |glyph| glyph.code)
            .ok()
            .map(|index| &self.glyphs[index])
    }

    /// Writes the metrics file.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Parses a metrics file.
    ///
    /// Blank lines and lines with an unknown keyword are skipped.
    pub fn parse(source: &str) -> Result<Self, ParseMetricsError> {
        let mut texture = None;
        let mut glyphs: Vec<GlyphRecord> = Vec::with_capacity(GLYPH_COUNT);
        let mut line_count = 0;

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            line_count = line_number;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("texture") => {
                    let name = tokens.next().ok_or(ParseMetricsError::new(
                        ParseMetricsErrorKind::InvalidTexture,
                        line_number,
                    ))?;
                    texture = Some(name.to_owned());
                }
                Some("glyph") => {
                    let glyph = parse_glyph(tokens, line_number)?;
                    if glyphs.last().is_some_and(|last| last.code >= glyph.code) {
                        return Err(ParseMetricsError::new(
                            ParseMetricsErrorKind::OutOfOrder,
                            line_number,
                        ));
                    }
                    glyphs.push(glyph);
                }
                Some(keyword) => {
                    log::debug!("skipping unknown metrics line {line_number}: {keyword}");
                }
                None => {}
            }
        }

        let texture = texture.ok_or(ParseMetricsError::new(
            ParseMetricsErrorKind::MissingTexture,
            line_count,
        ))?;
        Ok(Self { texture, glyphs })
    }
}

fn parse_glyph<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<GlyphRecord, ParseMetricsError> {
    let invalid = ParseMetricsError::new(ParseMetricsErrorKind::InvalidGlyph, line);
    let mut values = [0_i32; 7];
    let mut count = 0;
    for token in tokens {
        let slot = values.get_mut(count).ok_or(invalid)?;
        *slot = token.parse().map_err(|_| invalid)?;
        count += 1;
    }
    if count != values.len() {
        return Err(invalid);
    }
    let [code, x, y, width, height, x_advance, y_advance] = values;
    let code = u8::try_from(code)
        .ok()
        .filter(|code| GLYPH_CODES.contains(code))
        .ok_or(ParseMetricsError::new(
            ParseMetricsErrorKind::CodeOutOfRange,
            line,
        ))?;
    Ok(GlyphRecord {
        code,
        x,
        y,
        width,
        height,
        x_advance,
        y_advance,
    })
}

impl fmt::Display for FontMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "texture {}", self.texture)?;
        for glyph in &self.glyphs {
            writeln!(f, "{glyph}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "texture small.png\n\
        glyph 32 -1 -1 2 2 4 0\n\
        glyph 33 0 -13 4 15 4 0\n\
        glyph 34 0 -13 6 6 5 0\n";

    #[test]
    fn glyph_range_is_printable_ascii() {
        assert_eq!(GLYPH_CODES.count(), GLYPH_COUNT, "32..=126 holds 95 codes");
    }

    #[test]
    fn padded_record_grows_box_on_all_sides() {
        let glyph = GlyphBox {
            x: 1,
            y: -10,
            width: 6,
            height: 10,
            x_advance: 8,
            y_advance: 0,
        };
        let record = GlyphRecord::padded(b'A', glyph, 2);
        assert_eq!(
            record,
            GlyphRecord {
                code: 65,
                x: -1,
                y: -12,
                width: 10,
                height: 14,
                x_advance: 8,
                y_advance: 0,
            },
            "padding shifts the origin and widens the box but not the advance"
        );
    }

    #[test]
    fn parses_sample() {
        let metrics = FontMetrics::parse(SAMPLE).unwrap();
        assert_eq!(metrics.texture, "small.png", "texture name");
        assert_eq!(metrics.glyphs.len(), 3, "three glyph lines");
        assert_eq!(
            metrics.glyph(b'!'),
            Some(&GlyphRecord {
                code: 33,
                x: 0,
                y: -13,
                width: 4,
                height: 15,
                x_advance: 4,
                y_advance: 0,
            }),
            "lookup by code"
        );
        assert_eq!(metrics.glyph(b'A'), None, "absent glyph");
    }

    #[test]
    fn written_text_matches_format() {
        let metrics = FontMetrics::parse(SAMPLE).unwrap();
        let mut out = Vec::new();
        metrics.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), SAMPLE, "byte-exact output");
    }

    #[test]
    fn unknown_lines_are_skipped() {
        let metrics = FontMetrics::parse("# comment\n\ntexture a.png\nkerning 1 2 3\n").unwrap();
        assert_eq!(metrics.texture, "a.png", "texture after noise");
        assert!(metrics.glyphs.is_empty(), "no glyphs");
    }

    #[test]
    fn rejects_short_glyph_line() {
        let err = FontMetrics::parse("texture a.png\nglyph 32 0 0 1 1\n").unwrap_err();
        assert_eq!(err.kind(), ParseMetricsErrorKind::InvalidGlyph, "kind");
        assert_eq!(err.line(), 2, "line number");
    }

    #[test]
    fn rejects_long_glyph_line() {
        let err = FontMetrics::parse("texture a.png\nglyph 32 0 0 1 1 1 0 9\n").unwrap_err();
        assert_eq!(err.kind(), ParseMetricsErrorKind::InvalidGlyph, "kind");
    }

    #[test]
    fn rejects_control_codes() {
        let err = FontMetrics::parse("texture a.png\nglyph 10 0 0 1 1 1 0\n").unwrap_err();
        assert_eq!(err.kind(), ParseMetricsErrorKind::CodeOutOfRange, "kind");
    }

    #[test]
    fn rejects_descending_codes() {
        let err = FontMetrics::parse(
            "texture a.png\nglyph 40 0 0 1 1 1 0\nglyph 40 0 0 1 1 1 0\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ParseMetricsErrorKind::OutOfOrder, "kind");
        assert_eq!(err.line(), 3, "second 40 is the offender");
    }

    #[test]
    fn requires_texture() {
        let err = FontMetrics::parse("glyph 32 0 0 1 1 1 0\n").unwrap_err();
        assert_eq!(err.kind(), ParseMetricsErrorKind::MissingTexture, "kind");
    }
}
