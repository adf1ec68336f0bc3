//! Single-line text layout with a rasterized glyph cache

use crate::font::FontFace;
use crate::rasterizer::{GlyphRasterizer, RasterizedGlyph};
use crate::Result;
use rustc_hash::FxHashMap;

/// A glyph placed on a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    pub glyph_id: u16,
    /// Pen position relative to the start of the line
    pub x: f32,
}

/// Result of laying out one line of text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    pub glyphs: Vec<PositionedGlyph>,
    /// Total advance width in pixels
    pub width: f32,
    /// Distance from the top of the line box to the baseline
    pub ascent: f32,
    /// Height of the line box
    pub line_height: f32,
}

/// Lays out and rasterizes text with a single font face
pub struct TextRenderer {
    font: FontFace,
    rasterizer: GlyphRasterizer,
    /// Keyed by glyph id and the bit pattern of the pixel size
    cache: FxHashMap<(u16, u32), RasterizedGlyph>,
}

impl TextRenderer {
    pub fn new(font: FontFace) -> Self {
        Self {
            font,
            rasterizer: GlyphRasterizer::new(),
            cache: FxHashMap::default(),
        }
    }

    pub fn font(&self) -> &FontFace {
        &self.font
    }

    /// Lay out `text` on one line at `font_size` pixels
    ///
    /// Characters missing from the font fall back to glyph 0 (.notdef).
    /// Newlines are not interpreted.
    pub fn layout_line(&self, text: &str, font_size: f32) -> TextLine {
        let metrics = self.font.metrics();
        let px_per_unit = font_size / metrics.units_per_em as f32;
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen_x = 0.0;

        for c in text.chars() {
            let glyph_id = self.font.glyph_id(c).unwrap_or(0);
            glyphs.push(PositionedGlyph { glyph_id, x: pen_x });
            let advance = self.font.glyph_advance(glyph_id).unwrap_or(0);
            pen_x += advance as f32 * px_per_unit;
        }

        TextLine {
            glyphs,
            width: pen_x,
            ascent: metrics.ascender_px(font_size),
            line_height: metrics.line_height_px(font_size),
        }
    }

    /// Rasterized glyph at `font_size` pixels, cached after the first call
    pub fn glyph(&mut self, glyph_id: u16, font_size: f32) -> Result<&RasterizedGlyph> {
        let key = (glyph_id, font_size.to_bits());
        if !self.cache.contains_key(&key) {
            let glyph = self.rasterizer.rasterize(&self.font, glyph_id, font_size)?;
            self.cache.insert(key, glyph);
        }
        Ok(&self.cache[&key])
    }

    /// Number of cached glyph bitmaps
    pub fn cached_glyphs(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::resolve_font;

    // These need a real font; machines without one skip them.
    fn system_renderer() -> Option<TextRenderer> {
        resolve_font(None).ok().map(TextRenderer::new)
    }

    #[test]
    fn test_layout_advances_monotonically() {
        let Some(renderer) = system_renderer() else {
            return;
        };
        let line = renderer.layout_line("Box 1", 16.0);
        assert_eq!(line.glyphs.len(), 5);
        assert_eq!(line.glyphs[0].x, 0.0);
        assert!(line.glyphs.windows(2).all(|w| w[1].x >= w[0].x));
        assert!(line.width > 0.0);
        assert!(line.ascent > 0.0 && line.ascent <= line.line_height);
    }

    #[test]
    fn test_glyph_cache() {
        let Some(mut renderer) = system_renderer() else {
            return;
        };
        let id = renderer.font().glyph_id('B').unwrap_or(0);
        let width = renderer.glyph(id, 16.0).map(|g| g.width).unwrap_or(0);
        assert!(width > 0);
        renderer.glyph(id, 16.0).ok();
        assert_eq!(renderer.cached_glyphs(), 1);
        renderer.glyph(id, 24.0).ok();
        assert_eq!(renderer.cached_glyphs(), 2);
    }

    #[test]
    fn test_empty_line() {
        let Some(renderer) = system_renderer() else {
            return;
        };
        let line = renderer.layout_line("", 16.0);
        assert!(line.glyphs.is_empty());
        assert_eq!(line.width, 0.0);
    }
}
