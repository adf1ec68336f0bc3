//! Glyph rasterization using swash
//!
//! Converts glyph outlines to 8-bit coverage masks.

use crate::font::FontFace;
use crate::{Result, TextError};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

/// Rasterized glyph bitmap with placement
#[derive(Debug, Clone, Default)]
pub struct RasterizedGlyph {
    /// Coverage mask, one byte per pixel, row-major
    pub bitmap: Vec<u8>,
    /// Bitmap width in pixels
    pub width: u32,
    /// Bitmap height in pixels
    pub height: u32,
    /// Horizontal offset from the pen position to the left edge
    pub bearing_x: i32,
    /// Vertical offset from the baseline up to the top edge
    pub bearing_y: i32,
}

impl RasterizedGlyph {
    /// Whether the glyph has no visible pixels (e.g. space)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Glyph rasterizer using swash
pub struct GlyphRasterizer {
    scale_context: ScaleContext,
}

impl GlyphRasterizer {
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
        }
    }

    /// Rasterize a glyph at the given pixel size
    pub fn rasterize(
        &mut self,
        font: &FontFace,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<RasterizedGlyph> {
        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or(TextError::InvalidFontData)?;

        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font_size)
            .build();

        // Plain outlines only, so the image is always a one-byte coverage mask
        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        match render.render(&mut scaler, glyph_id) {
            Some(img) => Ok(RasterizedGlyph {
                bitmap: img.data,
                width: img.placement.width,
                height: img.placement.height,
                bearing_x: img.placement.left,
                bearing_y: img.placement.top,
            }),
            // Outline-less glyph such as space
            None => Ok(RasterizedGlyph::default()),
        }
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
