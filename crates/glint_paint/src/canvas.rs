//! tiny-skia implementation of the draw context

use crate::{PaintError, Result};
use glint_core::{Circle, Color, DrawContext, Point, Rect, Size, Stroke, TextStyle, View};
use glint_text::{RasterizedGlyph, TextRenderer};
use tiny_skia::{
    FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8, Transform,
};

/// CPU canvas rendering a [`View`] at a given scale factor
pub struct PixmapCanvas {
    pixmap: Pixmap,
    view: View,
    scale: f32,
    text: Option<TextRenderer>,
}

impl PixmapCanvas {
    /// Create a canvas for `view` rendered at `scale` physical pixels per unit
    pub fn new(view: View, scale: f32) -> Result<Self> {
        let pixmap = create_pixmap(view, scale)?;
        Ok(Self {
            pixmap,
            view,
            scale,
            text: None,
        })
    }

    /// Attach the text renderer used by [`DrawContext::draw_text`]
    pub fn with_text(mut self, text: TextRenderer) -> Self {
        self.text = Some(text);
        self
    }

    /// Recreate the backing pixmap if the scale factor changed
    pub fn set_scale(&mut self, scale: f32) -> Result<()> {
        if (scale - self.scale).abs() > f32::EPSILON {
            self.pixmap = create_pixmap(self.view, scale)?;
            self.scale = scale;
            tracing::debug!(
                "Canvas resized to {}x{} (scale {})",
                self.pixmap.width(),
                self.pixmap.height(),
                scale
            );
        }
        Ok(())
    }

    /// RGBA8 pixel data, row-major, premultiplied alpha
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// RGBA value of one physical pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }
}

fn create_pixmap(view: View, scale: f32) -> Result<Pixmap> {
    let (width, height) = view.pixel_size(scale);
    Pixmap::new(width, height).ok_or(PaintError::InvalidSize { width, height })
}

fn paint_for(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.x(), rect.y(), rect.width(), rect.height())
}

/// Turn a coverage mask into a premultiplied pixmap of `color`
fn glyph_pixmap(glyph: &RasterizedGlyph, color: Color) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(glyph.width, glyph.height)?;
    let [r, g, b, a] = color.to_rgba8();
    for (dst, &coverage) in pixmap.pixels_mut().iter_mut().zip(&glyph.bitmap) {
        let alpha = (coverage as u16 * a as u16 / 255) as u8;
        let premul = |c: u8| (c as u16 * alpha as u16 / 255) as u8;
        if let Some(px) = PremultipliedColorU8::from_rgba(premul(r), premul(g), premul(b), alpha)
        {
            *dst = px;
        }
    }
    Some(pixmap)
}

impl DrawContext for PixmapCanvas {
    fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(rect) = skia_rect(rect) {
            let transform = self.transform();
            self.pixmap
                .fill_rect(rect, &paint_for(color), transform, None);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color) {
        if let Some(rect) = skia_rect(rect) {
            let path = PathBuilder::from_rect(rect);
            let stroke = tiny_skia::Stroke {
                width: stroke.width,
                ..Default::default()
            };
            let transform = self.transform();
            self.pixmap
                .stroke_path(&path, &paint_for(color), &stroke, transform, None);
        }
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        if let Some(path) = PathBuilder::from_circle(circle.center.x, circle.center.y, circle.radius)
        {
            let transform = self.transform();
            self.pixmap.fill_path(
                &path,
                &paint_for(color),
                FillRule::Winding,
                transform,
                None,
            );
        }
    }

    fn stroke_circle(&mut self, circle: Circle, stroke: &Stroke, color: Color) {
        if let Some(path) = PathBuilder::from_circle(circle.center.x, circle.center.y, circle.radius)
        {
            let stroke = tiny_skia::Stroke {
                width: stroke.width,
                ..Default::default()
            };
            let transform = self.transform();
            self.pixmap
                .stroke_path(&path, &paint_for(color), &stroke, transform, None);
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let Some(renderer) = self.text.as_mut() else {
            tracing::trace!("No text renderer attached, skipping '{}'", text);
            return;
        };

        // Glyphs are rasterized at physical size and placed on whole pixels
        let font_size = style.size * self.scale;
        let line = renderer.layout_line(text, font_size);
        let pen_x = origin.x * self.scale;
        let baseline = (origin.y * self.scale + line.ascent).round() as i32;

        for positioned in &line.glyphs {
            let glyph = match renderer.glyph(positioned.glyph_id, font_size) {
                Ok(glyph) => glyph,
                Err(e) => {
                    tracing::warn!("Failed to rasterize glyph {}: {}", positioned.glyph_id, e);
                    continue;
                }
            };
            if glyph.is_empty() {
                continue;
            }
            let Some(src) = glyph_pixmap(glyph, style.color) else {
                continue;
            };
            let x = (pen_x + positioned.x).round() as i32 + glyph.bearing_x;
            let y = baseline - glyph.bearing_y;
            self.pixmap.draw_pixmap(
                x,
                y,
                src.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    fn viewport_size(&self) -> Size {
        self.view.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_canvas_size_follows_scale() {
        let canvas = PixmapCanvas::new(View::default(), 2.0).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1600, 1200));
        assert_eq!(canvas.pixels().len(), 1600 * 1200 * 4);
    }

    #[test]
    fn test_oversized_canvas_fails() {
        let result = PixmapCanvas::new(View::new(1.0e9, 1.0e9), 1.0);
        assert!(matches!(result, Err(PaintError::InvalidSize { .. })));
    }

    #[test]
    fn test_clear_and_fill_rect() {
        let mut canvas = PixmapCanvas::new(View::new(100.0, 100.0), 1.0).unwrap();
        canvas.clear(Color::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));

        canvas.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), Color::GREEN);
        assert_eq!(canvas.pixel(20, 20), Some([0, 255, 0, 255]));
        assert_eq!(canvas.pixel(5, 5), Some(WHITE));
    }

    #[test]
    fn test_fill_rect_scaled() {
        let mut canvas = PixmapCanvas::new(View::new(100.0, 100.0), 2.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.fill_rect(Rect::new(10.0, 10.0, 10.0, 10.0), Color::BLACK);
        // Logical (15, 15) lands on physical (30, 30)
        assert_eq!(canvas.pixel(30, 30), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(15, 15), Some(WHITE));
    }

    #[test]
    fn test_fill_circle_leaves_corners() {
        let mut canvas = PixmapCanvas::new(View::new(40.0, 40.0), 1.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.fill_circle(Circle::new(Point::new(20.0, 20.0), 10.0), Color::BLUE);
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(11, 11), Some(WHITE));
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = PixmapCanvas::new(View::new(40.0, 40.0), 1.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.stroke_rect(Rect::new(9.0, 9.0, 22.0, 22.0), &Stroke::new(2.0), Color::BLACK);
        assert_eq!(canvas.pixel(20, 20), Some(WHITE));
        assert_eq!(canvas.pixel(9, 20), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_text_without_renderer_is_noop() {
        let mut canvas = PixmapCanvas::new(View::new(40.0, 40.0), 1.0).unwrap();
        canvas.clear(Color::WHITE);
        canvas.draw_text("Box 1", Point::new(0.0, 0.0), &TextStyle::default());
        assert!(canvas.pixels().chunks(4).all(|p| p == WHITE));
    }

    #[test]
    fn test_set_scale_recreates_pixmap() {
        let mut canvas = PixmapCanvas::new(View::new(10.0, 10.0), 1.0).unwrap();
        canvas.set_scale(3.0).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (30, 30));
        assert_eq!(canvas.scale(), 3.0);
    }
}
