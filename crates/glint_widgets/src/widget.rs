//! Core widget trait and shared styling

use glint_core::{Color, DrawContext, Point, Rect, TextStyle};

/// Width of the black outline drawn around every control
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Distance from a control's left edge to the left edge of its label
pub const LABEL_OFFSET: f32 = 30.0;

/// Label text style shared by checkboxes and radio buttons
pub const LABEL_STYLE: TextStyle = TextStyle::new(16.0, Color::BLACK);

/// A self-drawing, clickable control
pub trait Widget {
    /// Bounding box of the control's indicator in view coordinates
    fn bounds(&self) -> Rect;

    /// Whether `point` (view coordinates) lies in the hit region
    fn contains_point(&self, point: Point) -> bool;

    /// Draw the control and its label
    fn draw(&self, ctx: &mut dyn DrawContext);
}

/// Draw a label `LABEL_OFFSET` units right of `left`, top-aligned at `top`
pub(crate) fn draw_label(ctx: &mut dyn DrawContext, label: &str, left: f32, top: f32) {
    ctx.draw_text(label, Point::new(left + LABEL_OFFSET, top), &LABEL_STYLE);
}
