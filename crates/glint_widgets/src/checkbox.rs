//! Checkbox widget
//!
//! A square box with a label to its right. Clicking anywhere inside the box
//! flips the checked state; a green mark is drawn while checked. Checkboxes
//! are independent of each other.

use glint_core::{Color, DrawContext, Point, Rect, Size, Stroke};

use crate::widget::{draw_label, Widget, OUTLINE_WIDTH};

/// Side length of the box
pub const BOX_SIZE: f32 = 20.0;

/// Inset of the check mark from the box edges
pub const MARK_INSET: f32 = 4.0;

/// Side length of the check mark
pub const MARK_SIZE: f32 = 12.0;

/// Check mark color
pub const MARK_COLOR: Color = Color::GREEN;

/// A labeled boolean toggle anchored at its top-left corner
#[derive(Clone, Debug, PartialEq)]
pub struct Checkbox {
    position: Point,
    label: String,
    checked: bool,
}

impl Checkbox {
    /// Create an unchecked checkbox whose box has its top-left at `position`
    pub fn new(position: Point, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            checked: false,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flip the checked state
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Widget for Checkbox {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Size::new(BOX_SIZE, BOX_SIZE))
    }

    fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        let bounds = self.bounds();
        ctx.fill_rect(bounds, Color::WHITE);

        // Stroke centered one unit out so the whole outline sits outside the box
        let half = OUTLINE_WIDTH / 2.0;
        ctx.stroke_rect(
            bounds.inset(-half, -half),
            &Stroke::new(OUTLINE_WIDTH),
            Color::BLACK,
        );

        if self.checked {
            ctx.fill_rect(bounds.inset(MARK_INSET, MARK_INSET), MARK_COLOR);
        }

        draw_label(ctx, &self.label, bounds.x(), bounds.y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{DrawCommand, RecordingContext};

    fn checkbox() -> Checkbox {
        Checkbox::new(Point::new(70.0, 120.0), "Box 1")
    }

    #[test]
    fn test_new_is_unchecked() {
        let cb = checkbox();
        assert!(!cb.is_checked());
        assert_eq!(cb.label(), "Box 1");
        assert_eq!(cb.position(), Point::new(70.0, 120.0));
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut cb = checkbox();
        cb.toggle();
        assert!(cb.is_checked());
        cb.toggle();
        assert!(!cb.is_checked());
        assert_eq!(cb, checkbox());
    }

    #[test]
    fn test_contains_point_closed_square() {
        let cb = checkbox();
        assert!(cb.contains_point(cb.position()));
        assert!(cb.contains_point(Point::new(80.0, 130.0)));
        assert!(cb.contains_point(Point::new(90.0, 140.0)));
        assert!(!cb.contains_point(Point::new(90.1, 130.0)));
        assert!(!cb.contains_point(Point::new(69.9, 130.0)));
        assert!(!cb.contains_point(Point::new(80.0, 140.5)));
    }

    #[test]
    fn test_label_is_not_clickable() {
        let cb = checkbox();
        assert!(!cb.contains_point(Point::new(110.0, 125.0)));
    }

    #[test]
    fn test_draw_unchecked() {
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
        checkbox().draw(&mut ctx);

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::FillRect {
                    rect: Rect::new(70.0, 120.0, 20.0, 20.0),
                    color: Color::WHITE,
                },
                DrawCommand::StrokeRect {
                    rect: Rect::new(69.0, 119.0, 22.0, 22.0),
                    stroke: Stroke::new(2.0),
                    color: Color::BLACK,
                },
                DrawCommand::Text {
                    text: "Box 1".to_string(),
                    origin: Point::new(100.0, 120.0),
                    style: crate::LABEL_STYLE,
                },
            ]
        );
    }

    #[test]
    fn test_draw_checked_adds_mark() {
        let mut cb = checkbox();
        cb.toggle();
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
        cb.draw(&mut ctx);

        assert_eq!(ctx.commands().len(), 4);
        assert_eq!(
            ctx.commands()[2],
            DrawCommand::FillRect {
                rect: Rect::new(74.0, 124.0, MARK_SIZE, MARK_SIZE),
                color: Color::GREEN,
            }
        );
    }
}
