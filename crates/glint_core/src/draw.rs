//! Draw Context - the rendering surface seen by widgets
//!
//! Widgets never talk to a GPU or a pixel buffer directly. They describe
//! themselves through [`DrawContext`], which is implemented by the CPU
//! canvas in `glint_paint` and by [`RecordingContext`] for tests.
//!
//! # Example
//!
//! ```
//! use glint_core::{Color, DrawContext, Rect, RecordingContext, Size, Stroke};
//!
//! let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
//! ctx.clear(Color::WHITE);
//! ctx.fill_rect(Rect::new(70.0, 120.0, 20.0, 20.0), Color::WHITE);
//! ctx.stroke_rect(Rect::new(69.0, 119.0, 22.0, 22.0), &Stroke::new(2.0), Color::BLACK);
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use crate::geometry::{Circle, Color, Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Styles
// ─────────────────────────────────────────────────────────────────────────────

/// Stroke style configuration
///
/// Strokes are centered on the outline of the shape they are applied to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
}

impl Stroke {
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Text styling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size (character height) in logical units
    pub size: f32,
    /// Fill color of the glyphs
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color) -> Self {
        Self { size, color }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(16.0, Color::BLACK)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing operations available to widgets and scene decorations
///
/// Coordinates are logical view units. Implementations must treat every
/// operation as infallible; a broken backing surface is reported when the
/// frame is presented, not while drawing.
pub trait DrawContext {
    /// Fill the whole frame with a color
    fn clear(&mut self, color: Color);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color);

    /// Fill a circle
    fn fill_circle(&mut self, circle: Circle, color: Color);

    /// Stroke the outline of a circle
    fn stroke_circle(&mut self, circle: Circle, stroke: &Stroke, color: Color);

    /// Draw a single line of text with its top-left corner at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Logical size of the frame being drawn
    fn viewport_size(&self) -> Size;
}

/// Draw commands recorded by [`RecordingContext`]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
        color: Color,
    },
    FillCircle {
        circle: Circle,
        color: Color,
    },
    StrokeCircle {
        circle: Circle,
        stroke: Stroke,
        color: Color,
    },
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Text content if this is a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A draw context that records commands instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    viewport: Size,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Text of every recorded text command, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }
}

impl DrawContext for RecordingContext {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
            color,
        });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::FillCircle { circle, color });
    }

    fn stroke_circle(&mut self, circle: Circle, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            circle,
            stroke: *stroke,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: *style,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context_order() {
        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        ctx.clear(Color::WHITE);
        ctx.fill_circle(Circle::new(Point::new(10.0, 10.0), 6.0), Color::BLUE);
        ctx.draw_text("Hi", Point::ZERO, &TextStyle::default());

        let commands = ctx.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], DrawCommand::Clear(Color::WHITE));
        assert!(matches!(commands[1], DrawCommand::FillCircle { .. }));
        assert_eq!(ctx.texts(), vec!["Hi"]);
    }

    #[test]
    fn test_take_commands_empties() {
        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        assert_eq!(ctx.take_commands().len(), 1);
        assert!(ctx.commands().is_empty());
        assert_eq!(ctx.viewport_size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::default().with_size(24.0).with_color(Color::GRAY);
        assert_eq!(style.size, 24.0);
        assert_eq!(style.color, Color::GRAY);
    }
}
