//! Glint Core
//!
//! Foundational types shared by the Glint crates:
//!
//! - **Geometry**: points, sizes, rectangles, circles and hit-test helpers
//! - **View**: the fixed logical coordinate space a scene is authored in
//! - **Draw Context**: the drawing API widgets render themselves through

pub mod draw;
pub mod geometry;

pub use draw::{DrawCommand, DrawContext, RecordingContext, Stroke, TextStyle};
pub use geometry::{Circle, Color, Point, Rect, Size, View};
