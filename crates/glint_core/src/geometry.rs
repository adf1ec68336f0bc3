//! Geometry and color types shared by every Glint crate
//!
//! All scene coordinates are logical units inside a [`View`]. Physical
//! pixels only appear at the platform boundary and are converted with
//! [`View::map_pixel_to_coords`].

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Squared euclidean distance to another point
    pub fn distance_squared(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Closed containment test: points on the edges are inside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }

    /// Inset the rect by a delta (shrink from all sides)
    ///
    /// Negative deltas grow the rect.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: Size::new(
                (self.size.width - 2.0 * dx).max(0.0),
                (self.size.height - 2.0 * dy).max(0.0),
            ),
        }
    }

    /// Get the union of two rects (smallest rect containing both)
    pub fn union(&self, other: &Rect) -> Self {
        let min_x = self.origin.x.min(other.origin.x);
        let min_y = self.origin.y.min(other.origin.y);
        let max_x = (self.origin.x + self.size.width).max(other.origin.x + other.size.width);
        let max_y = (self.origin.y + self.size.height).max(other.origin.y + other.size.height);
        Rect {
            origin: Point::new(min_x, min_y),
            size: Size::new(max_x - min_x, max_y - min_y),
        }
    }
}

/// Circle described by its center and radius
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Closed containment test: points on the circumference are inside
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Bounding box of the circle
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed logical coordinate space a scene is authored in
///
/// The rendered frame is stretched over the whole window surface, so the
/// logical size never changes when the window is resized or moved to a
/// display with a different scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub size: Size,
}

impl View {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Map a physical pixel of a `surface_width` x `surface_height` surface
    /// into view coordinates
    pub fn map_pixel_to_coords(
        &self,
        pixel: Point,
        surface_width: u32,
        surface_height: u32,
    ) -> Point {
        if surface_width == 0 || surface_height == 0 {
            return Point::ZERO;
        }
        Point::new(
            pixel.x * self.size.width / surface_width as f32,
            pixel.y * self.size.height / surface_height as f32,
        )
    }

    /// Pixel dimensions of a backing buffer rendering this view at `scale`
    pub fn pixel_size(&self, scale: f32) -> (u32, u32) {
        (
            (self.size.width * scale).round().max(1.0) as u32,
            (self.size.height * scale).round().max(1.0) as u32,
        )
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb8(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Convert to 8-bit RGBA channels
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(70.0, 120.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(70.0, 120.0)));
        assert!(rect.contains(Point::new(90.0, 140.0)));
        assert!(rect.contains(Point::new(80.0, 130.0)));
        assert!(!rect.contains(Point::new(69.9, 130.0)));
        assert!(!rect.contains(Point::new(80.0, 140.1)));
    }

    #[test]
    fn test_rect_inset_negative_grows() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0).inset(-1.0, -1.0);
        assert_eq!(rect, Rect::new(9.0, 9.0, 22.0, 22.0));
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Point::new(460.0, 130.0), 10.0);
        assert!(circle.contains(Point::new(460.0, 130.0)));
        assert!(circle.contains(Point::new(470.0, 130.0)));
        // Corner of the bounding box is outside the circle
        assert!(!circle.contains(Point::new(450.0, 120.0)));
        assert_eq!(circle.bounds(), Rect::new(450.0, 120.0, 20.0, 20.0));
    }

    #[test]
    fn test_view_identity_mapping() {
        let view = View::default();
        let p = view.map_pixel_to_coords(Point::new(123.0, 456.0), 800, 600);
        assert_eq!(p, Point::new(123.0, 456.0));
    }

    #[test]
    fn test_view_scaled_mapping() {
        let view = View::default();
        // HiDPI surface at 2x
        let p = view.map_pixel_to_coords(Point::new(160.0, 260.0), 1600, 1200);
        assert_eq!(p, Point::new(80.0, 130.0));
        // Stretched window
        let p = view.map_pixel_to_coords(Point::new(400.0, 300.0), 1600, 600);
        assert_eq!(p, Point::new(200.0, 300.0));
    }

    #[test]
    fn test_view_zero_surface() {
        let view = View::default();
        assert_eq!(view.map_pixel_to_coords(Point::new(5.0, 5.0), 0, 600), Point::ZERO);
    }

    #[test]
    fn test_view_pixel_size() {
        assert_eq!(View::default().pixel_size(1.0), (800, 600));
        assert_eq!(View::default().pixel_size(1.5), (1200, 900));
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(Color::from_rgb8(100, 100, 100).to_rgba8(), [100, 100, 100, 255]);
        assert_eq!(Color::from_hex(0x00FF00), Color::GREEN);
        assert_eq!(Color::WHITE.with_alpha(0.0).to_rgba8(), [255, 255, 255, 0]);
    }
}
