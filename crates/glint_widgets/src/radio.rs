//! Radio buttons and mutually exclusive radio groups
//!
//! A [`RadioButton`] cannot select itself. Its flag is written only by the
//! [`RadioGroup`] that owns it, and [`RadioGroup::select`] rewrites every
//! member's flag in one call, so a group never shows two selected members.

use glint_core::{Circle, Color, DrawContext, Point, Rect, Stroke};

use crate::widget::{draw_label, Widget, OUTLINE_WIDTH};

/// Radius of the indicator circle and of the hit region
pub const RADIUS: f32 = 10.0;

/// Radius of the selection dot
pub const INNER_RADIUS: f32 = 6.0;

/// Selection dot color
pub const DOT_COLOR: Color = Color::BLUE;

/// A labeled round indicator anchored at its center
#[derive(Clone, Debug, PartialEq)]
pub struct RadioButton {
    position: Point,
    label: String,
    selected: bool,
}

impl RadioButton {
    /// Create an unselected button centered on `position`
    pub fn new(position: Point, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            selected: false,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        self.position
    }

    fn indicator(&self) -> Circle {
        Circle::new(self.position, RADIUS)
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl Widget for RadioButton {
    fn bounds(&self) -> Rect {
        self.indicator().bounds()
    }

    fn contains_point(&self, point: Point) -> bool {
        self.indicator().contains(point)
    }

    fn draw(&self, ctx: &mut dyn DrawContext) {
        let circle = self.indicator();
        ctx.fill_circle(circle, Color::WHITE);
        ctx.stroke_circle(
            Circle::new(circle.center, RADIUS + OUTLINE_WIDTH / 2.0),
            &Stroke::new(OUTLINE_WIDTH),
            Color::BLACK,
        );

        if self.selected {
            ctx.fill_circle(Circle::new(circle.center, INNER_RADIUS), DOT_COLOR);
        }

        let bounds = circle.bounds();
        draw_label(ctx, &self.label, bounds.x(), bounds.y());
    }
}

/// Ordered radio buttons of which exactly one is selected
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadioGroup {
    buttons: Vec<RadioButton>,
}

impl RadioGroup {
    /// Build a group selecting its first member
    pub fn new(buttons: Vec<RadioButton>) -> Self {
        Self::with_default(buttons, 0)
    }

    /// Build a group selecting member `index`, or the first member when
    /// `index` is out of range
    pub fn with_default(buttons: Vec<RadioButton>, index: usize) -> Self {
        let mut group = Self { buttons };
        let index = if index < group.len() { index } else { 0 };
        group.apply_selection(index);
        group
    }

    /// Select member `index` and deselect every other member
    ///
    /// Returns whether the selection changed. Out-of-range indices leave
    /// the group untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buttons.len() {
            tracing::warn!(
                "Ignoring selection of radio member {} in a group of {}",
                index,
                self.buttons.len()
            );
            return false;
        }
        if self.selected() == Some(index) {
            return false;
        }
        self.apply_selection(index);
        true
    }

    fn apply_selection(&mut self, index: usize) {
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.set_selected(i == index);
        }
    }

    /// Index of the first member whose hit region contains `point`
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.buttons.iter().position(|b| b.contains_point(point))
    }

    pub fn selected(&self) -> Option<usize> {
        self.buttons.iter().position(RadioButton::is_selected)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.buttons.get(index).is_some_and(RadioButton::is_selected)
    }

    pub fn get(&self, index: usize) -> Option<&RadioButton> {
        self.buttons.get(index)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadioButton> {
        self.buttons.iter()
    }

    /// Draw every member in order
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        for button in &self.buttons {
            button.draw(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{DrawCommand, RecordingContext, Size};

    fn options() -> Vec<RadioButton> {
        (0..3)
            .map(|i| {
                RadioButton::new(
                    Point::new(460.0, 130.0 + 40.0 * i as f32),
                    format!("Option {}", i + 1),
                )
            })
            .collect()
    }

    fn flags(group: &RadioGroup) -> Vec<bool> {
        group.iter().map(RadioButton::is_selected).collect()
    }

    #[test]
    fn test_new_selects_first_member() {
        let group = RadioGroup::new(options());
        assert_eq!(flags(&group), vec![true, false, false]);
        assert_eq!(group.selected(), Some(0));
    }

    #[test]
    fn test_with_default() {
        let group = RadioGroup::with_default(options(), 2);
        assert_eq!(flags(&group), vec![false, false, true]);

        let group = RadioGroup::with_default(options(), 7);
        assert_eq!(group.selected(), Some(0));
    }

    #[test]
    fn test_empty_group() {
        let mut group = RadioGroup::new(Vec::new());
        assert!(group.is_empty());
        assert_eq!(group.selected(), None);
        assert!(!group.select(0));
        assert_eq!(group.hit_test(Point::new(460.0, 130.0)), None);
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut group = RadioGroup::new(options());
        assert!(group.select(2));
        assert_eq!(flags(&group), vec![false, false, true]);
        assert!(group.select(1));
        assert_eq!(flags(&group), vec![false, true, false]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut group = RadioGroup::new(options());
        group.select(1);
        let before = group.clone();
        assert!(!group.select(1));
        assert_eq!(group, before);
    }

    #[test]
    fn test_select_from_nothing_selected() {
        let mut group = RadioGroup {
            buttons: options(),
        };
        assert_eq!(group.selected(), None);
        assert!(group.select(1));
        assert_eq!(flags(&group), vec![false, true, false]);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut group = RadioGroup::new(options());
        assert!(!group.select(3));
        assert_eq!(flags(&group), vec![true, false, false]);
    }

    #[test]
    fn test_exactly_one_selected_after_any_sequence() {
        let mut group = RadioGroup::new(options());
        for index in [2, 0, 0, 5, 1, 2, 2, 1, 9, 0] {
            group.select(index);
            assert_eq!(group.iter().filter(|b| b.is_selected()).count(), 1);
        }
    }

    #[test]
    fn test_contains_point_uses_radius() {
        let button = RadioButton::new(Point::new(460.0, 130.0), "Option 1");
        assert!(button.contains_point(button.position()));
        assert!(button.contains_point(Point::new(470.0, 130.0)));
        assert!(button.contains_point(Point::new(466.0, 138.0)));
        // Corner of the bounding box is outside the circle
        assert!(!button.contains_point(Point::new(451.0, 121.0)));
        assert!(!button.contains_point(Point::new(470.5, 130.0)));
    }

    #[test]
    fn test_hit_test() {
        let group = RadioGroup::new(options());
        assert_eq!(group.hit_test(Point::new(460.0, 210.0)), Some(2));
        assert_eq!(group.hit_test(Point::new(460.0, 150.0)), None);
        assert_eq!(group.hit_test(Point::new(500.0, 130.0)), None);
    }

    #[test]
    fn test_draw_selected_member() {
        let group = RadioGroup::new(options());
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
        group.get(0).unwrap().draw(&mut ctx);

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::FillCircle {
                    circle: Circle::new(Point::new(460.0, 130.0), 10.0),
                    color: Color::WHITE,
                },
                DrawCommand::StrokeCircle {
                    circle: Circle::new(Point::new(460.0, 130.0), 11.0),
                    stroke: Stroke::new(2.0),
                    color: Color::BLACK,
                },
                DrawCommand::FillCircle {
                    circle: Circle::new(Point::new(460.0, 130.0), 6.0),
                    color: Color::BLUE,
                },
                DrawCommand::Text {
                    text: "Option 1".to_string(),
                    origin: Point::new(480.0, 120.0),
                    style: crate::LABEL_STYLE,
                },
            ]
        );
    }

    #[test]
    fn test_draw_group_draws_one_dot() {
        let group = RadioGroup::new(options());
        let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
        group.draw(&mut ctx);

        let dots = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { color, .. } if *color == Color::BLUE))
            .count();
        assert_eq!(dots, 1);
        assert_eq!(ctx.texts(), vec!["Option 1", "Option 2", "Option 3"]);
    }
}
