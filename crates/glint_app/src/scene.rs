//! The demo scene
//!
//! A fixed layout in logical view units: a title and a horizontal rule
//! across the top, checkboxes on the left, a vertical rule, a radio group
//! on the right, and a status line at the bottom.

use glint_core::{Color, DrawContext, Point, Rect, TextStyle, View};
use glint_widgets::radio::RADIUS;
use glint_widgets::{Checkbox, RadioButton, RadioGroup, WidgetSet};

pub const TITLE: &str = "Practice GUI";
pub const TITLE_ORIGIN: Point = Point::new(250.0, 20.0);
pub const TITLE_SIZE: f32 = 24.0;

pub const HORIZONTAL_RULE: Rect = Rect::new(50.0, 60.0, 700.0, 2.0);
pub const VERTICAL_RULE: Rect = Rect::new(400.0, 80.0, 2.0, 400.0);

pub const HEADER_SIZE: f32 = 18.0;
pub const CHECKBOX_HEADER: &str = "Checkboxes:";
pub const CHECKBOX_HEADER_ORIGIN: Point = Point::new(50.0, 80.0);
pub const RADIO_HEADER: &str = "Choose One:";
pub const RADIO_HEADER_ORIGIN: Point = Point::new(430.0, 80.0);

/// Top-left of the first checkbox
pub const CHECKBOX_ORIGIN: Point = Point::new(70.0, 120.0);
/// Top-left of the first radio indicator's bounding box
pub const RADIO_ORIGIN: Point = Point::new(450.0, 120.0);
/// Vertical distance between consecutive controls
pub const ROW_SPACING: f32 = 40.0;
pub const CONTROL_COUNT: usize = 3;

pub const STATUS: &str = "Click elements to interact";
pub const STATUS_ORIGIN: Point = Point::new(50.0, 500.0);
pub const STATUS_SIZE: f32 = 14.0;

/// Non-interactive scene element
#[derive(Clone, Debug, PartialEq)]
pub enum Decoration {
    Text {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    Rule {
        rect: Rect,
        color: Color,
    },
}

impl Decoration {
    pub fn text(text: impl Into<String>, origin: Point, style: TextStyle) -> Self {
        Decoration::Text {
            text: text.into(),
            origin,
            style,
        }
    }

    pub fn rule(rect: Rect) -> Self {
        Decoration::Rule {
            rect,
            color: Color::BLACK,
        }
    }

    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        match self {
            Decoration::Text {
                text,
                origin,
                style,
            } => ctx.draw_text(text, *origin, style),
            Decoration::Rule { rect, color } => ctx.fill_rect(*rect, *color),
        }
    }
}

/// Decorations and widgets of the demo window
#[derive(Clone, Debug, PartialEq)]
pub struct DemoScene {
    view: View,
    /// Drawn before the widgets
    backdrop: Vec<Decoration>,
    widgets: WidgetSet,
    /// Drawn after the widgets
    footer: Vec<Decoration>,
}

impl DemoScene {
    /// Build the demo layout in `view`
    pub fn new(view: View) -> Self {
        let header = TextStyle::new(HEADER_SIZE, Color::BLACK);

        let backdrop = vec![
            Decoration::text(TITLE, TITLE_ORIGIN, TextStyle::new(TITLE_SIZE, Color::BLACK)),
            Decoration::rule(HORIZONTAL_RULE),
            Decoration::rule(VERTICAL_RULE),
            Decoration::text(CHECKBOX_HEADER, CHECKBOX_HEADER_ORIGIN, header),
            Decoration::text(RADIO_HEADER, RADIO_HEADER_ORIGIN, header),
        ];

        let checkboxes = (0..CONTROL_COUNT)
            .map(|i| {
                Checkbox::new(
                    CHECKBOX_ORIGIN.offset(0.0, ROW_SPACING * i as f32),
                    format!("Box {}", i + 1),
                )
            })
            .collect();

        // Radio buttons are anchored at their center
        let radios = (0..CONTROL_COUNT)
            .map(|i| {
                RadioButton::new(
                    RADIO_ORIGIN.offset(RADIUS, RADIUS + ROW_SPACING * i as f32),
                    format!("Option {}", i + 1),
                )
            })
            .collect();

        let footer = vec![Decoration::text(
            STATUS,
            STATUS_ORIGIN,
            TextStyle::new(STATUS_SIZE, Color::from_rgb8(100, 100, 100)),
        )];

        Self {
            view,
            backdrop,
            widgets: WidgetSet {
                checkboxes,
                radio_groups: vec![RadioGroup::new(radios)],
            },
            footer,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn widgets(&self) -> &WidgetSet {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut WidgetSet {
        &mut self.widgets
    }

    /// Draw everything except the background
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        for decoration in &self.backdrop {
            decoration.draw(ctx);
        }
        self.widgets.draw(ctx);
        for decoration in &self.footer {
            decoration.draw(ctx);
        }
    }
}

impl Default for DemoScene {
    fn default() -> Self {
        Self::new(View::default())
    }
}
