//! Glint Widget Library
//!
//! Immediate, self-drawing controls for the demo scene.
//!
//! # Architecture
//!
//! - [`Widget`]: bounds, hit testing and drawing through a
//!   [`DrawContext`](glint_core::DrawContext)
//! - [`Checkbox`]: an independent boolean toggle
//! - [`RadioGroup`]: an ordered set of [`RadioButton`]s with exactly one
//!   member selected
//! - [`InputDispatcher`]: routes pointer presses from the platform event
//!   stream to the widgets of a [`WidgetSet`]
//!
//! # Example
//!
//! ```
//! use glint_core::Point;
//! use glint_widgets::prelude::*;
//!
//! let mut widgets = WidgetSet::new();
//! widgets.checkboxes.push(Checkbox::new(Point::new(70.0, 120.0), "Box 1"));
//! widgets.radio_groups.push(RadioGroup::new(vec![
//!     RadioButton::new(Point::new(460.0, 130.0), "Option 1"),
//!     RadioButton::new(Point::new(460.0, 170.0), "Option 2"),
//! ]));
//!
//! let mut dispatcher = InputDispatcher::new();
//! let outcome = dispatcher.dispatch_click(&mut widgets, Point::new(462.0, 172.0));
//! assert_eq!(outcome.selected.as_slice(), &[(0, 1)]);
//! assert_eq!(widgets.radio_groups[0].selected(), Some(1));
//! ```

pub mod checkbox;
pub mod dispatcher;
pub mod radio;
pub mod widget;

pub use checkbox::Checkbox;
pub use dispatcher::{ClickOutcome, DispatchState, InputDispatcher, WidgetSet};
pub use radio::{RadioButton, RadioGroup};
pub use widget::{Widget, LABEL_OFFSET, LABEL_STYLE, OUTLINE_WIDTH};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checkbox::Checkbox;
    pub use crate::dispatcher::{ClickOutcome, InputDispatcher, WidgetSet};
    pub use crate::radio::{RadioButton, RadioGroup};
    pub use crate::widget::Widget;
}
