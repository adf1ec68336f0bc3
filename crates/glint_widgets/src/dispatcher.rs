//! Pointer click routing
//!
//! The dispatcher turns platform events into widget state changes. It is a
//! two-state machine: `Idle` between events and `ProcessingClick` while a
//! left-button press is being applied. The transition back to `Idle`
//! happens before control returns to the caller.

use glint_core::{DrawContext, Point, View};
use glint_platform::{ControlFlow, Event, InputEvent, MouseButton, MouseEvent, WindowEvent};
use smallvec::SmallVec;

use crate::checkbox::Checkbox;
use crate::radio::RadioGroup;
use crate::widget::Widget;

/// The interactive widgets of a scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetSet {
    pub checkboxes: Vec<Checkbox>,
    pub radio_groups: Vec<RadioGroup>,
}

impl WidgetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw all checkboxes, then all radio groups
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        for checkbox in &self.checkboxes {
            checkbox.draw(ctx);
        }
        for group in &self.radio_groups {
            group.draw(ctx);
        }
    }
}

/// Dispatcher state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchState {
    #[default]
    Idle,
    ProcessingClick,
}

/// Widgets affected by one click
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Indices of the checkboxes that were toggled
    pub toggled: SmallVec<[usize; 4]>,
    /// `(group, member)` pairs passed to [`RadioGroup::select`]
    pub selected: SmallVec<[(usize, usize); 2]>,
}

impl ClickOutcome {
    /// Whether the click landed outside every hit region
    pub fn is_empty(&self) -> bool {
        self.toggled.is_empty() && self.selected.is_empty()
    }
}

/// Routes platform events to widgets
#[derive(Debug, Default)]
pub struct InputDispatcher {
    state: DispatchState,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Handle one platform event
    ///
    /// Left-button presses are mapped from physical pixels of a surface of
    /// `surface_size` into `view` coordinates and dispatched. A close
    /// request returns [`ControlFlow::Exit`]. Every other event leaves the
    /// widgets untouched.
    pub fn handle_event(
        &mut self,
        event: &Event,
        widgets: &mut WidgetSet,
        view: &View,
        surface_size: (u32, u32),
    ) -> ControlFlow {
        match event {
            Event::Window(WindowEvent::CloseRequested) => {
                tracing::debug!("Close requested");
                ControlFlow::Exit
            }
            Event::Input(InputEvent::Mouse(MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                x,
                y,
            })) => {
                let (width, height) = surface_size;
                let point = view.map_pixel_to_coords(Point::new(*x, *y), width, height);
                self.dispatch_click(widgets, point);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    /// Apply a click at `point` (view coordinates)
    ///
    /// Every checkbox containing the point toggles. In every radio group
    /// the first member containing the point is selected.
    pub fn dispatch_click(&mut self, widgets: &mut WidgetSet, point: Point) -> ClickOutcome {
        self.state = DispatchState::ProcessingClick;
        let mut outcome = ClickOutcome::default();

        for (index, checkbox) in widgets.checkboxes.iter_mut().enumerate() {
            if checkbox.contains_point(point) {
                checkbox.toggle();
                outcome.toggled.push(index);
            }
        }

        for (group_index, group) in widgets.radio_groups.iter_mut().enumerate() {
            if let Some(member) = group.hit_test(point) {
                group.select(member);
                outcome.selected.push((group_index, member));
            }
        }

        self.state = DispatchState::Idle;

        if outcome.is_empty() {
            tracing::trace!("Click at ({}, {}) hit nothing", point.x, point.y);
        } else {
            tracing::debug!(
                "Click at ({}, {}): toggled {:?}, selected {:?}",
                point.x,
                point.y,
                outcome.toggled,
                outcome.selected
            );
        }
        outcome
    }
}
