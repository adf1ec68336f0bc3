//! Event loop, platform events and the per-frame event queue

use std::collections::VecDeque;

use crate::error::PlatformError;
use crate::input::InputEvent;
use crate::window::Window;

/// Event loop abstraction
///
/// Platform event loops collect events into an [`EventQueue`] as they
/// arrive and call the frame handler once per frame. The handler drains
/// the queue, updates state, draws, and decides whether to keep running.
pub trait EventLoop {
    /// The window type for this event loop
    type Window: Window;

    /// Run the event loop
    ///
    /// This method blocks until the handler returns [`ControlFlow::Exit`]
    /// or the platform shuts the loop down.
    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(&mut EventQueue, &Self::Window) -> ControlFlow + 'static;
}

/// Non-blocking source of pending events
pub trait EventSource {
    /// Take the next pending event, or `None` when nothing is pending
    fn poll_event(&mut self) -> Option<Event>;
}

/// Control flow after handling a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window-related event
    Window(WindowEvent),
    /// Input event
    Input(InputEvent),
    /// Application lifecycle event
    Lifecycle(LifecycleEvent),
}

/// Window events
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Window was resized
    Resized {
        /// New width in physical pixels
        width: u32,
        /// New height in physical pixels
        height: u32,
    },
    /// Window close was requested (e.g., close button clicked)
    CloseRequested,
    /// Window gained or lost focus
    Focused(bool),
    /// Display scale factor changed
    ScaleFactorChanged {
        /// New scale factor
        scale_factor: f64,
    },
}

/// Application lifecycle events
#[derive(Clone, Debug, PartialEq)]
pub enum LifecycleEvent {
    /// Application resumed; the window exists from here on
    Resumed,
    /// Application suspended
    Suspended,
}

/// FIFO of events received since the last frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for EventQueue {
    fn poll_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
