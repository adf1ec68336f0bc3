//! Glint Platform Abstraction Layer
//!
//! Platform-agnostic traits and types for windowing, pointer input and
//! the per-frame event queue.
//!
//! # Architecture
//!
//! - [`Window`] - Window size, scale factor and redraw requests
//! - [`EventLoop`] - Runs the platform loop and calls a frame handler
//! - [`EventSource`] - Non-blocking `poll_event`, implemented by [`EventQueue`]
//!
//! The desktop implementation lives in `glint_platform_desktop`.
//!
//! # Example
//!
//! ```ignore
//! use glint_platform::prelude::*;
//! use glint_platform_desktop::DesktopPlatform;
//!
//! fn main() -> Result<()> {
//!     let event_loop = DesktopPlatform::new().create_event_loop(WindowConfig::default())?;
//!
//!     event_loop.run(|events, _window| {
//!         while let Some(event) = events.poll_event() {
//!             if event == Event::Window(WindowEvent::CloseRequested) {
//!                 return ControlFlow::Exit;
//!             }
//!         }
//!         // Draw and present the frame here
//!         ControlFlow::Continue
//!     })
//! }
//! ```

mod error;
mod event;
mod input;
mod window;

pub use error::{PlatformError, Result};
pub use event::{
    ControlFlow, Event, EventLoop, EventQueue, EventSource, LifecycleEvent, WindowEvent,
};
pub use input::{InputEvent, MouseButton, MouseEvent};
pub use window::{Window, WindowConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{
        ControlFlow, Event, EventLoop, EventQueue, EventSource, LifecycleEvent, WindowEvent,
    };
    pub use crate::input::{InputEvent, MouseButton, MouseEvent};
    pub use crate::window::{Window, WindowConfig};
}
