//! Glint Desktop Platform
//!
//! Windowing and pointer input for macOS, Windows, and Linux using winit.
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
//!         ControlFlow::Continue
//!     })
//! }
//! ```

pub mod event_loop;
pub mod input;
pub mod window;

pub use event_loop::DesktopEventLoop;
pub use window::DesktopWindow;

use glint_platform::{PlatformError, WindowConfig};

/// Desktop platform entry point
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Platform name used in logs
    pub fn name(&self) -> &'static str {
        "desktop"
    }

    /// Create an event loop that opens a window with the given configuration
    pub fn create_event_loop(
        &self,
        config: WindowConfig,
    ) -> Result<DesktopEventLoop, PlatformError> {
        DesktopEventLoop::new(config)
    }
}
