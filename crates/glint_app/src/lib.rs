//! Glint Demo Application
//!
//! An 800x600 window with three independent checkboxes and a group of three
//! mutually exclusive radio buttons. Clicks toggle and select; closing the
//! window ends the program.
//!
//! # Example (Headless Frame)
//!
//! ```
//! use glint_app::{DemoScene, RenderLoop};
//! use glint_core::{RecordingContext, Size};
//! use glint_platform::{Event, EventQueue, InputEvent, MouseButton};
//!
//! let mut render_loop = RenderLoop::new(DemoScene::default());
//! let mut events: EventQueue =
//!     [Event::Input(InputEvent::button_pressed(MouseButton::Left, 80.0, 130.0))]
//!         .into_iter()
//!         .collect();
//!
//! let mut ctx = RecordingContext::new(Size::new(800.0, 600.0));
//! render_loop.frame(&mut events, (800, 600), &mut ctx);
//! assert!(render_loop.scene().widgets().checkboxes[0].is_checked());
//! ```
//!
//! # Example (Windowed Application)
//!
//! ```ignore
//! use glint_app::{DemoApp, DemoConfig};
//!
//! fn main() -> glint_app::Result<()> {
//!     let config = DemoConfig::default();
//!     let font = config.load_font()?;
//!     DemoApp::run(config, font)
//! }
//! ```

mod config;
mod error;
pub mod render_loop;
pub mod scene;

#[cfg(feature = "windowed")]
pub mod windowed;

#[cfg(test)]
mod tests;

pub use config::DemoConfig;
pub use error::{AppError, Result};
pub use render_loop::RenderLoop;
pub use scene::{Decoration, DemoScene};

#[cfg(feature = "windowed")]
pub use windowed::DemoApp;

// Re-export platform types for windowed applications
pub use glint_platform::WindowConfig;
