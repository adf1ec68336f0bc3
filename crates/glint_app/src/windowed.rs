//! Desktop window runner
//!
//! Opens the window, creates the GPU presenter once the window exists and
//! runs a [`RenderLoop`] on every redraw. Each frame is rasterized on the
//! CPU at the window's scale factor and stretched over the surface.
//!
//! # Example
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

use std::cell::RefCell;
use std::rc::Rc;

use glint_gpu::{FramePresenter, PresentOutcome};
use glint_paint::PixmapCanvas;
use glint_platform::{ControlFlow, EventLoop, EventQueue, Window};
use glint_platform_desktop::{DesktopPlatform, DesktopWindow};
use glint_text::{FontFace, TextRenderer};

use crate::config::DemoConfig;
use crate::error::{AppError, Result};
use crate::render_loop::RenderLoop;
use crate::scene::DemoScene;

/// Per-window state owned by the event loop handler
struct WindowState {
    render_loop: RenderLoop,
    canvas: PixmapCanvas,
    presenter: Option<FramePresenter>,
    surface_size: (u32, u32),
}

impl WindowState {
    fn frame(&mut self, events: &mut EventQueue, window: &DesktopWindow) -> Result<ControlFlow> {
        let size = window.size();

        match self.presenter {
            Some(ref mut presenter) => {
                if size != self.surface_size {
                    presenter.resize(size.0, size.1);
                }
            }
            None => {
                let presenter = pollster::block_on(FramePresenter::new(
                    window.winit_window_arc(),
                    size.0,
                    size.1,
                ))?;
                self.presenter = Some(presenter);
            }
        }
        self.surface_size = size;

        self.canvas.set_scale(window.scale_factor() as f32)?;

        if self.render_loop.frame(events, size, &mut self.canvas) == ControlFlow::Exit {
            return Ok(ControlFlow::Exit);
        }

        // Minimized: nothing to present to
        if size.0 == 0 || size.1 == 0 {
            return Ok(ControlFlow::Continue);
        }

        if let Some(ref mut presenter) = self.presenter {
            let outcome = presenter.present(
                self.canvas.pixels(),
                self.canvas.width(),
                self.canvas.height(),
            )?;
            if outcome == PresentOutcome::Skipped {
                tracing::trace!("Frame skipped");
            }
        }

        Ok(ControlFlow::Continue)
    }
}

/// The demo as a desktop application
pub struct DemoApp;

impl DemoApp {
    /// Open the demo window and run until it is closed
    ///
    /// Returns an error if the window cannot be created or a frame cannot
    /// be presented.
    pub fn run(config: DemoConfig, font: FontFace) -> Result<()> {
        let platform = DesktopPlatform::new();
        tracing::info!(
            "Starting '{}' on the {} platform",
            config.window.title,
            platform.name()
        );

        let event_loop = platform.create_event_loop(config.window.clone())?;

        let mut state = WindowState {
            render_loop: RenderLoop::new(DemoScene::new(config.view)),
            canvas: PixmapCanvas::new(config.view, 1.0)?.with_text(TextRenderer::new(font)),
            presenter: None,
            surface_size: (0, 0),
        };

        let fatal: Rc<RefCell<Option<AppError>>> = Rc::new(RefCell::new(None));
        let fatal_in_loop = Rc::clone(&fatal);

        event_loop.run(move |events, window| match state.frame(events, window) {
            Ok(flow) => flow,
            Err(e) => {
                tracing::error!("Stopping after fatal error: {}", e);
                *fatal_in_loop.borrow_mut() = Some(e);
                ControlFlow::Exit
            }
        })?;

        if let Some(e) = fatal.borrow_mut().take() {
            return Err(e);
        }

        tracing::info!("Window closed");
        Ok(())
    }
}
