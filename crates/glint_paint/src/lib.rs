//! Glint Paint
//!
//! A [`DrawContext`](glint_core::DrawContext) backed by a tiny-skia pixmap.
//! The scene is drawn in logical view units; the canvas scales everything
//! by the window's scale factor so text and outlines stay crisp on HiDPI
//! displays. The finished RGBA buffer is handed to `glint_gpu` for
//! presentation.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{Color, DrawContext, Rect, View};
//! use glint_paint::PixmapCanvas;
//!
//! let mut canvas = PixmapCanvas::new(View::default(), 2.0)?.with_text(text_renderer);
//! canvas.clear(Color::WHITE);
//! canvas.fill_rect(Rect::new(70.0, 120.0, 20.0, 20.0), Color::GREEN);
//! presenter.present(canvas.pixels(), canvas.width(), canvas.height())?;
//! ```

pub mod canvas;

pub use canvas::PixmapCanvas;

use thiserror::Error;

/// Canvas errors
#[derive(Error, Debug)]
pub enum PaintError {
    /// The requested pixmap has a zero or oversized dimension
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, PaintError>;
