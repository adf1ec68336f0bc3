//! Text support for Glint
//!
//! This crate provides:
//! - Font loading and parsing (TTF/OTF/TTC via ttf-parser)
//! - Font resolution from well-known paths and the system font database
//! - Glyph rasterization (swash)
//! - Single-line text layout with a glyph cache

pub mod font;
pub mod rasterizer;
pub mod registry;
pub mod renderer;

pub use font::{FontFace, FontMetrics};
pub use rasterizer::{GlyphRasterizer, RasterizedGlyph};
pub use registry::{default_font_paths, load_system_sans_serif, resolve_font};
pub use renderer::{PositionedGlyph, TextLine, TextRenderer};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("No usable font found: {0}")]
    FontNotFound(String),

    #[error("Invalid font data")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
