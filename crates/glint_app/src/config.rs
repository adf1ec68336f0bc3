//! Demo configuration

use std::path::PathBuf;

use glint_core::View;
use glint_platform::WindowConfig;
use glint_text::FontFace;

use crate::error::Result;

/// Configuration for a demo run
///
/// The default reproduces the classic 800x600 "Practice GUI" window with
/// the font resolved from the system.
#[derive(Clone, Debug, Default)]
pub struct DemoConfig {
    /// Window title, size and resizability
    pub window: WindowConfig,
    /// Font file to render with; `None` resolves a system sans-serif face
    pub font_path: Option<PathBuf>,
    /// Logical coordinate space the scene is laid out in
    pub view: View,
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window = self.window.title(title);
        self
    }

    /// Render with the font at `path` instead of a system font
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Load the configured font
    ///
    /// An explicit font path is the only candidate when set.
    pub fn load_font(&self) -> Result<FontFace> {
        Ok(glint_text::resolve_font(self.font_path.as_deref())?)
    }
}
