//! Error types for glint_app

use thiserror::Error;

/// Errors that can stop the demo
#[derive(Error, Debug)]
pub enum AppError {
    /// No usable font could be loaded
    #[error("Font loading failed: {0}")]
    FontLoad(String),

    /// Platform error (windowing, event loop)
    #[error("Platform error: {0}")]
    Platform(String),

    /// The frame could not be presented
    #[error("Presentation failed: {0}")]
    Present(String),

    /// The CPU canvas could not be created
    #[error("Canvas error: {0}")]
    Paint(String),
}

impl From<glint_text::TextError> for AppError {
    fn from(err: glint_text::TextError) -> Self {
        AppError::FontLoad(err.to_string())
    }
}

impl From<glint_platform::PlatformError> for AppError {
    fn from(err: glint_platform::PlatformError) -> Self {
        AppError::Platform(err.to_string())
    }
}

impl From<glint_paint::PaintError> for AppError {
    fn from(err: glint_paint::PaintError) -> Self {
        AppError::Paint(err.to_string())
    }
}

#[cfg(feature = "windowed")]
impl From<glint_gpu::PresentError> for AppError {
    fn from(err: glint_gpu::PresentError) -> Self {
        AppError::Present(err.to_string())
    }
}

/// Result type for glint_app operations
pub type Result<T> = std::result::Result<T, AppError>;
