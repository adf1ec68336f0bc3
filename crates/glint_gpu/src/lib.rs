//! Glint GPU Presenter
//!
//! Presents a finished RGBA frame to a window surface using wgpu. The frame
//! is uploaded into a texture and drawn with a single fullscreen triangle,
//! stretched over the whole surface.

pub mod presenter;
pub mod shaders;

pub use presenter::{FramePresenter, PresentError, PresentOutcome};
pub use shaders::BLIT_SHADER;
