//! Window abstraction and configuration

/// Window configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in logical pixels
    pub width: u32,
    /// Initial height in logical pixels
    pub height: u32,
    /// Whether the window can be resized
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Practice GUI".to_string(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether the window is resizable
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// Window abstraction trait
///
/// Implemented by platform-specific window types.
pub trait Window {
    /// Get window size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Get the display scale factor (DPI scaling)
    fn scale_factor(&self) -> f64;

    /// Get window size in logical pixels
    fn logical_size(&self) -> (f32, f32) {
        let (width, height) = self.size();
        let scale = self.scale_factor();
        (
            (width as f64 / scale) as f32,
            (height as f64 / scale) as f32,
        )
    }

    /// Set the window title
    fn set_title(&self, title: &str);

    /// Request a redraw
    fn request_redraw(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedWindow;

    impl Window for FixedWindow {
        fn size(&self) -> (u32, u32) {
            (1600, 1200)
        }

        fn scale_factor(&self) -> f64 {
            2.0
        }

        fn set_title(&self, _title: &str) {}

        fn request_redraw(&self) {}
    }

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new("Demo").size(640, 480).resizable(false);
        assert_eq!(config.title, "Demo");
        assert_eq!((config.width, config.height), (640, 480));
        assert!(!config.resizable);
    }

    #[test]
    fn test_default_window_config() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Practice GUI");
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn test_logical_size() {
        assert_eq!(FixedWindow.logical_size(), (800.0, 600.0));
    }
}
