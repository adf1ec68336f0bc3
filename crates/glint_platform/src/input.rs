//! Input event types
//!
//! Only the pointer is modelled; keyboard input has no effect on the demo
//! and is dropped by the platform backends.

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
}

/// Mouse events
///
/// Positions are physical pixels relative to the top-left corner of the
/// window's drawable area.
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in physical pixels
        x: f32,
        /// Y position in physical pixels
        y: f32,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
    },
    /// Mouse entered the window
    Entered,
    /// Mouse left the window
    Left,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Back button (side button)
    Back,
    /// Forward button (side button)
    Forward,
    /// Other button with index
    Other(u16),
}

impl InputEvent {
    /// Shorthand for a button press at a physical position
    pub fn button_pressed(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::Mouse(MouseEvent::ButtonPressed { button, x, y })
    }

    /// Shorthand for a button release at a physical position
    pub fn button_released(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::Mouse(MouseEvent::ButtonReleased { button, x, y })
    }

    /// Shorthand for a pointer move
    pub fn mouse_moved(x: f32, y: f32) -> Self {
        InputEvent::Mouse(MouseEvent::Moved { x, y })
    }
}
