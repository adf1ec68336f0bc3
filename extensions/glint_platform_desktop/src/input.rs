//! Desktop input conversion (winit -> glint_platform)

use glint_platform::{InputEvent, MouseButton};
use winit::event::{ElementState, MouseButton as WinitMouseButton};

/// Convert winit mouse button to glint MouseButton
pub fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Convert a winit button transition at the last known cursor position
pub fn convert_mouse_input(
    state: ElementState,
    button: WinitMouseButton,
    x: f32,
    y: f32,
) -> InputEvent {
    let button = convert_mouse_button(button);
    match state {
        ElementState::Pressed => InputEvent::button_pressed(button, x, y),
        ElementState::Released => InputEvent::button_released(button, x, y),
    }
}
