use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit keyboard events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    pressed: Vec<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_state(button, event.state);
                    }
                }
            }
            // Keys held while focus leaves never report a release
            WindowEvent::Focused(false) => self.pressed.clear(),
            _ => {}
        }
    }

    fn set_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.pressed.contains(&button) {
                    self.pressed.push(button);
                }
            }
            ElementState::Released => self.pressed.retain(|&b| b != button),
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit keyboard events carry platform-private fields, so state is driven directly

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::Escape));
        assert!(!controller.exit_requested());
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();

        controller.set_state(Button::Escape, ElementState::Pressed);
        controller.set_state(Button::Escape, ElementState::Pressed);
        assert!(controller.exit_requested());
        assert_eq!(controller.pressed, vec![Button::Escape]);

        controller.set_state(Button::Escape, ElementState::Released);
        assert!(!controller.exit_requested());
    }

    #[test]
    fn test_focus_loss_clears_keys() {
        let mut controller = WinitController::new();
        controller.set_state(Button::Escape, ElementState::Pressed);

        controller.process_event(&WindowEvent::Focused(false));
        assert!(controller.pressed.is_empty());
        assert!(!controller.exit_requested());
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::Escape), Some(Button::Escape));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), None);
    }
}
