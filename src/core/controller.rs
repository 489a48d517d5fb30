/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Escape,
}

/// Controller - keyboard state query
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// The user asked to quit
    fn exit_requested(&self) -> bool {
        self.is_down(Button::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_exit_requested() {
        let controller = MockController {
            pressed: vec![Button::Escape],
        };

        assert!(controller.is_down(Button::Escape));
        assert!(controller.exit_requested());
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::Escape));
        assert!(!controller.exit_requested());
    }
}
