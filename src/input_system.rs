use sdl2::event::Event;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can trigger this frame
///
/// Decouples raw SDL events from the state changes they cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Right mouse button pressed at (x, y)
    SelectOrb { x: i32, y: i32 },
    /// Left mouse button pressed at (x, y)
    ClearSelection { x: i32, y: i32 },
    /// Window close requested
    Quit,
}

/// Translates SDL events into `InputAction`s
///
/// Only button-down events are considered, so holding a button down
/// produces exactly one action.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains pending SDL events and returns the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<InputAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(InputAction::Quit),
                Event::MouseButtonDown { mouse_btn, x, y, .. } => {
                    if let Some(action) = action_for_mouse_button(mouse_btn, x, y) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a mouse button press to an action, if the button means anything
pub fn action_for_mouse_button(button: MouseButton, x: i32, y: i32) -> Option<InputAction> {
    match button {
        MouseButton::Right => Some(InputAction::SelectOrb { x, y }),
        MouseButton::Left => Some(InputAction::ClearSelection { x, y }),
        _ => None,
    }
}
