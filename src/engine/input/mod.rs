// Input handling system
//
// Raw window input is mapped onto a small set of named actions and axes that
// the possessed pawn understands.
//
// ## Architecture
//
// - `action`: Named actions/axes, input events and default bindings
// - `config`: Source -> action/axis binding table
// - `manager`: Collects window events and emits per-frame `InputEvent`s
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop, forward keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per simulation tick, hand the events to the session
// session.tick(dt, &input.drain_events());
// ```

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::{Action, Axis, ButtonState, InputEvent, InputSource};
pub use config::{Binding, InputConfig};
pub use manager::InputManager;

/// Input binding errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unknown input name: {0}")]
    UnknownName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::UnknownName("Fire".to_string());
        assert_eq!(err.to_string(), "Unknown input name: Fire");
    }
}
