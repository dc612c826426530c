// Named input actions and axes

use std::fmt;
use std::str::FromStr;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::InputError;

/// Discrete actions, bound by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    UseWeapon,
}

impl Action {
    /// Name the action is bound under
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "Jump",
            Self::UseWeapon => "UseWeapon",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Jump" => Ok(Self::Jump),
            "UseWeapon" => Ok(Self::UseWeapon),
            other => Err(InputError::UnknownName(other.to_string())),
        }
    }
}

/// Continuous axes, bound by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    MoveRight,
}

impl Axis {
    /// Name the axis is bound under
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveRight => "MoveRight",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveRight" => Ok(Self::MoveRight),
            other => Err(InputError::UnknownName(other.to_string())),
        }
    }
}

/// Edge of a button action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// A single input event delivered to the possessed pawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Action(Action, ButtonState),
    Axis(Axis, f32),
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default action bindings
pub fn default_action_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::KeyF), Action::UseWeapon),
        (InputSource::mouse(MouseButton::Left), Action::UseWeapon),
    ]
}

/// Default axis bindings with their scale
pub fn default_axis_bindings() -> Vec<(InputSource, Axis, f32)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Axis::MoveRight, -1.0),
        (InputSource::key(KeyCode::KeyD), Axis::MoveRight, 1.0),
        (InputSource::key(KeyCode::ArrowLeft), Axis::MoveRight, -1.0),
        (InputSource::key(KeyCode::ArrowRight), Axis::MoveRight, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_round_trip() {
        for action in [Action::Jump, Action::UseWeapon] {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
        assert_eq!(Axis::MoveRight.to_string(), "MoveRight");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "Crouch".parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown input name: Crouch");
        assert!("MoveUp".parse::<Axis>().is_err());
    }

    #[test]
    fn test_no_duplicate_sources_in_defaults() {
        let mut seen = std::collections::HashSet::new();
        for (source, _) in default_action_bindings() {
            assert!(seen.insert(source), "Duplicate action source {:?}", source);
        }
        for (source, _, _) in default_axis_bindings() {
            assert!(seen.insert(source), "Duplicate axis source {:?}", source);
        }
    }

    #[test]
    fn test_move_right_has_both_directions() {
        let scales: Vec<f32> = default_axis_bindings()
            .into_iter()
            .filter(|(_, axis, _)| *axis == Axis::MoveRight)
            .map(|(_, _, scale)| scale)
            .collect();
        assert!(scales.contains(&1.0));
        assert!(scales.contains(&-1.0));
    }
}
