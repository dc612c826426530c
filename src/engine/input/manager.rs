// Input manager: turns window events into pawn input events

use super::action::{Action, Axis, ButtonState, InputEvent, InputSource};
use super::config::{Binding, InputConfig};
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Collects raw input for one local player and emits named events per frame
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,

    /// Sources currently held down
    held: HashSet<InputSource>,

    /// Action edges queued since the last drain
    pending: Vec<InputEvent>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::with_defaults())
    }

    /// Create an input manager with a custom configuration
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            held: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);
            match event.state {
                ElementState::Pressed if !event.repeat => self.press(source),
                ElementState::Pressed => {}
                ElementState::Released => self.release(source),
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let source = InputSource::mouse(button);
        match state {
            ElementState::Pressed => self.press(source),
            ElementState::Released => self.release(source),
        }
    }

    /// Register a source going down
    pub fn press(&mut self, source: InputSource) {
        if !self.held.insert(source) {
            return;
        }
        if let Some(Binding::Action(action)) = self.config.get(source) {
            log::trace!("{} pressed", action);
            self.pending
                .push(InputEvent::Action(action, ButtonState::Pressed));
        }
    }

    /// Register a source going up
    pub fn release(&mut self, source: InputSource) {
        if !self.held.remove(&source) {
            return;
        }
        if let Some(Binding::Action(action)) = self.config.get(source) {
            log::trace!("{} released", action);
            self.pending
                .push(InputEvent::Action(action, ButtonState::Released));
        }
    }

    /// Current value of an axis: the sum of held sources' scales
    pub fn axis_value(&self, axis: Axis) -> f32 {
        self.config
            .sources_for_axis(axis)
            .into_iter()
            .filter(|(source, _)| self.held.contains(source))
            .fold(0.0, |value, (_, scale)| value + scale)
    }

    /// Actions with at least one bound source held down
    fn held_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for source in &self.held {
            if let Some(Binding::Action(action)) = self.config.get(*source) {
                if !actions.contains(&action) {
                    actions.push(action);
                }
            }
        }
        actions
    }

    /// Take this frame's events: queued action edges followed by the axis values
    ///
    /// Axes are reported every frame, including zero, the same way a bound
    /// axis is polled once per tick.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        let mut events = std::mem::take(&mut self.pending);
        events.push(InputEvent::Axis(
            Axis::MoveRight,
            self.axis_value(Axis::MoveRight),
        ));
        events
    }

    /// Let go of everything held (e.g. on focus loss)
    ///
    /// Held actions get a release edge so the pawn does not keep acting on a
    /// key it will never see come up.
    pub fn reset(&mut self) {
        for action in self.held_actions() {
            log::trace!("{} released on reset", action);
            self.pending
                .push(InputEvent::Action(action, ButtonState::Released));
        }
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn key(code: KeyCode) -> InputSource {
        InputSource::key(code)
    }

    #[test]
    fn test_press_queues_action_event() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::Space));

        let events = manager.drain_events();
        assert_eq!(
            events[0],
            InputEvent::Action(Action::Jump, ButtonState::Pressed)
        );
        assert_eq!(manager.held_actions(), vec![Action::Jump]);
    }

    #[test]
    fn test_repeat_press_is_ignored() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::Space));
        manager.press(key(KeyCode::Space));

        let jumps = manager
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, InputEvent::Action(Action::Jump, _)))
            .count();
        assert_eq!(jumps, 1);
    }

    #[test]
    fn test_release_queues_release_event() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::Space));
        manager.drain_events();
        manager.release(key(KeyCode::Space));

        let events = manager.drain_events();
        assert_eq!(
            events[0],
            InputEvent::Action(Action::Jump, ButtonState::Released)
        );
        assert!(manager.held_actions().is_empty());
    }

    #[test]
    fn test_release_unpressed_source() {
        let mut manager = InputManager::new();
        manager.release(key(KeyCode::Space));

        let events = manager.drain_events();
        assert_eq!(events, vec![InputEvent::Axis(Axis::MoveRight, 0.0)]);
    }

    #[test]
    fn test_axis_sums_held_sources() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::KeyD));
        assert_eq!(manager.axis_value(Axis::MoveRight), 1.0);

        manager.press(key(KeyCode::KeyA));
        assert_eq!(manager.axis_value(Axis::MoveRight), 0.0);

        manager.release(key(KeyCode::KeyD));
        assert_eq!(manager.axis_value(Axis::MoveRight), -1.0);
    }

    #[test]
    fn test_axis_reported_every_frame() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::KeyD));

        for _ in 0..3 {
            let events = manager.drain_events();
            assert_eq!(events.last(), Some(&InputEvent::Axis(Axis::MoveRight, 1.0)));
        }
    }

    #[test]
    fn test_mouse_button_fires_use_weapon() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        let events = manager.drain_events();
        assert_eq!(
            events[0],
            InputEvent::Action(Action::UseWeapon, ButtonState::Pressed)
        );
    }

    #[test]
    fn test_reset_releases_held_actions() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::KeyD));
        manager.press(key(KeyCode::Space));
        manager.drain_events();
        manager.reset();

        assert_eq!(
            manager.drain_events(),
            vec![
                InputEvent::Action(Action::Jump, ButtonState::Released),
                InputEvent::Axis(Axis::MoveRight, 0.0),
            ]
        );
        // Nothing left to release once the keys are gone
        manager.release(key(KeyCode::Space));
        assert_eq!(manager.drain_events().len(), 1);
    }

    #[test]
    fn test_reset_releases_each_action_once() {
        let mut manager = InputManager::new();
        manager.press(key(KeyCode::Space));
        manager.press(key(KeyCode::KeyW));
        manager.drain_events();
        manager.reset();

        let releases = manager
            .drain_events()
            .into_iter()
            .filter(|e| *e == InputEvent::Action(Action::Jump, ButtonState::Released))
            .count();
        assert_eq!(releases, 1);
    }

    #[test]
    fn test_idle_axis_is_positive_zero() {
        let manager = InputManager::new();
        let value = manager.axis_value(Axis::MoveRight);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }
}
