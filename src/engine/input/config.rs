// Input configuration: which sources drive which actions and axes

use super::action::{self, Action, Axis, InputSource};
use std::collections::HashMap;

/// What a single input source is bound to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    Action(Action),
    Axis { axis: Axis, scale: f32 },
}

/// Maps input sources (keys/buttons) to actions and axes
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Binding>,
}

impl InputConfig {
    /// Create an empty input configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the default bindings
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }

    /// Bind an input source to an action, replacing any previous binding
    pub fn bind_action(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, Binding::Action(action));
    }

    /// Bind an input source to an axis with a scale, replacing any previous binding
    pub fn bind_axis(&mut self, source: InputSource, axis: Axis, scale: f32) {
        self.bindings.insert(source, Binding::Axis { axis, scale });
    }

    /// Get the binding of an input source
    pub fn get(&self, source: InputSource) -> Option<Binding> {
        self.bindings.get(&source).copied()
    }

    /// All sources bound to an axis with their scale
    pub fn sources_for_axis(&self, axis: Axis) -> Vec<(InputSource, f32)> {
        self.bindings
            .iter()
            .filter_map(|(source, binding)| match binding {
                Binding::Axis { axis: a, scale } if *a == axis => Some((*source, *scale)),
                _ => None,
            })
            .collect()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (source, action) in action::default_action_bindings() {
            self.bind_action(source, action);
        }
        for (source, axis, scale) in action::default_axis_bindings() {
            self.bind_axis(source, axis, scale);
        }
    }
}
