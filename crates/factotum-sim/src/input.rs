//! Input bindings for the player pawn.
//!
//! Maps binding names from `InputConfig` to character actions and holds the
//! current value of each bound axis.

use std::collections::HashMap;

use factotum_core::config::InputConfig;

/// Action a digital binding triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundAction {
    Jump,
    Dash,
}

#[derive(Debug, Clone)]
pub struct InputBindings {
    actions: HashMap<String, BoundAction>,
    move_axis: String,
    axis_values: HashMap<String, f32>,
}

impl InputBindings {
    pub fn new(config: &InputConfig) -> Self {
        let mut actions = HashMap::new();
        actions.insert(config.jump_action.clone(), BoundAction::Jump);
        actions.insert(config.dash_action.clone(), BoundAction::Dash);

        let mut axis_values = HashMap::new();
        axis_values.insert(config.move_axis.clone(), 0.0);

        Self {
            actions,
            move_axis: config.move_axis.clone(),
            axis_values,
        }
    }

    pub fn action(&self, name: &str) -> Option<BoundAction> {
        self.actions.get(name).copied()
    }

    /// Store a new held value. Returns `false` for unbound axis names.
    pub fn set_axis(&mut self, name: &str, value: f32) -> bool {
        match self.axis_values.get_mut(name) {
            Some(held) => {
                *held = value;
                true
            }
            None => false,
        }
    }

    /// Held value of the horizontal movement axis.
    pub fn move_axis_value(&self) -> f32 {
        self.axis_values
            .get(&self.move_axis)
            .copied()
            .unwrap_or_default()
    }

    /// Zero every held axis.
    pub fn reset_axes(&mut self) {
        for value in self.axis_values.values_mut() {
            *value = 0.0;
        }
    }
}
