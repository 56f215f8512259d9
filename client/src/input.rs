//! Keyboard input handling

use std::collections::HashMap;

use game_core::{Action, ActionState};
use winit::keyboard::KeyCode;

/// Maps physical keys to paddle actions
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    /// W/S drive the left paddle, the arrow keys drive the right one
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyW, Action::LeftUp);
        bindings.bind(KeyCode::KeyS, Action::LeftDown);
        bindings.bind(KeyCode::ArrowUp, Action::RightUp);
        bindings.bind(KeyCode::ArrowDown, Action::RightDown);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, returning the action it replaced
    pub fn bind(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        self.map.insert(key, action)
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// Record a key press or release. Returns whether the key is bound.
    pub fn apply(&self, key: KeyCode, pressed: bool, actions: &mut ActionState) -> bool {
        match self.action_for(key) {
            Some(action) => {
                actions.set(action, pressed);
                true
            }
            None => false,
        }
    }
}

/// Keys that end the match and close the window
pub fn is_exit_key(key: KeyCode) -> bool {
    key == KeyCode::Escape
}
