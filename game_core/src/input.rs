//! Logical player actions, decoupled from any input device.

/// One held control. Each paddle owns an up/down pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::LeftUp,
        Action::LeftDown,
        Action::RightUp,
        Action::RightDown,
    ];

    fn index(self) -> usize {
        match self {
            Action::LeftUp => 0,
            Action::LeftDown => 1,
            Action::RightUp => 2,
            Action::RightDown => 3,
        }
    }
}

/// Snapshot of which actions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    held: [bool; 4],
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with exactly `actions` held
    pub fn with_held(actions: &[Action]) -> Self {
        let mut state = Self::new();
        for &action in actions {
            state.press(action);
        }
        state
    }

    pub fn press(&mut self, action: Action) {
        self.held[action.index()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.held[action.index()] = false;
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }

    /// Net vertical direction for an up/down pair: -1 up, 1 down, 0 otherwise
    pub fn axis(&self, up: Action, down: Action) -> i8 {
        self.is_held(down) as i8 - self.is_held(up) as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut state = ActionState::new();
        state.press(Action::LeftUp);
        assert!(state.is_held(Action::LeftUp));
        assert!(!state.is_held(Action::LeftDown));
        state.release(Action::LeftUp);
        assert!(!state.is_held(Action::LeftUp));
    }

    #[test]
    fn test_axis() {
        let up = ActionState::with_held(&[Action::RightUp]);
        assert_eq!(up.axis(Action::RightUp, Action::RightDown), -1);

        let down = ActionState::with_held(&[Action::RightDown]);
        assert_eq!(down.axis(Action::RightUp, Action::RightDown), 1);

        let both = ActionState::with_held(&[Action::RightUp, Action::RightDown]);
        assert_eq!(both.axis(Action::RightUp, Action::RightDown), 0);

        assert_eq!(ActionState::new().axis(Action::LeftUp, Action::LeftDown), 0);
    }

    #[test]
    fn test_clear() {
        let mut state = ActionState::with_held(&Action::ALL);
        state.clear();
        assert!(Action::ALL.iter().all(|&a| !state.is_held(a)));
    }
}
