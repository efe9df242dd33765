//! Raw button state and press-edge detection
//!
//! The window reports which buttons are held right now. A press is the frame a
//! button goes from up to down; comparing consecutive snapshots turns held
//! state into the one-shot `TickInput` the simulation consumes.

use crate::sim::TickInput;

/// Logical buttons the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Flap / start (mouse button 1)
    Primary,
    /// Pause (P)
    Pause,
    /// Restart after a crash (R)
    Restart,
}

/// Which buttons are held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub primary: bool,
    pub pause: bool,
    pub restart: bool,
}

impl InputSnapshot {
    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }

    pub fn set(&mut self, button: Button, held: bool) {
        match button {
            Button::Primary => self.primary = held,
            Button::Pause => self.pause = held,
            Button::Restart => self.restart = held,
        }
    }

    pub fn is_held(&self, button: Button) -> bool {
        match button {
            Button::Primary => self.primary,
            Button::Pause => self.pause,
            Button::Restart => self.restart,
        }
    }

    /// Buttons held now that were up in `previous`
    pub fn pressed_since(&self, previous: &InputSnapshot) -> TickInput {
        TickInput {
            primary: self.primary && !previous.primary,
            pause: self.pause && !previous.pause,
            restart: self.restart && !previous.restart,
        }
    }
}

/// Remembers the last snapshot so each call yields only new presses
#[derive(Debug, Clone, Default)]
pub struct InputEdges {
    previous: InputSnapshot,
}

impl InputEdges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, current: InputSnapshot) -> TickInput {
        let edges = current.pressed_since(&self.previous);
        self.previous = current;
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_button_fires_once() {
        let mut edges = InputEdges::new();
        let held = InputSnapshot::default().with(Button::Primary);

        assert!(edges.update(held).primary);
        assert!(!edges.update(held).primary);
        assert!(!edges.update(held).primary);

        // Release then press again
        assert!(!edges.update(InputSnapshot::default()).primary);
        assert!(edges.update(held).primary);
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut edges = InputEdges::new();
        edges.update(InputSnapshot::default().with(Button::Primary));

        let both = InputSnapshot::default()
            .with(Button::Primary)
            .with(Button::Pause);
        let input = edges.update(both);
        assert!(!input.primary);
        assert!(input.pause);
        assert!(!input.restart);
    }

    #[test]
    fn test_set_and_query() {
        let mut snap = InputSnapshot::default();
        snap.set(Button::Restart, true);
        assert!(snap.is_held(Button::Restart));
        snap.set(Button::Restart, false);
        assert!(!snap.is_held(Button::Restart));
    }
}
