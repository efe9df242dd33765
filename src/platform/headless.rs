//! Headless window: a fixed-rate clock with scripted or autopilot input
//!
//! Used by the native binary (no display backend is bundled) and by tests
//! that drive whole rounds through the host loop.

use std::collections::VecDeque;

use super::input::{Button, InputSnapshot};
use super::Window;
use crate::consts::CANVAS_HALF_HEIGHT;
use crate::renderer::Frame;
use crate::sim::GamePhase;

/// How far below the gap centre the autopilot lets the bird sink before flapping
const AUTOPILOT_FLAP_MARGIN: f32 = 1.0;
/// Frames the autopilot lingers on the crash screen before restarting
const AUTOPILOT_RESTART_DELAY: u32 = 30;

/// Plays the game from the rendered frame, the way a player watching the
/// screen would: flap when the bird sinks under the next gap.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    pressed_last: bool,
    crashed_frames: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buttons to hold during the next frame
    pub fn decide(&mut self, frame: &Frame) -> InputSnapshot {
        // Presses need a release in between to register as new edges
        if self.pressed_last {
            self.pressed_last = false;
            return InputSnapshot::default();
        }

        let button = match frame.phase {
            GamePhase::Idle => Some(Button::Primary),
            GamePhase::Terminated => {
                self.crashed_frames += 1;
                if self.crashed_frames > AUTOPILOT_RESTART_DELAY {
                    self.crashed_frames = 0;
                    Some(Button::Restart)
                } else {
                    None
                }
            }
            GamePhase::Active => {
                let player = &frame.player;
                let target_y = frame
                    .obstacles
                    .iter()
                    .find(|hole| hole.trailing_edge() + player.width / 2.0 >= player.x)
                    .map_or(CANVAS_HALF_HEIGHT, |hole| hole.y);

                (player.y < target_y - AUTOPILOT_FLAP_MARGIN && player.speed_y <= 0.0)
                    .then_some(Button::Primary)
            }
        };

        match button {
            Some(button) => {
                self.pressed_last = true;
                InputSnapshot::default().with(button)
            }
            None => InputSnapshot::default(),
        }
    }
}

/// Window stand-in with a deterministic clock
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    frame_dt: f64,
    frames: u64,
    max_frames: u64,
    held: InputSnapshot,
    /// `(frame, held buttons from that frame on)`, ascending
    script: VecDeque<(u64, InputSnapshot)>,
    pilot: Option<Autopilot>,
}

impl HeadlessWindow {
    /// Window that stays open for `run_seconds` at `frame_rate` frames per second
    pub fn new(frame_rate: f32, run_seconds: f32) -> Self {
        let frame_rate = f64::from(frame_rate.max(1.0));
        Self {
            frame_dt: 1.0 / frame_rate,
            frames: 0,
            max_frames: (f64::from(run_seconds.max(0.0)) * frame_rate).round() as u64,
            held: InputSnapshot::default(),
            script: VecDeque::new(),
            pilot: None,
        }
    }

    /// Let the autopilot drive input
    pub fn with_autopilot(mut self) -> Self {
        self.pilot = Some(Autopilot::new());
        self
    }

    /// Replace held buttons at fixed frames. Entries apply in frame order.
    pub fn with_script(mut self, mut script: Vec<(u64, InputSnapshot)>) -> Self {
        script.sort_by_key(|(frame, _)| *frame);
        self.script = script.into();
        self.apply_script();
        self
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn apply_script(&mut self) {
        while let Some(&(at, snapshot)) = self.script.front() {
            if at > self.frames {
                break;
            }
            self.held = snapshot;
            self.script.pop_front();
        }
    }
}

impl Window for HeadlessWindow {
    fn is_open(&self) -> bool {
        self.frames < self.max_frames
    }

    fn elapsed_time_seconds(&self) -> f64 {
        self.frames as f64 * self.frame_dt
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.held.is_held(button)
    }

    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if let Some(pilot) = self.pilot.as_mut() {
            self.held = pilot.decide(frame);
        }
        self.apply_script();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Obstacle};

    #[test]
    fn test_clock_and_lifetime() {
        let mut window = HeadlessWindow::new(50.0, 0.1);
        let frame = Frame::capture(&GameState::new(0));

        let mut presented = 0;
        while window.is_open() {
            window.present(&frame);
            presented += 1;
        }
        assert_eq!(presented, 5);
        assert!((window.elapsed_time_seconds() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_script_holds_until_next_entry() {
        let primary = InputSnapshot::default().with(Button::Primary);
        let mut window = HeadlessWindow::new(60.0, 1.0)
            .with_script(vec![(2, InputSnapshot::default()), (0, primary)]);
        let frame = Frame::capture(&GameState::new(0));

        assert!(window.is_primary_action_pressed());
        window.present(&frame);
        assert!(window.is_primary_action_pressed());
        window.present(&frame);
        assert!(!window.is_primary_action_pressed());
    }

    #[test]
    fn test_autopilot_starts_and_releases() {
        let mut pilot = Autopilot::new();
        let frame = Frame::capture(&GameState::new(0));

        assert!(pilot.decide(&frame).primary);
        assert!(!pilot.decide(&frame).primary);
        assert!(pilot.decide(&frame).primary);
    }

    #[test]
    fn test_autopilot_flaps_below_gap() {
        let mut state = GameState::new(0);
        state.phase = GamePhase::Active;
        state.obstacles.push(Obstacle::new(state.player.x + 10.0, 22.0));
        state.player.speed_y = -3.0;

        let mut pilot = Autopilot::new();
        assert!(pilot.decide(&Frame::capture(&state)).primary);

        // Above the gap: let gravity work
        let mut pilot = Autopilot::new();
        state.player.y = 23.0;
        assert!(!pilot.decide(&Frame::capture(&state)).primary);
    }

    #[test]
    fn test_autopilot_restarts_after_delay() {
        let mut state = GameState::new(0);
        state.phase = GamePhase::Terminated;
        let frame = Frame::capture(&state);

        let mut pilot = Autopilot::new();
        let mut restarted_at = None;
        for i in 0..100 {
            if pilot.decide(&frame).restart {
                restarted_at = Some(i);
                break;
            }
        }
        assert_eq!(restarted_at, Some(AUTOPILOT_RESTART_DELAY as usize));
    }
}
