//! Frame orchestration and the host loop
//!
//! `Simulation` owns the game state, the frame clock and the input edge
//! detector. `run` drives it against a window and a renderer until the window
//! closes.

use crate::platform::{InputEdges, InputSnapshot, Window};
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{GameState, TickOutcome, tick};

/// One game session: state plus the per-frame plumbing around `tick`
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: GameState,
    edges: InputEdges,
    last_time: Option<f64>,
    max_frame_delta: f32,
}

impl Simulation {
    pub fn new(state: GameState, max_frame_delta: f32) -> Self {
        Self {
            state,
            edges: InputEdges::new(),
            last_time: None,
            max_frame_delta,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let state = match settings.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        Self::new(state, settings.effective_max_frame_delta())
    }

    /// Seconds since the previous frame, capped at `max_frame_delta`.
    ///
    /// The first frame and clocks that run backwards yield zero.
    pub fn frame_delta(&mut self, now: f64) -> f32 {
        let raw = self.last_time.map_or(0.0, |last| (now - last).max(0.0));
        self.last_time = Some(now);

        let cap = f64::from(self.max_frame_delta);
        if raw > cap {
            log::warn!("Frame took {:.3}s, clamping to {:.3}s", raw, cap);
            return self.max_frame_delta;
        }
        raw as f32
    }

    /// Advance one frame given the clock reading and the buttons held now
    pub fn step(&mut self, now: f64, held: InputSnapshot) -> TickOutcome {
        let dt = self.frame_delta(now);
        let input = self.edges.update(held);
        tick(&mut self.state, &input, dt)
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }
}

/// Totals reported when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// Rounds restarted
    pub rounds: u32,
    pub final_score: u32,
    pub best_score: u32,
}

/// Run frames until the window closes
pub fn run(window: &mut impl Window, renderer: &mut impl Renderer, sim: &mut Simulation) -> RunSummary {
    let mut summary = RunSummary::default();

    while window.is_open() {
        let now = window.elapsed_time_seconds();
        let outcome = sim.step(now, window.input());
        if outcome.scored {
            log::debug!("Passed obstacle, score {}", sim.state.player.score);
        }

        let frame = sim.frame();
        renderer.draw(&frame);
        window.present(&frame);
        summary.frames += 1;
    }

    summary.rounds = sim.state.rounds;
    summary.final_score = sim.state.player.score;
    summary.best_score = sim.state.best_score.max(summary.final_score);
    log::info!(
        "Window closed after {} frames ({} rounds, best score {})",
        summary.frames,
        summary.rounds,
        summary.best_score
    );
    summary
}
