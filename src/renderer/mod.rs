//! Rendering seam
//!
//! The simulation hands the renderer an immutable `Frame` once per frame. The
//! renderer decides how to paint it; `sprites` turns a frame into textured
//! quads for backends that draw sprites.

pub mod sprites;

pub use sprites::{Sprite, build_sprites};

use glam::Mat4;

use crate::sim::{GamePhase, GameState, Obstacle, Player};

/// Read-only snapshot of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub phase: GamePhase,
    pub player: Player,
    /// Body rotation (degrees, nose up positive)
    pub tilt_degrees: f32,
    /// Wing sprite frame
    pub wing_frame: u32,
    /// Live obstacle window, ascending x
    pub obstacles: Vec<Obstacle>,
    pub score_text: String,
    /// Hit flash opacity, `None` when inactive
    pub blink_alpha: Option<f32>,
    /// Latest hit probe result (diagnostics overlay)
    pub hit_probe: bool,
    /// Canvas to clip-space transform
    pub projection: Mat4,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            player: state.player,
            tilt_degrees: state.player.tilt_degrees(),
            wing_frame: state.player.wing_frame(),
            obstacles: state.obstacles.to_vec(),
            score_text: state.score_text(),
            blink_alpha: state.blink.alpha(),
            hit_probe: state.hit_probe,
            projection: crate::canvas_projection(),
        }
    }

    /// World x the camera is centred on
    #[inline]
    pub fn camera_x(&self) -> f32 {
        self.player.x
    }
}

/// Paints frames. Has no write access to the simulation.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Renderer for headless runs: reports frames through `log`
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_score: String,
    last_phase: Option<GamePhase>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;

        let sprites = build_sprites(frame);
        log::trace!(
            "frame {}: {:?} player=({:.2}, {:.2}) tilt={:.1} sprites={} blink={:?}",
            self.frames,
            frame.phase,
            frame.player.x,
            frame.player.y,
            frame.tilt_degrees,
            sprites.len(),
            frame.blink_alpha
        );

        if frame.score_text != self.last_score {
            log::info!("Score: {}", frame.score_text);
            self.last_score.clone_from(&frame.score_text);
        }

        if self.last_phase != Some(frame.phase) {
            log::debug!("Showing {:?} screen", frame.phase);
            self.last_phase = Some(frame.phase);
        }
    }
}
