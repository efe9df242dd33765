//! Game state and core simulation types
//!
//! Everything one round needs lives in `GameState`; restarting a round swaps
//! the per-round parts back to their initial values.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleStream;
use super::player::Player;
use crate::consts::BLINK_DURATION;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap of a round, or paused mid-round
    Idle,
    /// Simulation running
    Active,
    /// Player hit the ground; waiting for restart
    Terminated,
}

/// Hit flash countdown
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlinkTimer {
    pub elapsed: f32,
    pub duration: f32,
}

impl BlinkTimer {
    /// Inactive timer
    pub const fn new() -> Self {
        Self {
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    /// Start a fresh flash
    pub fn arm(&mut self, duration: f32) {
        self.elapsed = 0.0;
        self.duration = duration;
    }

    /// Advance the countdown, saturating at `duration`
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Whether the flash is still visible
    pub fn is_active(&self) -> bool {
        self.duration > 0.0 && self.elapsed < self.duration
    }

    /// Flash opacity in [0, 1], or `None` when inactive
    pub fn alpha(&self) -> Option<f32> {
        self.is_active()
            .then(|| (1.0 - self.elapsed / self.duration).clamp(0.0, 1.0))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the obstacle stream was created with
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub obstacles: ObstacleStream,
    pub blink: BlinkTimer,
    /// Latest hit probe result, kept for display/diagnostics in every phase
    pub hit_probe: bool,
    /// Completed rounds
    pub rounds: u32,
    /// Best score seen this session
    pub best_score: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            seed,
            phase: GamePhase::Idle,
            player: Player::spawn(),
            obstacles: ObstacleStream::new(seed),
            blink: BlinkTimer::new(),
            hit_probe: false,
            rounds: 0,
            best_score: 0,
        }
    }

    /// Create a game state seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().next_u64())
    }

    /// Put the round back to its initial values: spawn player, empty stream,
    /// blink off. The phase is left to the caller.
    pub fn reset_round(&mut self) {
        self.best_score = self.best_score.max(self.player.score);
        self.player = Player::spawn();
        self.obstacles.clear();
        self.blink.reset();
        self.hit_probe = false;
    }

    /// Arm the hit flash for the standard duration
    pub fn start_blink(&mut self) {
        self.blink.arm(BLINK_DURATION);
    }

    /// Score formatted for display
    pub fn score_text(&self) -> String {
        self.player.score.to_string()
    }
}
