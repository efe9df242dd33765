//! Flappy Sim - A side-scrolling gap runner
//!
//! Core modules:
//! - `sim`: Simulation core (obstacle stream, player physics, collisions, phases)
//! - `game`: Frame orchestration (clock, input edges, snapshot) and the host loop
//! - `renderer`: Frame snapshots and the renderer collaborator seam
//! - `platform`: Window, input and asset collaborator seams
//! - `settings`: Host preferences loaded from JSON

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Simulation, run};
pub use settings::Settings;

use glam::{Mat4, UVec4};

/// Game configuration constants
///
/// All world-space values are in canvas units: the visible canvas is
/// `CANVAS_WIDTH` x `CANVAS_HEIGHT`, with y growing upward from the bottom edge.
pub mod consts {
    /// Canvas dimensions (768x1024 portrait artwork)
    pub const CANVAS_ASPECT_RATIO: f32 = 768.0 / 1024.0;
    pub const CANVAS_HEIGHT: f32 = 30.0;
    pub const CANVAS_WIDTH: f32 = CANVAS_HEIGHT * CANVAS_ASPECT_RATIO;
    pub const CANVAS_HALF_WIDTH: f32 = CANVAS_WIDTH / 2.0;
    pub const CANVAS_HALF_HEIGHT: f32 = CANVAS_HEIGHT / 2.0;

    /// Vertical opening between the two barriers of an obstacle
    pub const GAP_HEIGHT: f32 = 6.0;
    pub const BARRIER_WIDTH: f32 = 4.0;
    pub const BARRIER_HALF_WIDTH: f32 = BARRIER_WIDTH / 2.0;
    /// Length of each barrier, measured away from the gap
    pub const BARRIER_LENGTH: f32 = 23.0;
    /// Shortest visible barrier between gap and ground/ceiling
    pub const MIN_BARRIER_LENGTH: f32 = 4.0;

    /// Height of the ground strip; touching it ends the round
    pub const GROUND_HEIGHT: f32 = 4.0;

    /// Gravitational acceleration (units/s², negative is down)
    pub const GRAVITY: f32 = -9.8 * 2.0;
    pub const PLAYER_MASS: f32 = 5.0;
    /// Upward thrust applied by a flap until `IMPULSE_CUTOFF_SPEED` is reached
    pub const FLAP_IMPULSE: f32 = -PLAYER_MASS * 15.0 * GRAVITY;
    pub const IMPULSE_CUTOFF_SPEED: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_SPEED_X: f32 = 4.0;
    pub const PLAYER_WIDTH: f32 = 2.0;
    pub const PLAYER_HEIGHT: f32 = 2.0 * 0.7;
    pub const PLAYER_SPAWN_X: f32 = CANVAS_HALF_WIDTH;
    pub const PLAYER_SPAWN_Y: f32 = CANVAS_HALF_HEIGHT;

    /// Obstacle stream live window
    pub const MIN_LIVE_OBSTACLES: usize = 6;
    pub const REFILL_OBSTACLES: usize = 12;
    pub const OBSTACLE_SPACING: f32 = CANVAS_HALF_WIDTH;
    /// Distance behind the player after which an obstacle is dropped
    pub const CULL_DISTANCE: f32 = CANVAS_HALF_WIDTH + BARRIER_HALF_WIDTH;
    /// Band of valid gap centres (keeps both barriers at least `MIN_BARRIER_LENGTH` long)
    pub const MIN_HOLE_Y: f32 = GROUND_HEIGHT + MIN_BARRIER_LENGTH + GAP_HEIGHT / 2.0;
    pub const MAX_HOLE_Y: f32 = CANVAS_HEIGHT - MIN_BARRIER_LENGTH - GAP_HEIGHT / 2.0;

    /// Hit flash duration (seconds)
    pub const BLINK_DURATION: f32 = 0.3;

    /// Largest wall-clock step fed to the simulation (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.05;

    /// Initial window size (pixels)
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 640;
}

/// Orthographic projection mapping the canvas, centred on the origin, to clip space
#[inline]
pub fn canvas_projection() -> Mat4 {
    use consts::{CANVAS_HALF_HEIGHT, CANVAS_HALF_WIDTH};
    Mat4::orthographic_rh_gl(
        -CANVAS_HALF_WIDTH,
        CANVAS_HALF_WIDTH,
        -CANVAS_HALF_HEIGHT,
        CANVAS_HALF_HEIGHT,
        -1.0,
        1.0,
    )
}

/// Centred viewport `(x, y, width, height)` keeping the canvas aspect ratio.
///
/// The canvas always fills the framebuffer height. On framebuffers narrower
/// than the canvas the offset clamps to zero and the right edge is cropped.
pub fn letterbox_viewport(width: u32, height: u32) -> UVec4 {
    let adjusted = (height as f32 * consts::CANVAS_ASPECT_RATIO) as i64;
    let x = (width as i64 / 2 - adjusted / 2).max(0);
    UVec4::new(x as u32, 0, adjusted as u32, height)
}
