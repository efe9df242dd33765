//! Simulation module
//!
//! All gameplay logic lives here. This module stays pure:
//! - Seeded RNG only
//! - Stable iteration order (obstacles ascending by x)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod player;
pub mod quad;
pub mod state;
pub mod tick;

pub use collision::{detect_hit, nearest_obstacle, update_score, update_target};
pub use obstacles::{Obstacle, ObstacleStream, obstacle_pair};
pub use player::Player;
pub use quad::Quad;
pub use state::{BlinkTimer, GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
