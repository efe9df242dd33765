//! Collision detection and scoring against the obstacle stream
//!
//! Only the nearest obstacle that is not yet fully behind the player can touch
//! it: obstacles are spaced much wider than the player box, so one barrier pair
//! per frame is enough.

use super::obstacles::{Obstacle, ObstacleStream};
use super::player::Player;

/// First obstacle whose trailing edge has not yet passed the player's x
pub fn nearest_obstacle<'a>(player: &Player, obstacles: &'a ObstacleStream) -> Option<&'a Obstacle> {
    obstacles.iter().find(|hole| hole.trailing_edge() >= player.x)
}

/// Whether the player box overlaps either barrier of the nearest obstacle.
///
/// An exhausted stream (nothing ahead yet) is a miss, not an error.
pub fn detect_hit(player: &Player, obstacles: &ObstacleStream) -> bool {
    let Some(hole) = nearest_obstacle(player, obstacles) else {
        return false;
    };

    let body = player.bounds();
    let (upper, lower) = hole.barriers();
    body.overlaps(&upper) || body.overlaps(&lower)
}

/// Point the player's target at the first obstacle strictly ahead of it
#[must_use]
pub fn update_target(player: Player, obstacles: &ObstacleStream) -> Player {
    Player {
        target: obstacles.iter().find(|hole| hole.x > player.x).copied(),
        ..player
    }
}

/// Award a point once the player reaches its target.
///
/// Returns the updated player and whether the score changed. Call once per
/// frame, after `update_target`.
#[must_use]
pub fn update_score(player: Player) -> (Player, bool) {
    match player.target {
        Some(target) if player.x >= target.x => (
            Player {
                score: player.score + 1,
                ..player
            },
            true,
        ),
        _ => (player, false),
    }
}
