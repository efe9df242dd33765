//! Player body: the flapping avatar
//!
//! `Player` is a plain `Copy` value. Every per-tick change is a transformation
//! that returns the next value, so a frame either commits a whole new player or
//! nothing at all.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::Obstacle;
use super::quad::Quad;
use crate::consts::*;

/// Tilt mapping: vertical speeds in `[TILT_MIN_SPEED, TILT_MAX_SPEED]` map
/// linearly onto `[TILT_MIN_DEGREES, TILT_MAX_DEGREES]`.
const TILT_MIN_SPEED: f32 = -30.0;
const TILT_MAX_SPEED: f32 = -20.0;
const TILT_MIN_DEGREES: f32 = -90.0;
const TILT_MAX_DEGREES: f32 = 30.0;

/// Wing animation frames per second and frame count in the sprite strip
const WING_FPS: f32 = 12.0;
pub const WING_FRAMES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Constant scroll rate
    pub speed_x: f32,
    pub speed_y: f32,
    /// Upward thrust left over from the last flap
    pub impulse_y: f32,
    pub width: f32,
    pub height: f32,
    /// Seconds of wing animation
    pub animation_step: f32,
    /// Set once the player clips a barrier; flaps stop working
    pub hit: bool,
    pub score: u32,
    /// Next obstacle ahead that has not been scored yet
    pub target: Option<Obstacle>,
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Player {
    /// Fresh player at the spawn point
    pub const fn spawn() -> Self {
        Self {
            x: PLAYER_SPAWN_X,
            y: PLAYER_SPAWN_Y,
            speed_x: PLAYER_SPEED_X,
            speed_y: 0.0,
            impulse_y: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            animation_step: 0.0,
            hit: false,
            score: 0,
            target: None,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Collision box centred on the player position
    pub fn bounds(&self) -> Quad {
        Quad::from_center(
            self.position(),
            Vec2::new(self.width / 2.0, self.height / 2.0),
        )
    }

    /// Advance the body by `dt` seconds of gravity, thrust and scroll
    #[must_use]
    pub fn integrate(self, dt: f32) -> Self {
        let mut next = self;
        next.speed_y += (GRAVITY * PLAYER_MASS + next.impulse_y) * dt;

        // A flap only pushes until the climb reaches the cutoff speed
        if next.speed_y >= IMPULSE_CUTOFF_SPEED {
            next.impulse_y = 0.0;
        }

        next.x += next.speed_x * dt;
        next.y = (next.y + next.speed_y * dt).max(GROUND_HEIGHT);
        next
    }

    /// Start a flap. Has no effect once the player has been hit.
    ///
    /// One call is one jump: callers feed press edges, not held buttons.
    #[must_use]
    pub fn apply_flap_impulse(self) -> Self {
        if self.hit {
            return self;
        }
        Self {
            speed_y: self.speed_y.max(0.0),
            impulse_y: FLAP_IMPULSE,
            ..self
        }
    }

    /// Mark the player as hit: remaining thrust is dropped and flaps stop working
    #[must_use]
    pub fn struck(self) -> Self {
        Self {
            hit: true,
            impulse_y: 0.0,
            ..self
        }
    }

    /// Touching the ground ends the round
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.y <= GROUND_HEIGHT
    }

    /// Advance the wing animation clock
    #[must_use]
    pub fn animate(self, dt: f32) -> Self {
        Self {
            animation_step: self.animation_step + dt,
            ..self
        }
    }

    /// Body rotation in degrees derived from vertical speed (nose up is positive)
    pub fn tilt_degrees(&self) -> f32 {
        let clamped = self.speed_y.clamp(TILT_MIN_SPEED, TILT_MAX_SPEED);
        TILT_MIN_DEGREES
            + (clamped - TILT_MIN_SPEED) * ((TILT_MAX_DEGREES - TILT_MIN_DEGREES) / (TILT_MAX_SPEED - TILT_MIN_SPEED))
    }

    /// Current wing sprite frame; wings only beat while the nose points up
    pub fn wing_frame(&self) -> u32 {
        if self.tilt_degrees() > 0.0 {
            (self.animation_step * WING_FPS) as u32 % WING_FRAMES
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_values() {
        let p = Player::spawn();
        assert_eq!(p.position(), Vec2::new(CANVAS_HALF_WIDTH, CANVAS_HALF_HEIGHT));
        assert_eq!(p.speed_x, 4.0);
        assert_eq!(p.score, 0);
        assert!(p.target.is_none());
        assert!(!p.hit);
        assert_eq!(Player::default(), p);
    }

    #[test]
    fn test_integrate_scroll_scenario() {
        let p = Player {
            x: 0.0,
            y: 20.0,
            ..Player::spawn()
        };
        let next = p.integrate(3.0);
        assert!((next.x - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_gravity_pulls_down_and_ground_clamps() {
        let p = Player::spawn();
        let next = p.integrate(0.1);
        assert!(next.speed_y < 0.0);
        assert!(next.y < p.y);

        // A long fall ends on the ground, never below
        let landed = p.integrate(10.0);
        assert_eq!(landed.y, GROUND_HEIGHT);
        assert!(landed.is_grounded());
    }

    #[test]
    fn test_flap_resets_downward_speed_and_sets_impulse() {
        let falling = Player {
            speed_y: -12.0,
            ..Player::spawn()
        };
        let flapped = falling.apply_flap_impulse();
        assert_eq!(flapped.speed_y, 0.0);
        assert_eq!(flapped.impulse_y, FLAP_IMPULSE);

        let rising = Player {
            speed_y: 3.0,
            ..Player::spawn()
        };
        assert_eq!(rising.apply_flap_impulse().speed_y, 3.0);
    }

    #[test]
    fn test_flap_ignored_after_hit() {
        let p = Player::spawn().struck();
        let flapped = p.apply_flap_impulse();
        assert_eq!(flapped, p);
        assert_eq!(flapped.impulse_y, 0.0);
    }

    #[test]
    fn test_impulse_consumed_at_cutoff_speed() {
        let p = Player::spawn().apply_flap_impulse();
        // One 60 Hz frame of thrust overshoots the cutoff speed
        let next = p.integrate(1.0 / 60.0);
        assert!(next.speed_y >= IMPULSE_CUTOFF_SPEED);
        assert_eq!(next.impulse_y, 0.0);
        assert!(next.y > p.y);

        // A tiny step keeps pushing
        let tiny = p.integrate(1e-4);
        assert!(tiny.speed_y < IMPULSE_CUTOFF_SPEED);
        assert_eq!(tiny.impulse_y, FLAP_IMPULSE);
    }

    #[test]
    fn test_x_is_monotonic() {
        let mut p = Player::spawn().apply_flap_impulse();
        for _ in 0..200 {
            let next = p.integrate(1.0 / 60.0);
            assert!(next.x >= p.x);
            assert!(next.y >= GROUND_HEIGHT);
            p = next;
        }
    }

    #[test]
    fn test_tilt_mapping() {
        let diving = Player {
            speed_y: -100.0,
            ..Player::spawn()
        };
        assert_eq!(diving.tilt_degrees(), -90.0);

        let climbing = Player {
            speed_y: 10.0,
            ..Player::spawn()
        };
        assert_eq!(climbing.tilt_degrees(), 30.0);

        let mid = Player {
            speed_y: -25.0,
            ..Player::spawn()
        };
        assert!((mid.tilt_degrees() + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_wing_frames_only_when_nose_up() {
        let climbing = Player {
            speed_y: 10.0,
            ..Player::spawn()
        };
        assert_eq!(climbing.animate(0.1).wing_frame(), 1);
        assert_eq!(climbing.animate(0.2).wing_frame(), 2);
        assert_eq!(climbing.animate(0.25).wing_frame(), 0);

        let diving = Player {
            speed_y: -100.0,
            ..Player::spawn()
        };
        assert_eq!(diving.animate(0.1).wing_frame(), 0);
    }
}
