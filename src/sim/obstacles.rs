//! Obstacle stream: the rolling window of gaps ahead of the player
//!
//! Obstacles are appended at the back as the player approaches the end of the
//! window and trimmed from the front once they fall out of view, so the live
//! set stays between a handful and `REFILL_OBSTACLES` entries forever.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::quad::Quad;
use crate::consts::*;

/// A single gap the player must fly through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// World-space scroll position of the barrier centreline
    pub x: f32,
    /// Vertical centre of the gap
    pub y: f32,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Right edge of the barriers
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + BARRIER_HALF_WIDTH
    }

    /// Upper and lower barrier rectangles bounding the gap
    pub fn barriers(&self) -> (Quad, Quad) {
        obstacle_pair(self)
    }
}

/// Derive the `(upper, lower)` barrier pair for an obstacle
pub fn obstacle_pair(hole: &Obstacle) -> (Quad, Quad) {
    let upper_bottom = hole.y + GAP_HEIGHT / 2.0;
    let lower_top = hole.y - GAP_HEIGHT / 2.0;
    let left = hole.x - BARRIER_HALF_WIDTH;
    let right = hole.x + BARRIER_HALF_WIDTH;

    (
        Quad::new(left, right, upper_bottom, upper_bottom + BARRIER_LENGTH),
        Quad::new(left, right, lower_top - BARRIER_LENGTH, lower_top),
    )
}

/// Ordered (ascending x) window of live obstacles
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    holes: VecDeque<Obstacle>,
    rng: Pcg32,
    /// Total obstacles ever generated (diagnostics)
    generated: u64,
}

impl ObstacleStream {
    /// Create an empty stream whose gap heights are drawn from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            holes: VecDeque::with_capacity(REFILL_OBSTACLES),
            rng: Pcg32::seed_from_u64(seed),
            generated: 0,
        }
    }

    /// Top the window back up to `REFILL_OBSTACLES` once it drops below
    /// `MIN_LIVE_OBSTACLES`.
    pub fn ensure_ahead(&mut self, player_x: f32) {
        if self.holes.len() >= MIN_LIVE_OBSTACLES {
            return;
        }

        let count = REFILL_OBSTACLES - self.holes.len();
        let base_x = self
            .holes
            .back()
            .map_or(player_x + CANVAS_HALF_WIDTH, |hole| hole.x);

        for i in 1..=count {
            let x = base_x + i as f32 * OBSTACLE_SPACING;
            let y = self.rng.random_range(MIN_HOLE_Y..=MAX_HOLE_Y);
            self.holes.push_back(Obstacle::new(x, y));
        }
        self.generated += count as u64;

        log::debug!(
            "Generated {} obstacles from x={:.2} (live={}, total={})",
            count,
            base_x,
            self.holes.len(),
            self.generated
        );
    }

    /// Drop obstacles from the front that the player has left behind
    pub fn cull(&mut self, player_x: f32) {
        let before = self.holes.len();
        while let Some(front) = self.holes.front() {
            if player_x - front.x >= CULL_DISTANCE {
                self.holes.pop_front();
            } else {
                break;
            }
        }

        let removed = before - self.holes.len();
        if removed > 0 {
            log::debug!("Culled {} obstacles behind x={:.2}", removed, player_x);
        }
    }

    /// Forget every live obstacle (next `ensure_ahead` regenerates the window).
    /// The RNG keeps its position so a new round gets fresh gaps.
    pub fn clear(&mut self) {
        self.holes.clear();
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn front(&self) -> Option<&Obstacle> {
        self.holes.front()
    }

    pub fn back(&self) -> Option<&Obstacle> {
        self.holes.back()
    }

    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Obstacles in ascending x order
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.holes.iter()
    }

    /// Snapshot of the live window
    pub fn to_vec(&self) -> Vec<Obstacle> {
        self.holes.iter().copied().collect()
    }

    /// Append a specific obstacle (used to script layouts in tests and demos).
    /// Ignored if it would break the ascending-x ordering.
    pub fn push(&mut self, obstacle: Obstacle) -> bool {
        if self.holes.back().is_some_and(|back| back.x > obstacle.x) {
            return false;
        }
        self.holes.push_back(obstacle);
        true
    }
}
