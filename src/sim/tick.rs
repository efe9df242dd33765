//! Per-frame simulation tick
//!
//! Drives the phase machine and, while a round is active, the fixed update
//! order: stream -> target -> body -> score -> hit -> ground.

use super::collision::{detect_hit, update_score, update_target};
use super::state::{GamePhase, GameState};

/// Input edges for a single tick (pressed this frame, not held)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap / start / resume
    pub primary: bool,
    /// Pause an active round
    pub pause: bool,
    /// Start over after a crash
    pub restart: bool,
}

/// What happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The score changed (refresh the score text)
    pub scored: bool,
    /// The player clipped a barrier this tick
    pub newly_hit: bool,
    /// Phase before the tick, if it changed
    pub transition: Option<(GamePhase, GamePhase)>,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    let from = state.phase;

    // Presentation clocks run in every phase
    state.blink.advance(dt);
    state.player = state.player.animate(dt);

    match state.phase {
        GamePhase::Idle => {
            state.hit_probe = detect_hit(&state.player, &state.obstacles);
            if input.primary {
                // The press that starts or resumes a round is also its first flap
                state.player = state.player.apply_flap_impulse();
                state.phase = GamePhase::Active;
            }
        }

        GamePhase::Active => {
            if input.pause {
                state.phase = GamePhase::Idle;
            } else {
                tick_active(state, input, dt, &mut outcome);
            }
        }

        GamePhase::Terminated => {
            state.hit_probe = detect_hit(&state.player, &state.obstacles);
            if input.restart {
                state.rounds += 1;
                state.reset_round();
                state.phase = GamePhase::Idle;
            }
        }
    }

    if state.phase != from {
        log::info!("Phase {:?} -> {:?} (score {})", from, state.phase, state.player.score);
        outcome.transition = Some((from, state.phase));
    }

    outcome
}

fn tick_active(state: &mut GameState, input: &TickInput, dt: f32, outcome: &mut TickOutcome) {
    if input.primary {
        state.player = state.player.apply_flap_impulse();
    }

    state.obstacles.ensure_ahead(state.player.x);
    state.obstacles.cull(state.player.x);

    let player = update_target(state.player, &state.obstacles);
    let player = player.integrate(dt);
    let (mut player, scored) = update_score(player);
    outcome.scored = scored;

    if !player.hit {
        state.hit_probe = detect_hit(&player, &state.obstacles);
        if state.hit_probe {
            player = player.struck();
            outcome.newly_hit = true;
            state.start_blink();
            log::info!("Player hit barrier at x={:.2} y={:.2}", player.x, player.y);
        }
    }

    state.player = player;

    if state.player.is_grounded() {
        state.phase = GamePhase::Terminated;
        log::info!("Round over: score {}", state.player.score);
    }
}
