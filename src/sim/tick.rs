//! Variable timestep simulation tick
//!
//! One call per display refresh. Motion is scaled by the frame time in
//! nominal ticks; the spawn timer runs on raw elapsed milliseconds.

use rand::Rng;

use super::collision::{clamp_to_bounds, resolve};
use super::lifecycle::{award_passed_gates, crash};
use super::physics::{advance_gates, hover, integrate_active, integrate_ended};
use super::spawn::create_gate;
use super::state::{GameEvent, GameState, PhaseState};
use crate::consts::*;

/// Timing for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Elapsed time in nominal ticks, clamped to at most ~2 ticks
    pub dt_scale: f32,
    /// Raw elapsed ms (never negative)
    pub delta_ms: f64,
    /// Host timestamp in ms, used by the idle hover
    pub time_ms: f64,
}

impl FrameTime {
    /// Build frame timing from the host delta
    ///
    /// Negative deltas (clock irregularities) count as no elapsed time.
    pub fn from_delta(delta_ms: f64, time_ms: f64) -> Self {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        Self {
            dt_scale: (delta_ms.min(MAX_FRAME_DELTA_MS) / FRAME_TIME_MS) as f32,
            delta_ms,
            time_ms,
        }
    }

    /// Exactly one nominal tick
    pub fn nominal(time_ms: f64) -> Self {
        Self {
            dt_scale: 1.0,
            delta_ms: FRAME_TIME_MS,
            time_ms,
        }
    }
}

/// Advance the game state by one frame
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, frame: &FrameTime, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let dt = frame.dt_scale;

    match state.phase {
        PhaseState::Idle { hover_baseline, .. } => {
            hover(&mut state.flyer, hover_baseline, frame.time_ms);
        }

        PhaseState::Active { spawn_timer } => {
            integrate_active(&mut state.flyer, dt);

            // Full reset on spawn so a long frame doesn't carry over
            let mut spawn_timer = spawn_timer + frame.delta_ms;
            if spawn_timer >= SPAWN_INTERVAL_MS {
                spawn_timer = 0.0;
                state.gates.push(create_gate(state.score, rng));
                log::debug!("Spawned gate at score {}", state.score);
                events.push(GameEvent::GateSpawned);
            }
            state.phase = PhaseState::Active { spawn_timer };

            advance_gates(&mut state.gates, dt);
            award_passed_gates(state, &mut events);

            if resolve(&state.flyer, &state.gates).collided {
                events.extend(crash(state));
            }
        }

        PhaseState::Ended => {
            integrate_ended(&mut state.flyer, dt);
        }
    }

    clamp_to_bounds(&mut state.flyer);
    events
}
