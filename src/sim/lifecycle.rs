//! Phase transitions: idle -> active -> ended -> idle
//!
//! Input is the only way out of `Idle` and `Ended`; a gate collision is the
//! only way out of `Active`.

use rand::Rng;

use super::spawn::create_gate;
use super::state::{Flyer, GameEvent, GameState, PhaseState};

/// Apply one player input to the current phase
pub fn handle_input<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    match state.phase {
        PhaseState::Idle { spawn_timer, .. } => {
            state.phase = PhaseState::Active { spawn_timer };
            state.flyer.flap();
            log::info!("Run started (best {})", state.best_score.get());
            events.push(GameEvent::Started);
            events.push(GameEvent::Flapped);
        }
        PhaseState::Active { .. } => {
            state.flyer.flap();
            events.push(GameEvent::Flapped);
        }
        PhaseState::Ended => {
            reset(state, rng);
            events.push(GameEvent::Reset);
        }
    }
}

/// End the run after a collision
///
/// Only the first call during a run has any effect. Returns the event
/// describing the crash, or `None` if the run had already ended.
pub fn crash(state: &mut GameState) -> Option<GameEvent> {
    if !matches!(state.phase, PhaseState::Active { .. }) {
        return None;
    }
    state.phase = PhaseState::Ended;

    let new_best = state.best_score.record(state.score);
    if new_best {
        log::info!("New best score: {}", state.score);
    } else {
        log::info!("Run over with score {} (best {})", state.score, state.best_score.get());
    }

    Some(GameEvent::Crashed {
        score: state.score,
        new_best,
    })
}

/// Return to a fresh idle world; best score is kept
pub fn reset<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    state.flyer = Flyer::default();
    state.gates.clear();
    state.gates.push(create_gate(0, rng));
    state.phase = PhaseState::idle();
    state.score = 0;
    log::debug!("World reset");
}

/// Mark every gate the flyer has fully passed and bump the score for each
pub fn award_passed_gates(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !matches!(state.phase, PhaseState::Active { .. }) {
        return;
    }
    let flyer_left = state.flyer.left();
    for gate in state.gates.iter_mut() {
        if !gate.scored && gate.right() < flyer_left {
            gate.scored = true;
            state.score += 1;
            log::debug!("Gate passed, score {}", state.score);
            events.push(GameEvent::Scored { score: state.score });
        }
    }
}
