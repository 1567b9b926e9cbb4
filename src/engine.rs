//! Simulation engine
//!
//! Owns the world, the RNG and the score store, and turns host timestamps
//! into ticks. Hosts call `handle_input` from their event handlers and
//! `advance` once per display refresh, then draw from `snapshot`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::highscores::BestScore;
use crate::persistence::ScoreStore;
use crate::platform::Clock;
use crate::settings::Settings;
use crate::sim::{self, Flyer, FrameTime, GameEvent, GamePhase, GameState, Gate};

/// Read-only view of the world for renderers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub flyer: &'a Flyer,
    /// Live gates, oldest first
    pub gates: &'a [Gate],
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
}

/// Composition root: clock-driven ticking, input latching, best score persistence
pub struct Engine<S, R = Pcg32> {
    state: GameState,
    rng: R,
    store: S,
    /// Timestamp of the previous tick; `None` means the next tick has zero delta
    last_timestamp: Option<f64>,
    /// Inputs since the last tick, collapsed into one
    pending_input: bool,
    running: bool,
}

impl<S: ScoreStore> Engine<S, Pcg32> {
    /// Create an engine seeded from settings (or OS entropy)
    pub fn new(store: S, settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        };
        Self::with_rng(store, rng)
    }
}

impl<S: ScoreStore, R: Rng> Engine<S, R> {
    /// Create an engine with an explicit RNG
    pub fn with_rng(store: S, mut rng: R) -> Self {
        let best = BestScore::from_stored(store.load());
        log::info!("Engine ready, best score {}", best.get());
        Self {
            state: GameState::new(best, &mut rng),
            rng,
            store,
            last_timestamp: None,
            pending_input: false,
            running: true,
        }
    }

    /// Latch a flap/confirm input for the next tick
    ///
    /// Any number of calls between two ticks count as one.
    pub fn handle_input(&mut self) {
        self.pending_input = true;
    }

    /// Run one tick at host timestamp `timestamp_ms`
    ///
    /// Does nothing while stopped. The first tick after construction or
    /// `resume` has zero elapsed time.
    pub fn advance(&mut self, timestamp_ms: f64) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }

        let delta = self.last_timestamp.map_or(0.0, |last| timestamp_ms - last);
        self.last_timestamp = Some(timestamp_ms);
        let frame = FrameTime::from_delta(delta, timestamp_ms);

        let mut events = Vec::new();
        if std::mem::take(&mut self.pending_input) {
            sim::handle_input(&mut self.state, &mut self.rng, &mut events);
        }
        events.extend(sim::tick(&mut self.state, &frame, &mut self.rng));

        self.persist_best(&events);
        events
    }

    /// Tick using the clock's current time
    pub fn advance_with<C: Clock + ?Sized>(&mut self, clock: &C) -> Vec<GameEvent> {
        self.advance(clock.now_ms())
    }

    /// Stop ticking; state is left as is
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Engine stopped");
        }
        self.running = false;
        self.last_timestamp = None;
    }

    /// Resume ticking with a fresh time baseline
    pub fn resume(&mut self) {
        if !self.running {
            log::info!("Engine resumed");
        }
        self.running = true;
        self.last_timestamp = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            flyer: &self.state.flyer,
            gates: &self.state.gates,
            phase: self.state.game_phase(),
            score: self.state.score,
            best_score: self.state.best_score.get(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist_best(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Crashed { new_best: true, .. } = event {
                let best = self.state.best_score.get();
                match self.store.store(best) {
                    Ok(()) => log::info!("Best score {} saved", best),
                    Err(e) => log::warn!("Failed to save best score {}: {}", best, e),
                }
            }
        }
    }
}
