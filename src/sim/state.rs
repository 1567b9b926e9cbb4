//! Game state and core simulation types
//!
//! Everything the engine owns between ticks lives here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn::create_gate;
use crate::consts::*;
use crate::highscores::BestScore;

/// Lifecycle phase, as seen by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input, flyer hovers in place
    Idle,
    /// Run in progress
    Active,
    /// Flyer crashed, falling to rest
    Ended,
}

/// Lifecycle phase with the data that only matters inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhaseState {
    /// Hover oscillates around `hover_baseline`; `spawn_timer` is carried into the run
    Idle { hover_baseline: f32, spawn_timer: f64 },
    /// `spawn_timer` is ms elapsed since the last gate spawn
    Active { spawn_timer: f64 },
    Ended,
}

impl PhaseState {
    /// Fresh idle phase around the start position
    pub fn idle() -> Self {
        PhaseState::Idle {
            hover_baseline: FLYER_START_Y,
            spawn_timer: SPAWN_INTERVAL_MS * INITIAL_SPAWN_FRACTION,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self {
            PhaseState::Idle { .. } => GamePhase::Idle,
            PhaseState::Active { .. } => GamePhase::Active,
            PhaseState::Ended => GamePhase::Ended,
        }
    }
}

/// The player-controlled flyer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// Center position; x stays fixed during play
    pub pos: Vec2,
    /// Vertical velocity per nominal tick (positive = down)
    pub vel_y: f32,
    pub radius: f32,
}

impl Default for Flyer {
    fn default() -> Self {
        Self {
            pos: Vec2::new(FLYER_START_X, FLYER_START_Y),
            vel_y: 0.0,
            radius: FLYER_RADIUS,
        }
    }
}

impl Flyer {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Override vertical velocity with the flap impulse
    pub fn flap(&mut self) {
        self.vel_y = FLAP_VELOCITY;
    }
}

/// A pair of obstacles with a vertical gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Leading (left) edge
    pub x: f32,
    pub gap_center: f32,
    pub gap: f32,
    pub width: f32,
    /// Set once the flyer has fully passed this gate
    pub scored: bool,
}

impl Gate {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap / 2.0
    }
}

/// Things that happened during a tick, for hosts (audio, persistence, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> active
    Started,
    /// Flap impulse applied
    Flapped,
    /// A gate was passed; `score` is the new total
    Scored { score: u32 },
    GateSpawned,
    /// Active -> ended
    Crashed { score: u32, new_best: bool },
    /// Ended -> idle
    Reset,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub flyer: Flyer,
    /// Live gates in creation order (leftmost first)
    pub gates: Vec<Gate>,
    pub phase: PhaseState,
    pub score: u32,
    /// Highest score ever reached in this process (seeded from storage)
    pub best_score: BestScore,
}

impl GameState {
    /// Create a new idle world with one gate waiting off the right edge
    pub fn new<R: Rng + ?Sized>(best_score: BestScore, rng: &mut R) -> Self {
        Self {
            flyer: Flyer::default(),
            gates: vec![create_gate(0, rng)],
            phase: PhaseState::idle(),
            score: 0,
            best_score,
        }
    }

    #[inline]
    pub fn game_phase(&self) -> GamePhase {
        self.phase.phase()
    }
}
