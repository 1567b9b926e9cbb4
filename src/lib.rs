//! Flappy Flight - A one-button side-scrolling flyer
//!
//! Core modules:
//! - `sim`: Simulation core (physics, gate spawning, collisions, lifecycle)
//! - `engine`: Composition root driven by a host clock
//! - `persistence`: Best score storage (file natively, LocalStorage on web)
//! - `platform`: Clock abstraction and logger setup

pub mod engine;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use engine::{Engine, Snapshot};
pub use highscores::BestScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 420.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;
    pub const GROUND_HEIGHT: f32 = 88.0;
    /// Y coordinate of the ground surface
    pub const GROUND_LINE: f32 = PLAYFIELD_HEIGHT - GROUND_HEIGHT;

    /// Flyer defaults
    pub const FLYER_RADIUS: f32 = 18.0;
    pub const FLYER_START_X: f32 = PLAYFIELD_WIDTH / 3.0;
    pub const FLYER_START_Y: f32 = PLAYFIELD_HEIGHT / 2.0;

    /// Nominal frame duration in ms (60 Hz reference tick)
    pub const FRAME_TIME_MS: f64 = 1000.0 / 60.0;
    /// Longest frame delta that still integrates motion (~2 nominal ticks)
    pub const MAX_FRAME_DELTA_MS: f64 = 34.0;

    /// Downward acceleration per nominal tick
    pub const GRAVITY: f32 = 0.45;
    /// Velocity set by a flap (negative = up)
    pub const FLAP_VELOCITY: f32 = -7.2;
    /// Velocity cap while falling after a crash
    pub const TERMINAL_VELOCITY: f32 = 12.0;

    /// Idle hover: y = baseline + sin(t / divisor) * amplitude
    pub const HOVER_AMPLITUDE: f32 = 12.0;
    pub const HOVER_PERIOD_DIVISOR: f64 = 325.0;

    /// Gate defaults
    pub const GATE_WIDTH: f32 = 74.0;
    pub const GATE_SPEED: f32 = 2.75;
    pub const GAP_BASE: f32 = 160.0;
    pub const GAP_MIN: f32 = 110.0;
    /// Gap shrink per point scored
    pub const GAP_SHRINK_PER_POINT: f32 = 4.0;
    /// Gaps stay this far from both ceiling and ground line
    pub const GAP_SAFE_MARGIN: f32 = 80.0;
    /// Gates are culled once their trailing edge passes this far left of the playfield
    pub const GATE_CULL_MARGIN: f32 = 10.0;

    /// Milliseconds between gate spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1550.0;
    /// Fraction of the interval already elapsed at the start of a run
    pub const INITIAL_SPAWN_FRACTION: f64 = 0.65;
}
