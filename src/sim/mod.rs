//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time comes in as `FrameTime`, never read from a clock
//! - Randomness comes from an injected RNG
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod lifecycle;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, BoundaryContact, CollisionResult, clamp_to_bounds, resolve};
pub use lifecycle::{award_passed_gates, crash, handle_input, reset};
pub use spawn::{create_gate, gap_height};
pub use state::{Flyer, GameEvent, GamePhase, GameState, Gate, PhaseState};
pub use tick::{FrameTime, tick};
