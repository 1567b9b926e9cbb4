//! Gate generation
//!
//! Gaps shrink as the score grows, down to a floor. The gap center is the
//! only random quantity in the whole simulation.

use rand::Rng;

use super::state::Gate;
use crate::consts::*;

/// Gap height for a gate spawned at `score`
#[inline]
pub fn gap_height(score: u32) -> f32 {
    (GAP_BASE - GAP_SHRINK_PER_POINT * score as f32).max(GAP_MIN)
}

/// Range the gap center is drawn from so the whole gap stays in the safe band
pub fn gap_center_range(gap: f32) -> (f32, f32) {
    let safe_top = GAP_SAFE_MARGIN;
    let safe_bottom = GROUND_LINE - GAP_SAFE_MARGIN;
    (safe_top + gap / 2.0, safe_bottom - gap / 2.0)
}

/// Create a gate just beyond the right edge of the playfield
pub fn create_gate<R: Rng + ?Sized>(score: u32, rng: &mut R) -> Gate {
    let gap = gap_height(score);
    let (lo, hi) = gap_center_range(gap);
    let gap_center = lo + rng.random::<f32>() * (hi - lo);

    Gate {
        x: PLAYFIELD_WIDTH + GATE_WIDTH,
        gap_center,
        gap,
        width: GATE_WIDTH,
        scored: false,
    }
}
