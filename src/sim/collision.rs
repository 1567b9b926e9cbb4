//! Collision detection and boundary response
//!
//! The flyer is treated as its axis-aligned bounding box. Gates are two
//! columns with an open gap; touching either column ends the run.

use glam::Vec2;

use super::state::{Flyer, Gate};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn of_flyer(flyer: &Flyer) -> Self {
        let half = Vec2::splat(flyer.radius);
        Self {
            min: flyer.pos - half,
            max: flyer.pos + half,
        }
    }

    /// Strict horizontal overlap with the span `[left, right]`
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }
}

/// Result of a gate collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    pub collided: bool,
}

/// Which boundary the flyer was pushed back from, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    None,
    Ground,
    Ceiling,
}

/// Does the flyer box hit this gate's columns?
pub fn hits_gate(bounds: &Aabb, gate: &Gate) -> bool {
    bounds.overlaps_x(gate.x, gate.right())
        && (bounds.min.y < gate.gap_top() || bounds.max.y > gate.gap_bottom())
}

/// Check the flyer against every live gate
pub fn resolve(flyer: &Flyer, gates: &[Gate]) -> CollisionResult {
    let bounds = Aabb::of_flyer(flyer);
    CollisionResult {
        collided: gates.iter().any(|gate| hits_gate(&bounds, gate)),
    }
}

/// Keep the flyer between ceiling and ground line
///
/// Ground wins when both apply. Hitting the ground stops the flyer; hitting
/// the ceiling only removes upward velocity.
pub fn clamp_to_bounds(flyer: &mut Flyer) -> BoundaryContact {
    if flyer.bottom() >= GROUND_LINE {
        flyer.pos.y = GROUND_LINE - flyer.radius;
        flyer.vel_y = 0.0;
        BoundaryContact::Ground
    } else if flyer.top() <= 0.0 {
        flyer.pos.y = flyer.radius;
        flyer.vel_y = flyer.vel_y.max(0.0);
        BoundaryContact::Ceiling
    } else {
        BoundaryContact::None
    }
}
