//! Per-tick motion
//!
//! All motion is scaled by `dt_scale`, the frame time expressed in nominal
//! 60 Hz ticks. Callers clamp it before it gets here.

use super::state::{Flyer, Gate};
use crate::consts::*;

/// Gravity then position, for a live run
pub fn integrate_active(flyer: &mut Flyer, dt_scale: f32) {
    flyer.vel_y += GRAVITY * dt_scale;
    flyer.pos.y += flyer.vel_y * dt_scale;
}

/// Death fall: same as a live run but velocity is capped at terminal speed
pub fn integrate_ended(flyer: &mut Flyer, dt_scale: f32) {
    flyer.vel_y = (flyer.vel_y + GRAVITY * dt_scale).min(TERMINAL_VELOCITY);
    flyer.pos.y += flyer.vel_y * dt_scale;
}

/// Cosmetic hover while idle; driven by wall-clock time, not by physics
pub fn hover(flyer: &mut Flyer, baseline: f32, time_ms: f64) {
    let offset = (time_ms / HOVER_PERIOD_DIVISOR).sin() as f32 * HOVER_AMPLITUDE;
    flyer.pos.y = baseline + offset;
    flyer.vel_y = 0.0;
}

/// Scroll gates left and drop the ones that left the playfield
pub fn advance_gates(gates: &mut Vec<Gate>, dt_scale: f32) {
    for gate in gates.iter_mut() {
        gate.x -= GATE_SPEED * dt_scale;
    }
    cull_gates(gates);
}

/// Remove gates whose trailing edge is past the left margin (order-preserving)
pub fn cull_gates(gates: &mut Vec<Gate>) {
    gates.retain(|g| g.right() > -GATE_CULL_MARGIN);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_at(x: f32) -> Gate {
        Gate {
            x,
            gap_center: 300.0,
            gap: 160.0,
            width: GATE_WIDTH,
            scored: false,
        }
    }

    #[test]
    fn test_one_nominal_tick_after_flap() {
        let mut flyer = Flyer::default();
        flyer.flap();
        let start_y = flyer.pos.y;

        integrate_active(&mut flyer, 1.0);

        assert!((flyer.vel_y - (-6.75)).abs() < 1e-5);
        assert!((start_y - flyer.pos.y - 6.75).abs() < 1e-4);
    }

    #[test]
    fn test_zero_dt_is_no_motion() {
        let mut flyer = Flyer::default();
        flyer.vel_y = 3.0;
        let before = flyer;
        integrate_active(&mut flyer, 0.0);
        assert_eq!(flyer, before);
    }

    #[test]
    fn test_ended_velocity_caps_at_terminal() {
        let mut flyer = Flyer::default();
        flyer.vel_y = 11.9;
        integrate_ended(&mut flyer, 2.0);
        assert_eq!(flyer.vel_y, TERMINAL_VELOCITY);
        integrate_ended(&mut flyer, 2.0);
        assert_eq!(flyer.vel_y, TERMINAL_VELOCITY);
    }

    #[test]
    fn test_hover_follows_sine_and_zeroes_velocity() {
        let mut flyer = Flyer::default();
        flyer.vel_y = 5.0;
        hover(&mut flyer, 320.0, 0.0);
        assert_eq!(flyer.pos.y, 320.0);
        assert_eq!(flyer.vel_y, 0.0);

        let quarter = HOVER_PERIOD_DIVISOR * std::f64::consts::FRAC_PI_2;
        hover(&mut flyer, 320.0, quarter);
        assert!((flyer.pos.y - (320.0 + HOVER_AMPLITUDE)).abs() < 1e-3);
    }

    #[test]
    fn test_gates_scroll_and_cull_in_order() {
        let mut gates = vec![gate_at(-84.0), gate_at(-80.0), gate_at(100.0), gate_at(300.0)];
        advance_gates(&mut gates, 1.0);

        // Right edges: -12.75 is dropped, -8.75 is still inside the margin
        assert_eq!(gates.len(), 3);
        assert!((gates[0].x - -82.75).abs() < 1e-4);
        assert!((gates[1].x - 97.25).abs() < 1e-4);
        assert!((gates[2].x - 297.25).abs() < 1e-4);
    }

    #[test]
    fn test_cull_boundary_is_exclusive() {
        // Scrolls onto exactly -10
        let mut gates = vec![gate_at(-81.25)];
        advance_gates(&mut gates, 1.0);
        assert!(gates.is_empty());

        let mut gates = vec![gate_at(-84.0), gate_at(-83.99)];
        cull_gates(&mut gates);
        assert_eq!(gates.len(), 1);
        assert_eq!(gates[0].x, -83.99);
    }

    #[test]
    fn test_cull_is_idempotent() {
        let mut gates = vec![gate_at(-200.0), gate_at(-50.0), gate_at(10.0)];
        cull_gates(&mut gates);
        let once = gates.clone();
        cull_gates(&mut gates);
        assert_eq!(gates, once);
        assert_eq!(gates.len(), 2);
    }
}
