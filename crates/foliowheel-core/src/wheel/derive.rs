//! Mappings from rotation state to presentation values.
//!
//! All three mappings are pure functions of angle, speed and panel
//! count, so they can be recomputed every frame without history.

use std::f64::consts::PI;

/// Velocity adjustment below which the bob is forced to exactly zero
/// instead of trailing off asymptotically.
pub const BOB_CUTOFF: f64 = 0.05;

/// Panel index selected by a rotation angle.
///
/// Rotation in either direction walks forward through the panel
/// sequence; an empty panel list pins the index to 0.
pub fn active_index(angle: f64, degree_increment: f64, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let steps = (angle / degree_increment).round() as i64;
    steps.unsigned_abs() as usize % item_count
}

/// Continuous palette position in `[0, item_count)`.
///
/// The angle is wrapped into `[0, 360)` first, so negative rotation
/// lands on the same palette positions as its positive counterpart.
pub fn color_index(angle: f64, item_count: usize) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    angle.rem_euclid(360.0) / 360.0 * item_count as f64
}

/// Target bob displacement for the current raw angle and rotation speed.
///
/// The half-sine curve peaks midway between steps and vanishes on them.
/// Speed scales it down linearly until [`BOB_CUTOFF`], past which the
/// target is exactly zero. Negative values displace upward.
pub fn bob_target(
    raw_angle: f64,
    velocity: f64,
    degree_increment: f64,
    amplitude: f64,
    max_velocity: f64,
) -> f64 {
    if max_velocity <= 0.0 {
        return 0.0;
    }

    let adjustment = 1.0 - velocity.abs().min(max_velocity) / max_velocity;
    if adjustment < BOB_CUTOFF {
        return 0.0;
    }

    let phase = (raw_angle / degree_increment).fract();
    -((phase * PI).sin() * amplitude * adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_walks_forward_in_both_directions() {
        assert_eq!(active_index(0.0, 90.0, 7), 0);
        assert_eq!(active_index(90.0, 90.0, 7), 1);
        assert_eq!(active_index(-90.0, 90.0, 7), 1);
        assert_eq!(active_index(360.0, 90.0, 7), 4);
        assert_eq!(active_index(-360.0, 90.0, 7), 4);
    }

    #[test]
    fn index_is_periodic_over_a_full_panel_cycle() {
        let cycle = 90.0 * 7.0;
        for turn in 0..3 {
            for step in 0..7 {
                let angle = step as f64 * 90.0 + turn as f64 * cycle;
                assert_eq!(active_index(angle, 90.0, 7), step);
            }
        }
    }

    #[test]
    fn index_rounds_mid_flight_angles_to_the_nearest_step() {
        assert_eq!(active_index(130.0, 90.0, 7), 1);
        assert_eq!(active_index(140.0, 90.0, 7), 2);
    }

    #[test]
    fn empty_panel_list_pins_everything_to_zero() {
        assert_eq!(active_index(270.0, 90.0, 0), 0);
        assert_eq!(color_index(270.0, 0), 0.0);
    }

    #[test]
    fn color_index_wraps_negative_angles() {
        assert_eq!(color_index(0.0, 4), 0.0);
        assert_eq!(color_index(180.0, 4), 2.0);
        assert_eq!(color_index(-90.0, 4), 3.0);
        assert_eq!(color_index(360.0, 4), 0.0);
    }

    #[test]
    fn color_index_stays_in_range() {
        for i in -40..40 {
            let angle = i as f64 * 33.3;
            let index = color_index(angle, 7);
            assert!((0.0..7.0).contains(&index), "{angle} -> {index}");
        }
    }

    #[test]
    fn bob_is_zero_on_whole_steps() {
        assert_eq!(bob_target(0.0, 0.0, 90.0, 100.0, 200.0), 0.0);
        assert_eq!(bob_target(360.0, 0.0, 90.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn bob_peaks_between_steps_at_rest() {
        let bob = bob_target(45.0, 0.0, 90.0, 100.0, 200.0);
        assert!((bob - (-100.0)).abs() < 1e-9);
    }

    #[test]
    fn bob_scales_down_with_speed() {
        let slow = bob_target(45.0, 50.0, 90.0, 100.0, 200.0);
        assert!((slow - (-75.0)).abs() < 1e-9);

        let fast = bob_target(45.0, 150.0, 90.0, 100.0, 200.0);
        assert!((fast - (-25.0)).abs() < 1e-9);
    }

    #[test]
    fn bob_snaps_off_past_the_velocity_cutoff() {
        assert_eq!(bob_target(45.0, 195.0, 90.0, 100.0, 200.0), 0.0);
        assert_eq!(bob_target(45.0, 500.0, 90.0, 100.0, 200.0), 0.0);
    }

    #[test]
    fn bob_sign_follows_the_phase_sign() {
        let forward = bob_target(45.0, 0.0, 90.0, 100.0, 200.0);
        let backward = bob_target(-45.0, 0.0, 90.0, 100.0, 200.0);
        assert!(forward < 0.0);
        assert!(backward > 0.0);
    }
}
