//! Damped spring integration.
//!
//! A single second-order mass/spring/damper integrated with semi-implicit
//! Euler steps. Integration always honors the wall-clock time handed to
//! [`SpringState::step`], sub-divided into fixed slices so stiff tunings
//! stay stable at low frame rates.

use serde::Serialize;

/// Longest stretch of wall-clock time integrated in one call. Anything
/// beyond this (a suspended terminal, a debugger pause) is discarded so
/// the animation resumes instead of jumping.
const MAX_FRAME_DT: f64 = 0.04;

/// Fixed integration slice, in seconds.
const SUB_STEP: f64 = 1.0 / 120.0;

/// Tuning for a damped spring. The config layer owns deserialization so
/// each spring fills omitted fields from its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringParams {
    /// Mass of the animated value
    pub mass: f64,
    /// Restoring force per unit of displacement
    pub stiffness: f64,
    /// Force opposing velocity
    pub damping: f64,
    /// Speed below which the spring may come to rest
    pub rest_speed: f64,
    /// Distance to target below which the spring may come to rest
    pub rest_delta: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            rest_speed: 0.1,
            rest_delta: 0.01,
        }
    }
}

/// Position and velocity of a spring-animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    /// A spring at rest at `position`.
    pub fn new(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Advance `dt` seconds toward `target`.
    ///
    /// Once both rest thresholds are met the state snaps exactly onto the
    /// target with zero velocity, so callers can compare positions with
    /// `==` and stop ticking.
    #[must_use]
    pub fn step(self, target: f64, dt: f64, params: &SpringParams) -> Self {
        if dt <= 0.0 {
            return self;
        }

        let mut state = self;
        let mut remaining = dt.min(MAX_FRAME_DT);
        while remaining > 0.0 {
            let slice = remaining.min(SUB_STEP);
            state = state.integrate(target, slice, params);
            remaining -= slice;
        }

        if state.is_settled(target, params) {
            Self {
                position: target,
                velocity: 0.0,
            }
        } else {
            state
        }
    }

    /// One semi-implicit Euler slice: acceleration from the current
    /// displacement, velocity first, then position from the new velocity.
    fn integrate(self, target: f64, dt: f64, params: &SpringParams) -> Self {
        let displacement = self.position - target;
        let spring_force = -params.stiffness * displacement;
        let damping_force = -params.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / params.mass;

        let velocity = self.velocity + acceleration * dt;
        let position = self.position + velocity * dt;

        Self { position, velocity }
    }

    /// Whether both rest thresholds are currently met.
    pub fn is_settled(&self, target: f64, params: &SpringParams) -> bool {
        self.velocity.abs() < params.rest_speed && (target - self.position).abs() < params.rest_delta
    }

    /// Whether the spring sits exactly on `target` with no motion left.
    #[inline]
    pub fn at_rest(&self, target: f64) -> bool {
        self.position == target && self.velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn overdamped() -> SpringParams {
        SpringParams {
            mass: 2.0,
            stiffness: 100.0,
            damping: 50.0,
            rest_speed: 10.0,
            rest_delta: 0.01,
        }
    }

    #[test]
    fn converges_onto_target_exactly() {
        let params = overdamped();
        let mut spring = SpringState::new(0.0);

        for _ in 0..600 {
            spring = spring.step(360.0, FRAME, &params);
        }

        assert_eq!(spring.position, 360.0);
        assert_eq!(spring.velocity, 0.0);
        assert!(spring.at_rest(360.0));
    }

    #[test]
    fn overdamped_approach_is_monotonic() {
        let params = overdamped();
        let mut spring = SpringState::new(0.0);
        let mut last = 0.0;

        for _ in 0..600 {
            spring = spring.step(90.0, FRAME, &params);
            assert!(spring.position >= last);
            assert!(spring.position <= 90.0 + params.rest_delta);
            last = spring.position;
        }
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let params = SpringParams::default();
        let spring = SpringState {
            position: 10.0,
            velocity: -3.0,
        };

        assert_eq!(spring.step(0.0, 0.0, &params), spring);
        assert_eq!(spring.step(0.0, -1.0, &params), spring);
    }

    #[test]
    fn retargeting_reawakens_a_settled_spring() {
        let params = overdamped();
        let mut spring = SpringState::new(0.0);
        for _ in 0..600 {
            spring = spring.step(90.0, FRAME, &params);
        }
        assert!(spring.at_rest(90.0));

        spring = spring.step(180.0, FRAME, &params);
        assert!(spring.position > 90.0);
        assert!(!spring.at_rest(180.0));
    }

    #[test]
    fn settle_requires_both_thresholds() {
        let params = overdamped();

        let near_but_fast = SpringState {
            position: 90.005,
            velocity: 50.0,
        };
        assert!(!near_but_fast.is_settled(90.0, &params));

        let slow_but_far = SpringState {
            position: 80.0,
            velocity: 0.5,
        };
        assert!(!slow_but_far.is_settled(90.0, &params));

        let both = SpringState {
            position: 90.005,
            velocity: 0.5,
        };
        assert!(both.is_settled(90.0, &params));
    }

    #[test]
    fn long_stall_is_clamped() {
        let params = overdamped();
        let spring = SpringState::new(0.0);

        let stalled = spring.step(360.0, 5.0, &params);
        let capped = spring.step(360.0, 0.04, &params);
        assert_eq!(stalled, capped);
    }
}
