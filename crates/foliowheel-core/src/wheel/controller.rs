//! The wheel controller.
//!
//! Owns the full input-to-rotation pipeline and advances it one frame at
//! a time. Callers feed raw input as it arrives, then call
//! [`WheelController::update`] on every frame with the current instant;
//! everything downstream of the inputs is recomputed there in dependency
//! order.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::WheelConfig;

use super::derive;
use super::input::StepAccumulator;
use super::snap::{snap_steps, snapped_angle, ResyncTimer};
use super::spring::SpringState;

/// Spring-damped step wheel.
///
/// Rotation chases the snapped angle of the accumulated raw position
/// through a damped spring; a second spring drives the bob displacement.
/// The controller is inert until [`start`](Self::start) and ignores all
/// input after [`stop`](Self::stop).
#[derive(Debug, Clone)]
pub struct WheelController {
    config: WheelConfig,
    item_count: usize,
    accumulator: StepAccumulator,
    resync: ResyncTimer,
    rotation: SpringState,
    bob: SpringState,
    active_index: usize,
    last_update: Option<Instant>,
    running: bool,
}

impl WheelController {
    pub fn new(config: WheelConfig, item_count: usize) -> Self {
        Self {
            accumulator: StepAccumulator::new(config.max_step_delta),
            resync: ResyncTimer::new(Duration::from_millis(config.resync_delay_ms)),
            rotation: SpringState::new(0.0),
            bob: SpringState::new(0.0),
            active_index: 0,
            last_update: None,
            running: false,
            item_count,
            config,
        }
    }

    /// Begin accepting input and frame updates.
    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_update = Some(now);
    }

    /// Stop the frame loop and drop any pending resync. Safe to call
    /// more than once.
    pub fn stop(&mut self) {
        self.running = false;
        self.resync.cancel();
        self.last_update = None;
    }

    /// Feed raw wheel units (device notches or pixels). The configured
    /// divisor and direction are applied before accumulation, and the
    /// quiet-period timer restarts.
    pub fn wheel(&mut self, units: f64, now: Instant) {
        if !self.running {
            return;
        }
        let direction = if self.config.invert_wheel { -1.0 } else { 1.0 };
        let delta = units / self.config.wheel_divisor * direction;
        self.accumulator.accumulate(delta);
        self.resync.arm(now);
    }

    /// Feed a discrete step amount, +1.0 forward or -1.0 back.
    pub fn step(&mut self, steps: f64, now: Instant) {
        if !self.running {
            return;
        }
        self.accumulator.step(steps);
        self.resync.arm(now);
    }

    /// Advance one frame.
    ///
    /// Order matters: an elapsed resync rewrites the raw position first,
    /// then the snapped target is recomputed, then both springs advance,
    /// and only then is derived state published. Returns the new active
    /// index when this frame changed it.
    pub fn update(&mut self, now: Instant) -> Option<usize> {
        if !self.running {
            return None;
        }

        let dt = match self.last_update {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last_update = Some(now);

        if self.resync.fire(now) {
            let whole = snap_steps(self.accumulator.raw());
            self.accumulator.rebase(whole);
            debug!(position = whole, "idle resync");
        }

        let target = snapped_angle(self.accumulator.raw(), self.config.degree_increment);
        if !self.rotation.at_rest(target) {
            self.rotation = self
                .rotation
                .step(target, dt, &self.config.rotation_spring);
        }

        let bob_target = derive::bob_target(
            self.raw_angle(),
            self.rotation.velocity,
            self.config.degree_increment,
            self.config.bob_amplitude,
            self.config.bob_max_velocity,
        );
        if !self.bob.at_rest(bob_target) {
            self.bob = self.bob.step(bob_target, dt, &self.config.bob_spring);
        }

        trace!(
            rotation = self.rotation.position,
            velocity = self.rotation.velocity,
            bob = self.bob.position,
            "frame advanced"
        );

        let index = derive::active_index(
            self.rotation.position,
            self.config.degree_increment,
            self.item_count,
        );
        if index != self.active_index {
            self.active_index = index;
            debug!(index, "active panel changed");
            Some(index)
        } else {
            None
        }
    }

    /// Return to the zero position and forget all pending input.
    pub fn reset(&mut self) {
        self.accumulator.reset();
        self.resync.cancel();
        self.rotation = SpringState::new(0.0);
        self.bob = SpringState::new(0.0);
        self.active_index = 0;
    }

    /// Sprung rotation angle, in degrees.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation.position
    }

    /// Rotation speed, in degrees per second.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.rotation.velocity
    }

    /// Unsprung accumulated angle, in degrees.
    #[inline]
    pub fn raw_angle(&self) -> f64 {
        self.accumulator.raw() * self.config.degree_increment
    }

    /// Unsprung accumulated position, in steps.
    #[inline]
    pub fn raw_position(&self) -> f64 {
        self.accumulator.raw()
    }

    /// Angle the rotation spring is currently chasing.
    pub fn snapped_angle(&self) -> f64 {
        snapped_angle(self.accumulator.raw(), self.config.degree_increment)
    }

    /// Continuous input held back by the burst limiter.
    pub fn deferred_input(&self) -> f64 {
        self.accumulator.deferred()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Sprung bob displacement. Negative is upward.
    #[inline]
    pub fn bob_offset(&self) -> f64 {
        self.bob.position
    }

    /// Fractional palette position for color cross-fading.
    pub fn color_index(&self) -> f64 {
        derive::color_index(self.rotation.position, self.item_count)
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether anything still needs per-frame updates. Used to pick the
    /// fast poll cadence while motion or a pending resync is live.
    pub fn is_animating(&self) -> bool {
        self.resync.is_armed()
            || !self.rotation.at_rest(self.snapped_angle())
            || self.bob.position != 0.0
            || self.bob.velocity != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn controller() -> WheelController {
        let mut c = WheelController::new(WheelConfig::default(), 7);
        c.start(Instant::now());
        c
    }

    fn now_of(c: &WheelController) -> Instant {
        c.last_update.unwrap()
    }

    fn run_frames(c: &mut WheelController, frames: usize) -> Instant {
        let mut now = now_of(c);
        for _ in 0..frames {
            now += FRAME;
            c.update(now);
        }
        now
    }

    #[test]
    fn four_forward_steps_settle_on_a_full_turn() {
        let mut c = controller();
        let now = now_of(&c);
        for _ in 0..4 {
            c.step(1.0, now);
        }

        run_frames(&mut c, 600);

        assert_eq!(c.rotation(), 360.0);
        assert_eq!(c.velocity(), 0.0);
        assert_eq!(c.active_index(), 4);
        assert_eq!(c.color_index(), 0.0);
    }

    #[test]
    fn opposite_steps_cancel_without_residue() {
        let mut c = controller();
        let now = now_of(&c);
        c.step(1.0, now);
        c.step(-1.0, now);

        run_frames(&mut c, 300);

        assert_eq!(c.raw_position(), 0.0);
        assert_eq!(c.snapped_angle(), 0.0);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn wheel_input_is_normalized_and_capped() {
        let mut c = controller();
        let now = now_of(&c);

        // One browser-style notch: 110 units / 220 * -1 = -0.5 steps,
        // capped to -0.03 with the remainder deferred.
        c.wheel(110.0, now);

        assert_eq!(c.raw_position(), -0.03);
        assert!((c.deferred_input() - (-0.47)).abs() < 1e-12);
    }

    #[test]
    fn idle_resync_collapses_fractional_remainders() {
        let mut c = controller();
        let now = now_of(&c);
        c.wheel(110.0, now);
        c.wheel(110.0, now);
        assert!(c.raw_position() != c.raw_position().round());

        run_frames(&mut c, 10);

        let raw = c.raw_position();
        assert_eq!(raw, raw.round());
        assert_eq!(c.raw_angle(), c.snapped_angle());
    }

    #[test]
    fn resync_waits_out_the_quiet_period() {
        let mut c = controller();
        let mut now = now_of(&c);
        c.wheel(110.0, now);

        now += Duration::from_millis(30);
        c.update(now);
        assert!(c.raw_position() != c.raw_position().round());

        c.wheel(110.0, now);
        now += Duration::from_millis(30);
        c.update(now);
        assert!(c.raw_position() != c.raw_position().round());

        now += Duration::from_millis(60);
        c.update(now);
        assert_eq!(c.raw_position(), 0.0);
    }

    #[test]
    fn mixed_key_and_wheel_input_share_one_position() {
        let mut c = controller();
        let now = now_of(&c);
        c.step(1.0, now);
        c.wheel(-110.0, now);

        assert!((c.raw_position() - 1.03).abs() < 1e-12);

        run_frames(&mut c, 600);
        assert_eq!(c.rotation(), 90.0);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn index_change_is_reported_exactly_once() {
        let mut c = controller();
        let now = now_of(&c);
        c.step(1.0, now);

        let mut changes = Vec::new();
        let mut t = now;
        for _ in 0..600 {
            t += FRAME;
            if let Some(index) = c.update(t) {
                changes.push(index);
            }
        }

        assert_eq!(changes, vec![1]);
    }

    #[test]
    fn backward_rotation_still_walks_the_panels_forward() {
        let mut c = controller();
        let now = now_of(&c);
        for _ in 0..3 {
            c.step(-1.0, now);
        }

        run_frames(&mut c, 600);

        assert_eq!(c.rotation(), -270.0);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn bob_returns_to_exactly_zero_at_rest() {
        let mut c = controller();
        let now = now_of(&c);
        c.wheel(110.0, now);

        run_frames(&mut c, 600);

        assert_eq!(c.bob_offset(), 0.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn stopped_controller_ignores_everything() {
        let mut c = controller();
        let now = now_of(&c);
        c.step(1.0, now);
        c.stop();
        c.stop();

        assert_eq!(c.update(now + Duration::from_secs(1)), None);
        assert_eq!(c.rotation(), 0.0);

        c.wheel(110.0, now);
        assert_eq!(c.raw_position(), 1.0);
    }

    #[test]
    fn stop_cancels_a_pending_resync() {
        let mut c = controller();
        let mut now = now_of(&c);
        c.wheel(110.0, now);
        c.stop();

        now += Duration::from_millis(200);
        c.start(now);
        c.update(now + FRAME);

        assert_eq!(c.raw_position(), -0.03);
    }

    #[test]
    fn reset_returns_to_the_zero_state() {
        let mut c = controller();
        let now = now_of(&c);
        c.step(3.0, now);
        run_frames(&mut c, 120);

        c.reset();

        assert_eq!(c.rotation(), 0.0);
        assert_eq!(c.raw_position(), 0.0);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.bob_offset(), 0.0);
    }

    #[test]
    fn settled_wheel_stops_requesting_fast_updates() {
        let mut c = controller();
        let now = now_of(&c);
        c.step(1.0, now);
        assert!(c.is_animating());

        run_frames(&mut c, 600);
        assert!(!c.is_animating());
    }

    #[test]
    fn empty_wheel_keeps_index_zero() {
        let mut c = WheelController::new(WheelConfig::default(), 0);
        c.start(Instant::now());
        let now = now_of(&c);
        c.step(5.0, now);

        run_frames(&mut c, 600);

        assert_eq!(c.active_index(), 0);
        assert_eq!(c.color_index(), 0.0);
    }
}
