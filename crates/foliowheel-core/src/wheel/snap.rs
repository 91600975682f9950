//! Discrete snapping and the idle resync timer.

use std::time::{Duration, Instant};

/// Nearest whole step for a raw position. Halfway points round away
/// from zero, so +0.5 commits forward and -0.5 commits backward.
#[inline]
pub fn snap_steps(raw: f64) -> f64 {
    raw.round()
}

/// Snapped angle for a raw position, in degrees.
#[inline]
pub fn snapped_angle(raw: f64, degree_increment: f64) -> f64 {
    snap_steps(raw) * degree_increment
}

/// One-shot deadline marking the end of an input quiet period.
///
/// Every input sample re-arms it, pushing the deadline out; once input
/// stops the deadline elapses and [`ResyncTimer::fire`] reports true
/// exactly once. Cancelling is idempotent so teardown paths can call it
/// unconditionally.
#[derive(Debug, Clone)]
pub struct ResyncTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ResyncTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start (or restart) the quiet period as of `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True once the quiet period has elapsed. Consumes the deadline, so
    /// a single arm yields at most one firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
