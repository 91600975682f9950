//! Input accumulation and burst limiting.

/// Caps how far a single continuous-input sample may move the raw
/// position. Whatever exceeds the cap is parked in an offset rather than
/// discarded, so a violent fling still only advances one bounded amount
/// per sample while the stream totals stay consistent.
#[derive(Debug, Clone)]
pub struct BurstLimiter {
    max_delta: f64,
    offset: f64,
}

impl BurstLimiter {
    pub fn new(max_delta: f64) -> Self {
        Self {
            max_delta,
            offset: 0.0,
        }
    }

    /// Admit one sample delta, diverting the excess into the offset.
    /// Returns the admitted portion.
    pub fn admit(&mut self, delta: f64) -> f64 {
        let admitted = delta.clamp(-self.max_delta, self.max_delta);
        self.offset += delta - admitted;
        admitted
    }

    /// Input absorbed so far but never applied.
    pub fn deferred(&self) -> f64 {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

/// Accumulates every input source into one unbounded step position.
///
/// Wheel samples arrive pre-normalized to steps and pass through the
/// burst limiter; key presses are already discrete whole steps and skip
/// it. Downstream consumers only ever see the merged raw position.
#[derive(Debug, Clone)]
pub struct StepAccumulator {
    raw: f64,
    limiter: BurstLimiter,
}

impl StepAccumulator {
    pub fn new(max_step_delta: f64) -> Self {
        Self {
            raw: 0.0,
            limiter: BurstLimiter::new(max_step_delta),
        }
    }

    /// Feed one continuous sample delta, in steps.
    pub fn accumulate(&mut self, delta: f64) {
        self.raw += self.limiter.admit(delta);
    }

    /// Feed one discrete step amount, uncapped.
    pub fn step(&mut self, steps: f64) {
        self.raw += steps;
    }

    /// Overwrite the raw position. Used by the idle resync to collapse a
    /// fractional remainder onto a whole step.
    pub fn rebase(&mut self, position: f64) {
        self.raw = position;
    }

    /// The merged raw position, in steps.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Continuous input held back by the burst limiter.
    pub fn deferred(&self) -> f64 {
        self.limiter.deferred()
    }

    pub fn reset(&mut self) {
        self.raw = 0.0;
        self.limiter.reset();
    }
}
