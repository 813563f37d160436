// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Fixed-Step Scheduler
// ─────────────────────────────────────────────────────────────────────
//! Converts irregular wall-clock deltas into capped integration steps.
//!
//!   acc += Δt_wall
//!   while acc > 0:  dt = min(cap, acc);  step(dt);  acc −= dt
//!
//! No single step exceeds `cap`. The last sub-step of a call may be
//! shorter than `cap`.

use weave_types::{WeaveError, WeaveResult};

/// Accumulator-driven fixed-step scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepScheduler {
    fixed_step_cap: f64,
    accumulator: f64,
}

impl FixedStepScheduler {
    pub fn new(fixed_step_cap: f64) -> WeaveResult<Self> {
        if !(fixed_step_cap.is_finite() && fixed_step_cap > 0.0) {
            return Err(WeaveError::Config(format!(
                "fixed_step_cap must be finite and > 0, got {fixed_step_cap}"
            )));
        }
        Ok(Self {
            fixed_step_cap,
            accumulator: 0.0,
        })
    }

    pub fn fixed_step_cap(&self) -> f64 {
        self.fixed_step_cap
    }

    /// Simulated time received but not yet integrated.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Upper bound on sub-steps for one `advance(delta)` call.
    pub fn max_substeps(&self, delta: f64) -> usize {
        if delta.is_finite() && delta > 0.0 {
            (delta / self.fixed_step_cap).ceil() as usize
        } else {
            0
        }
    }

    /// Feed `delta` and invoke `step` once per sub-step with its `dt`.
    ///
    /// Returns the number of sub-steps run. Non-finite and non-positive
    /// deltas are dropped without touching the accumulator.
    pub fn advance<F: FnMut(f64)>(&mut self, delta: f64, mut step: F) -> usize {
        if !delta.is_finite() {
            log::warn!("scheduler: ignoring non-finite wall-clock delta {delta}");
            return 0;
        }
        if delta <= 0.0 {
            return 0;
        }

        self.accumulator += delta;
        let mut substeps = 0;
        while self.accumulator > 0.0 {
            let dt = self.fixed_step_cap.min(self.accumulator);
            step(dt);
            self.accumulator -= dt;
            substeps += 1;
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
