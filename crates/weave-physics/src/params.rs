// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Canonical Parameters
// ─────────────────────────────────────────────────────────────────────
//! Fixed numerical constants and the host-mutable coupling parameters.

use serde::{Deserialize, Serialize};

use weave_types::WeaveConfig;

/// Largest single integration step (simulated time units).
pub const DEFAULT_FIXED_STEP_CAP: f64 = 0.03;

/// Potential snapshots retained by the delay line.
pub const DEFAULT_MAX_DELAY: usize = 60;

/// Per-step velocity retention, applied after the damped update.
///
/// Fixed per step; it is not scaled by `dt`.
pub const VELOCITY_RETENTION: f64 = 0.999;

/// Clamp a requested delay into `[0, capacity - 1]`.
#[inline]
pub fn clamp_delay(depth: i64, capacity: usize) -> usize {
    let max = i64::try_from(capacity.saturating_sub(1)).unwrap_or(i64::MAX);
    depth.clamp(0, max) as usize
}

/// Coupling parameters read by every integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParameters {
    /// Restoring-force gain on the delayed potential gradient.
    pub lambda: f64,
    /// Linear velocity damping.
    pub nu: f64,
    /// Delay in steps, already clamped to the delay line capacity.
    pub delay_depth: usize,
}

impl SimParameters {
    pub fn new(lambda: f64, nu: f64, delay_depth: i64, capacity: usize) -> Self {
        Self {
            lambda,
            nu,
            delay_depth: clamp_delay(delay_depth, capacity),
        }
    }

    pub fn from_config(config: &WeaveConfig) -> Self {
        Self::new(config.lambda, config.nu, config.delay_depth, config.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_delay_range() {
        assert_eq!(clamp_delay(-5, 60), 0);
        assert_eq!(clamp_delay(0, 60), 0);
        assert_eq!(clamp_delay(17, 60), 17);
        assert_eq!(clamp_delay(59, 60), 59);
        assert_eq!(clamp_delay(60, 60), 59);
        assert_eq!(clamp_delay(i64::MAX, 60), 59);
    }

    #[test]
    fn test_clamp_delay_single_slot() {
        assert_eq!(clamp_delay(3, 1), 0);
        assert_eq!(clamp_delay(3, 0), 0);
    }

    #[test]
    fn test_from_config() {
        let cfg = WeaveConfig {
            delay_depth: 500,
            ..WeaveConfig::default()
        };
        let p = SimParameters::from_config(&cfg);
        assert_eq!(p.delay_depth, DEFAULT_MAX_DELAY - 1);
        assert_eq!(p.lambda, 1.0);
        assert_eq!(p.nu, 0.1);
    }

    #[test]
    fn test_defaults_match_config() {
        let cfg = WeaveConfig::default();
        assert_eq!(cfg.max_delay, DEFAULT_MAX_DELAY);
        assert_eq!(cfg.fixed_step_cap, DEFAULT_FIXED_STEP_CAP);
    }
}
