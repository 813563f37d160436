// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{WeaveError, WeaveResult};

/// Runtime configuration for a Gradient Weave simulation.
///
/// Lattice shape, step cap, and delay capacity are fixed for the
/// lifetime of a simulation. `lambda`, `nu`, and `delay_depth` are only
/// the initial coupling parameters; the host may change them between
/// steps without re-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaveConfig {
    /// Lattice width in cells.
    /// Default: 48.
    pub columns: usize,

    /// Lattice height in cells.
    /// Default: 32.
    pub rows: usize,

    /// Physical width covered by the lattice; `cell_width = extent_x / columns`.
    /// Default: 480.0.
    pub extent_x: f64,

    /// Physical height covered by the lattice; `cell_height = extent_y / rows`.
    /// Default: 320.0.
    pub extent_y: f64,

    /// Restoring-force gain on the delayed potential gradient.
    /// Default: 1.0.
    pub lambda: f64,

    /// Linear velocity damping.
    /// Default: 0.1.
    pub nu: f64,

    /// Delay in steps; clamped to `[0, max_delay - 1]` when applied.
    /// Default: 10.
    pub delay_depth: i64,

    /// Largest single integration step in simulated time units.
    /// Default: 0.03.
    pub fixed_step_cap: f64,

    /// Number of potential snapshots retained by the delay line.
    /// Default: 60.
    pub max_delay: usize,

    /// Cells touched by a default kick.
    /// Default: 40.
    pub kick_count: usize,

    /// Half-width of the uniform potential offset applied by a kick.
    /// Default: 1.0.
    pub kick_potential_amplitude: f64,

    /// Half-width of the uniform velocity offset applied by a kick.
    /// Default: 0.4.
    pub kick_velocity_amplitude: f64,

    /// Seed for the perturbation RNG.
    /// Default: 42.
    pub seed: u64,

    /// Apply one default kick right after construction.
    /// Default: false (a fresh simulation is exactly zero).
    pub initial_kick: bool,
}

impl Default for WeaveConfig {
    fn default() -> Self {
        Self {
            columns: 48,
            rows: 32,
            extent_x: 480.0,
            extent_y: 320.0,
            lambda: 1.0,
            nu: 0.1,
            delay_depth: 10,
            fixed_step_cap: 0.03,
            max_delay: 60,
            kick_count: 40,
            kick_potential_amplitude: 1.0,
            kick_velocity_amplitude: 0.4,
            seed: 42,
            initial_kick: false,
        }
    }
}

impl WeaveConfig {
    /// Validate the structural parameters.
    ///
    /// `lambda`, `nu`, and `delay_depth` are deliberately left alone:
    /// destabilising values are the caller's choice and depth is clamped.
    pub fn validate(&self) -> WeaveResult<()> {
        if self.columns < 1 {
            return Err(WeaveError::Config(format!(
                "columns must be >= 1, got {}",
                self.columns
            )));
        }
        if self.rows < 1 {
            return Err(WeaveError::Config(format!(
                "rows must be >= 1, got {}",
                self.rows
            )));
        }
        if !(self.extent_x.is_finite() && self.extent_x > 0.0) {
            return Err(WeaveError::Config(format!(
                "extent_x must be finite and > 0, got {}",
                self.extent_x
            )));
        }
        if !(self.extent_y.is_finite() && self.extent_y > 0.0) {
            return Err(WeaveError::Config(format!(
                "extent_y must be finite and > 0, got {}",
                self.extent_y
            )));
        }
        if !(self.fixed_step_cap.is_finite() && self.fixed_step_cap > 0.0) {
            return Err(WeaveError::Config(format!(
                "fixed_step_cap must be finite and > 0, got {}",
                self.fixed_step_cap
            )));
        }
        if self.max_delay < 1 {
            return Err(WeaveError::Config(format!(
                "max_delay must be >= 1, got {}",
                self.max_delay
            )));
        }
        if !(self.kick_potential_amplitude.is_finite() && self.kick_potential_amplitude >= 0.0) {
            return Err(WeaveError::Config(format!(
                "kick_potential_amplitude must be finite and >= 0, got {}",
                self.kick_potential_amplitude
            )));
        }
        if !(self.kick_velocity_amplitude.is_finite() && self.kick_velocity_amplitude >= 0.0) {
            return Err(WeaveError::Config(format!(
                "kick_velocity_amplitude must be finite and >= 0, got {}",
                self.kick_velocity_amplitude
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> WeaveResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| WeaveError::Config(format!("JSON parse error: {e}")))
    }

    /// Total number of lattice cells.
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}
