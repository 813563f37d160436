// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Field Snapshot
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Clamp a value to [lo, hi], mapping NaN to 0 (pulled into range) and
/// Inf to the nearest bound.
///
/// Uses `max`/`min` rather than `f64::clamp` so that odd bounds never panic.
#[inline]
pub fn sanitize_value(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return 0.0f64.max(lo).min(hi);
    }
    if value.is_infinite() {
        return if value > 0.0 { hi } else { lo };
    }
    value.max(lo).min(hi)
}

/// Owned, read-only copy of a committed field state.
///
/// Row-major, `index = y * columns + x`, matching the lattice layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub columns: usize,
    pub rows: usize,
    /// Committed fixed steps at capture time.
    pub step_count: u64,
    /// Simulated time at capture time.
    pub time: f64,
    pub potential: Vec<f64>,
    pub velocity_x: Vec<f64>,
    pub velocity_y: Vec<f64>,
}

impl FieldSnapshot {
    #[inline]
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.columns && y < self.rows {
            Some(y * self.columns + x)
        } else {
            None
        }
    }

    /// Potential at (x, y); 0.0 outside the lattice.
    pub fn potential_at(&self, x: usize, y: usize) -> f64 {
        self.offset(x, y).map_or(0.0, |i| self.potential[i])
    }

    /// Velocity at (x, y); (0, 0) outside the lattice.
    pub fn velocity_at(&self, x: usize, y: usize) -> (f64, f64) {
        self.offset(x, y)
            .map_or((0.0, 0.0), |i| (self.velocity_x[i], self.velocity_y[i]))
    }

    /// Number of NaN/Inf values across all three grids.
    pub fn non_finite_count(&self) -> usize {
        self.potential
            .iter()
            .chain(self.velocity_x.iter())
            .chain(self.velocity_y.iter())
            .filter(|v| !v.is_finite())
            .count()
    }

    /// Render-safe copy with every value clamped to [lo, hi].
    ///
    /// NaN maps to 0 and Inf to the nearest bound.
    pub fn sanitized(&self, lo: f64, hi: f64) -> FieldSnapshot {
        let bad = self.non_finite_count();
        if bad > 0 {
            log::warn!(
                "snapshot at step {}: {bad} non-finite values clamped to [{lo:.4}, {hi:.4}]",
                self.step_count
            );
        }
        let clamp_all =
            |grid: &[f64]| -> Vec<f64> { grid.iter().map(|&v| sanitize_value(v, lo, hi)).collect() };
        FieldSnapshot {
            columns: self.columns,
            rows: self.rows,
            step_count: self.step_count,
            time: self.time,
            potential: clamp_all(&self.potential),
            velocity_x: clamp_all(&self.velocity_x),
            velocity_y: clamp_all(&self.velocity_y),
        }
    }
}
