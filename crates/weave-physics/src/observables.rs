// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Field Observables
// ─────────────────────────────────────────────────────────────────────
//! Summary statistics over a committed field. NaN/Inf-tolerant: NaN is
//! skipped by the extrema and counted in `non_finite`.

use serde::{Deserialize, Serialize};

use crate::field::FieldState;

/// Scalar diagnostics of one field state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub min_potential: f64,
    pub max_potential: f64,
    pub mean_potential: f64,
    /// Σ φ over all cells.
    pub potential_mass: f64,
    pub max_abs_potential: f64,
    /// max |v| over all cells.
    pub max_speed: f64,
    /// Σ ½ (vx² + vy²).
    pub kinetic_energy: f64,
    /// NaN/Inf values across all three grids.
    pub non_finite: usize,
}

impl FieldStats {
    pub fn measure(field: &FieldState) -> Self {
        let phi = field.potential();
        let vx = field.velocity_x();
        let vy = field.velocity_y();
        let n = phi.len();
        if n == 0 {
            return Self {
                min_potential: 0.0,
                max_potential: 0.0,
                mean_potential: 0.0,
                potential_mass: 0.0,
                max_abs_potential: 0.0,
                max_speed: 0.0,
                kinetic_energy: 0.0,
                non_finite: 0,
            };
        }

        let mut min_potential = f64::INFINITY;
        let mut max_potential = f64::NEG_INFINITY;
        let mut max_abs_potential = 0.0f64;
        let mut potential_mass = 0.0;
        for &p in phi {
            min_potential = min_potential.min(p);
            max_potential = max_potential.max(p);
            max_abs_potential = max_abs_potential.max(p.abs());
            potential_mass += p;
        }

        let mut max_speed = 0.0f64;
        let mut kinetic_energy = 0.0;
        for (&u, &v) in vx.iter().zip(vy.iter()) {
            let s2 = u * u + v * v;
            max_speed = max_speed.max(s2.sqrt());
            kinetic_energy += 0.5 * s2;
        }

        let non_finite = field.values().filter(|v| !v.is_finite()).count();

        Self {
            min_potential,
            max_potential,
            mean_potential: potential_mass / n as f64,
            potential_mass,
            max_abs_potential,
            max_speed,
            kinetic_energy,
            non_finite,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.non_finite == 0
    }
}
