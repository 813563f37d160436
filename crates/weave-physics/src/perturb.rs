// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Perturbation
// ─────────────────────────────────────────────────────────────────────
//! Random kicks applied between committed steps.

use rand::Rng;

use crate::field::FieldState;

/// Half-widths of the uniform offsets a kick adds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickAmplitudes {
    pub potential: f64,
    pub velocity: f64,
}

impl Default for KickAmplitudes {
    fn default() -> Self {
        Self {
            potential: 1.0,
            velocity: 0.4,
        }
    }
}

#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * 2.0 * amplitude
}

/// Add random offsets to `count` uniformly chosen cells (with replacement).
///
/// Potential offsets lie in `[-A_φ, A_φ)`, each velocity component in
/// `[-A_v, A_v)`. Returns the number of cells touched.
pub fn random_kick<R: Rng + ?Sized>(
    rng: &mut R,
    field: &mut FieldState,
    count: usize,
    amplitudes: KickAmplitudes,
) -> usize {
    let n = field.len();
    if n == 0 {
        return 0;
    }
    for _ in 0..count {
        let i = rng.gen_range(0..n);
        let d_potential = symmetric(rng, amplitudes.potential);
        let d_vx = symmetric(rng, amplitudes.velocity);
        let d_vy = symmetric(rng, amplitudes.velocity);
        field.add_at(i, d_potential, d_vx, d_vy);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_kick_bounded_and_sparse() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = FieldState::zeros(400);
        let amps = KickAmplitudes::default();
        assert_eq!(random_kick(&mut rng, &mut field, 1, amps), 1);

        let touched: Vec<usize> = (0..400)
            .filter(|&i| field.potential()[i] != 0.0 || field.velocity_x()[i] != 0.0)
            .collect();
        assert_eq!(touched.len(), 1);
        let i = touched[0];
        assert!(field.potential()[i].abs() <= 1.0);
        assert!(field.velocity_x()[i].abs() <= 0.4);
        assert!(field.velocity_y()[i].abs() <= 0.4);
    }

    #[test]
    fn test_kick_touches_at_most_count_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = FieldState::zeros(1000);
        random_kick(&mut rng, &mut field, 40, KickAmplitudes::default());
        let touched = field.potential().iter().filter(|&&v| v != 0.0).count();
        assert!(touched >= 1 && touched <= 40, "touched={touched}");
    }

    #[test]
    fn test_kick_seeded_reproducible() {
        let mut a = FieldState::zeros(64);
        let mut b = FieldState::zeros(64);
        random_kick(&mut StdRng::seed_from_u64(3), &mut a, 20, KickAmplitudes::default());
        random_kick(&mut StdRng::seed_from_u64(3), &mut b, 20, KickAmplitudes::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_amplitude_is_noop() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = FieldState::zeros(16);
        let amps = KickAmplitudes {
            potential: 0.0,
            velocity: 0.0,
        };
        random_kick(&mut rng, &mut field, 10, amps);
        assert!(field.values().all(|v| v == 0.0));
    }

    #[test]
    fn test_empty_field() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = FieldState::zeros(0);
        assert_eq!(random_kick(&mut rng, &mut field, 10, KickAmplitudes::default()), 0);
    }
}
