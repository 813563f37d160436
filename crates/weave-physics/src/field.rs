// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Field State
// ─────────────────────────────────────────────────────────────────────
//! Pre-allocated field grids: scalar potential φ and velocity (vx, vy).
//!
//! `FieldBuffers` keeps two complete field sets. Each step reads only the
//! committed (front) set and writes the scratch (back) set, then swaps.

use weave_types::WeaveResult;

use crate::lattice::Lattice;

/// Three co-indexed dense grids on one lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    potential: Vec<f64>,
    velocity_x: Vec<f64>,
    velocity_y: Vec<f64>,
}

impl FieldState {
    /// Allocate a zero-filled field of `n` cells.
    pub fn zeros(n: usize) -> Self {
        Self {
            potential: vec![0.0; n],
            velocity_x: vec![0.0; n],
            velocity_y: vec![0.0; n],
        }
    }

    /// Build a field from explicit grids, checking each against the lattice.
    pub fn from_grids(
        lattice: &Lattice,
        potential: Vec<f64>,
        velocity_x: Vec<f64>,
        velocity_y: Vec<f64>,
    ) -> WeaveResult<Self> {
        lattice.check_grid(&potential)?;
        lattice.check_grid(&velocity_x)?;
        lattice.check_grid(&velocity_y)?;
        Ok(Self {
            potential,
            velocity_x,
            velocity_y,
        })
    }

    pub fn len(&self) -> usize {
        self.potential.len()
    }

    pub fn is_empty(&self) -> bool {
        self.potential.is_empty()
    }

    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    pub fn velocity_x(&self) -> &[f64] {
        &self.velocity_x
    }

    pub fn velocity_y(&self) -> &[f64] {
        &self.velocity_y
    }

    /// Zero every grid in place.
    pub fn clear(&mut self) {
        self.potential.fill(0.0);
        self.velocity_x.fill(0.0);
        self.velocity_y.fill(0.0);
    }

    /// Add offsets to cell `i`. Only called between committed steps.
    #[inline]
    pub(crate) fn add_at(&mut self, i: usize, d_potential: f64, d_vx: f64, d_vy: f64) {
        self.potential[i] += d_potential;
        self.velocity_x[i] += d_vx;
        self.velocity_y[i] += d_vy;
    }

    /// Mutable views of (φ, vx, vy) for the integrator.
    #[inline]
    pub(crate) fn grids_mut(&mut self) -> (&mut [f64], &mut [f64], &mut [f64]) {
        (
            self.potential.as_mut_slice(),
            self.velocity_x.as_mut_slice(),
            self.velocity_y.as_mut_slice(),
        )
    }

    /// Iterator over every value of all three grids.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.potential
            .iter()
            .chain(self.velocity_x.iter())
            .chain(self.velocity_y.iter())
            .copied()
    }
}

/// Double-buffered field: `front` is committed, `back` is scratch.
#[derive(Debug, Clone)]
pub struct FieldBuffers {
    front: FieldState,
    back: FieldState,
}

impl FieldBuffers {
    pub fn new(n: usize) -> Self {
        Self {
            front: FieldState::zeros(n),
            back: FieldState::zeros(n),
        }
    }

    /// The committed field.
    pub fn front(&self) -> &FieldState {
        &self.front
    }

    pub(crate) fn front_mut(&mut self) -> &mut FieldState {
        &mut self.front
    }

    /// Committed field (read) and scratch field (write) at once.
    pub(crate) fn split(&mut self) -> (&FieldState, &mut FieldState) {
        (&self.front, &mut self.back)
    }

    /// Publish the scratch field. Every cell of `back` must have been written.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Replace the committed field.
    pub(crate) fn replace(&mut self, field: FieldState) {
        self.front = field;
    }

    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let f = FieldState::zeros(12);
        assert_eq!(f.len(), 12);
        assert!(!f.is_empty());
        assert!(f.values().all(|v| v == 0.0));
    }

    #[test]
    fn test_from_grids_checks_lengths() {
        let l = Lattice::new(3, 2, 3.0, 2.0).unwrap();
        assert!(FieldState::from_grids(&l, vec![0.0; 6], vec![0.0; 6], vec![0.0; 6]).is_ok());
        assert!(FieldState::from_grids(&l, vec![0.0; 6], vec![0.0; 5], vec![0.0; 6]).is_err());
    }

    #[test]
    fn test_add_and_clear() {
        let mut f = FieldState::zeros(4);
        f.add_at(2, 1.0, -0.5, 0.25);
        assert_eq!(f.potential()[2], 1.0);
        assert_eq!(f.velocity_x()[2], -0.5);
        assert_eq!(f.velocity_y()[2], 0.25);
        f.clear();
        assert!(f.values().all(|v| v == 0.0));
    }

    #[test]
    fn test_commit_swaps() {
        let mut b = FieldBuffers::new(3);
        {
            let (front, back) = b.split();
            assert_eq!(front.potential()[0], 0.0);
            let (p, _, _) = back.grids_mut();
            p[0] = 5.0;
        }
        assert_eq!(b.front().potential()[0], 0.0);
        b.commit();
        assert_eq!(b.front().potential()[0], 5.0);
    }
}
