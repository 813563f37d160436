// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Lattice
// ─────────────────────────────────────────────────────────────────────
//! Fixed rectangular lattice with centred finite-difference operators.
//!
//!   ∂f/∂x ≈ (f(x+1, y) − f(x−1, y)) / (2·Δx)
//!   ∂f/∂y ≈ (f(x, y+1) − f(x, y−1)) / (2·Δy)
//!
//! Edge cells contribute zero to the partial normal to their edge: no
//! wraparound and no reflection. Corners have both partials zero.

use weave_types::{WeaveConfig, WeaveError, WeaveResult};

/// Row-major 2D index space with uniform cell geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    columns: usize,
    rows: usize,
    cell_width: f64,
    cell_height: f64,
}

impl Lattice {
    /// Build a lattice covering `extent_x × extent_y` with `columns × rows` cells.
    pub fn new(columns: usize, rows: usize, extent_x: f64, extent_y: f64) -> WeaveResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(WeaveError::Config(format!(
                "lattice must be at least 1x1, got {columns}x{rows}"
            )));
        }
        if !(extent_x.is_finite() && extent_x > 0.0 && extent_y.is_finite() && extent_y > 0.0) {
            return Err(WeaveError::Config(format!(
                "lattice extent must be finite and positive, got {extent_x}x{extent_y}"
            )));
        }
        Ok(Self {
            columns,
            rows,
            cell_width: extent_x / columns as f64,
            cell_height: extent_y / rows as f64,
        })
    }

    pub fn from_config(config: &WeaveConfig) -> WeaveResult<Self> {
        Self::new(config.columns, config.rows, config.extent_x, config.extent_y)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Number of cells; every grid on this lattice has this length.
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    /// Inverse of [`Lattice::index`].
    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i % self.columns, i / self.columns)
    }

    /// Reject grids whose length does not match this lattice.
    pub fn check_grid(&self, grid: &[f64]) -> WeaveResult<()> {
        if grid.len() != self.cell_count() {
            return Err(WeaveError::Dimension {
                expected: self.cell_count(),
                got: grid.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn d_dx(&self, f: &[f64], x: usize, y: usize) -> f64 {
        if x > 0 && x + 1 < self.columns {
            (f[self.index(x + 1, y)] - f[self.index(x - 1, y)]) / (2.0 * self.cell_width)
        } else {
            0.0
        }
    }

    #[inline]
    fn d_dy(&self, f: &[f64], x: usize, y: usize) -> f64 {
        if y > 0 && y + 1 < self.rows {
            (f[self.index(x, y + 1)] - f[self.index(x, y - 1)]) / (2.0 * self.cell_height)
        } else {
            0.0
        }
    }

    /// ∇·v at (x, y).
    #[inline]
    pub fn divergence(&self, vx: &[f64], vy: &[f64], x: usize, y: usize) -> f64 {
        self.d_dx(vx, x, y) + self.d_dy(vy, x, y)
    }

    /// ∇f at (x, y) as (∂f/∂x, ∂f/∂y).
    #[inline]
    pub fn gradient(&self, f: &[f64], x: usize, y: usize) -> (f64, f64) {
        (self.d_dx(f, x, y), self.d_dy(f, x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lattice_4x4() -> Lattice {
        Lattice::new(4, 4, 4.0, 8.0).unwrap()
    }

    #[test]
    fn test_geometry() {
        let l = lattice_4x4();
        assert_eq!(l.cell_count(), 16);
        assert_relative_eq!(l.cell_width(), 1.0);
        assert_relative_eq!(l.cell_height(), 2.0);
    }

    #[test]
    fn test_index_row_major() {
        let l = Lattice::new(5, 3, 5.0, 3.0).unwrap();
        assert_eq!(l.index(0, 0), 0);
        assert_eq!(l.index(4, 0), 4);
        assert_eq!(l.index(0, 1), 5);
        assert_eq!(l.index(2, 2), 12);
        for i in 0..l.cell_count() {
            let (x, y) = l.coords(i);
            assert_eq!(l.index(x, y), i);
        }
        assert!(l.contains(4, 2));
        assert!(!l.contains(5, 0));
        assert!(!l.contains(0, 3));
    }

    #[test]
    fn test_invalid_lattice_rejected() {
        assert!(Lattice::new(0, 4, 1.0, 1.0).is_err());
        assert!(Lattice::new(4, 0, 1.0, 1.0).is_err());
        assert!(Lattice::new(4, 4, 0.0, 1.0).is_err());
        assert!(Lattice::new(4, 4, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_check_grid() {
        let l = lattice_4x4();
        assert!(l.check_grid(&[0.0; 16]).is_ok());
        assert_eq!(
            l.check_grid(&[0.0; 15]),
            Err(WeaveError::Dimension {
                expected: 16,
                got: 15
            })
        );
    }

    #[test]
    fn test_gradient_of_linear_ramp() {
        // f = 3x + 5y on Δx = 1, Δy = 2
        let l = lattice_4x4();
        let f: Vec<f64> = (0..16)
            .map(|i| {
                let (x, y) = l.coords(i);
                3.0 * x as f64 + 5.0 * y as f64
            })
            .collect();
        let (gx, gy) = l.gradient(&f, 1, 2);
        assert_relative_eq!(gx, 3.0);
        assert_relative_eq!(gy, 2.5);
    }

    #[test]
    fn test_divergence_of_radial_field() {
        // v = (x, y) on unit cells → ∇·v = 2
        let l = Lattice::new(5, 5, 5.0, 5.0).unwrap();
        let mut vx = vec![0.0; 25];
        let mut vy = vec![0.0; 25];
        for i in 0..25 {
            let (x, y) = l.coords(i);
            vx[i] = x as f64;
            vy[i] = y as f64;
        }
        assert_relative_eq!(l.divergence(&vx, &vy, 2, 2), 2.0);
    }

    #[test]
    fn test_boundary_inertness_left_edge() {
        // Only an x = 0 cell is perturbed; its x partial must vanish
        // regardless of the values around it.
        let l = lattice_4x4();
        let mut f = vec![0.0; 16];
        f[l.index(0, 1)] = 123.0;
        f[l.index(1, 1)] = -7.0;
        let (gx, _) = l.gradient(&f, 0, 1);
        assert_eq!(gx, 0.0);

        let vy = vec![0.0; 16];
        assert_eq!(l.divergence(&f, &vy, 0, 1), 0.0);
    }

    #[test]
    fn test_boundary_inertness_all_edges() {
        let l = lattice_4x4();
        let f: Vec<f64> = (0..16).map(|i| (i as f64 * 1.7).sin() * 10.0).collect();
        for y in 0..4 {
            for x in 0..4 {
                let (gx, gy) = l.gradient(&f, x, y);
                if x == 0 || x == 3 {
                    assert_eq!(gx, 0.0, "gx at ({x},{y})");
                }
                if y == 0 || y == 3 {
                    assert_eq!(gy, 0.0, "gy at ({x},{y})");
                }
            }
        }
        // Corners: both partials zero.
        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert_eq!(l.gradient(&f, x, y), (0.0, 0.0));
            assert_eq!(l.divergence(&f, &f, x, y), 0.0);
        }
    }

    #[test]
    fn test_single_column_lattice_is_inert_in_x() {
        let l = Lattice::new(1, 3, 1.0, 3.0).unwrap();
        let f = vec![1.0, 4.0, 9.0];
        let (gx, gy) = l.gradient(&f, 0, 1);
        assert_eq!(gx, 0.0);
        assert_relative_eq!(gy, 4.0);
    }

    #[test]
    fn test_nan_passes_through() {
        let l = lattice_4x4();
        let mut f = vec![0.0; 16];
        f[l.index(2, 1)] = f64::NAN;
        let (gx, gy) = l.gradient(&f, 1, 1);
        assert!(gx.is_nan());
        assert_eq!(gy, 0.0);
    }
}
