// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Delayed-Feedback Integrator
// ─────────────────────────────────────────────────────────────────────
//! Forward-Euler step of the delayed continuity/feedback system:
//!
//!   ∂φ/∂t = −∇·v
//!   ∂v/∂t = −λ ∇φ(t − τ) − ν v
//!
//! followed by a fixed per-step velocity retention of 0.999. τ is the
//! delay line depth in steps. First-order and explicit: stability is the
//! caller's responsibility through the fixed-step cap. NaN/Inf propagate.

use crate::delay_line::DelayLine;
use crate::field::{FieldBuffers, FieldState};
use crate::lattice::Lattice;
use crate::params::{SimParameters, VELOCITY_RETENTION};

/// Compute `next` from `current` and the delayed potential.
///
/// Every cell of `next` is overwritten and only `current`/`delayed` are
/// read, so no cell sees another cell's post-step value.
pub fn integrate(
    lattice: &Lattice,
    current: &FieldState,
    delayed: &[f64],
    params: &SimParameters,
    dt: f64,
    next: &mut FieldState,
) {
    let phi = current.potential();
    let vx = current.velocity_x();
    let vy = current.velocity_y();
    let (new_phi, new_vx, new_vy) = next.grids_mut();

    let lambda = params.lambda;
    let nu = params.nu;

    for y in 0..lattice.rows() {
        for x in 0..lattice.columns() {
            let i = lattice.index(x, y);

            // Continuity: φ falls where v diverges outward
            let div = lattice.divergence(vx, vy, x, y);
            new_phi[i] = phi[i] + (-div) * dt;

            // Delayed restoring force + damping
            let (gx, gy) = lattice.gradient(delayed, x, y);
            let dvx = (-lambda * gx - nu * vx[i]) * dt;
            let dvy = (-lambda * gy - nu * vy[i]) * dt;
            new_vx[i] = (vx[i] + dvx) * VELOCITY_RETENTION;
            new_vy[i] = (vy[i] + dvy) * VELOCITY_RETENTION;
        }
    }
}

/// Owns the lattice, double-buffered field, and delay line, and advances
/// them one fixed step at a time.
pub struct FieldStepper {
    lattice: Lattice,
    buffers: FieldBuffers,
    delay_line: DelayLine,
}

impl FieldStepper {
    pub fn new(lattice: Lattice, max_delay: usize) -> Self {
        let n = lattice.cell_count();
        Self {
            lattice,
            buffers: FieldBuffers::new(n),
            delay_line: DelayLine::new(max_delay, n),
        }
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The committed field.
    pub fn field(&self) -> &FieldState {
        self.buffers.front()
    }

    pub(crate) fn field_mut(&mut self) -> &mut FieldState {
        self.buffers.front_mut()
    }

    pub(crate) fn replace_field(&mut self, field: FieldState) {
        self.buffers.replace(field);
    }

    pub fn delay_line(&self) -> &DelayLine {
        &self.delay_line
    }

    /// Advance by one step of size `dt`.
    ///
    /// 1. Record the pre-step potential.
    /// 2. Read the potential `delay_depth` records back.
    /// 3. Integrate into the scratch buffer.
    /// 4. Swap.
    pub fn step(&mut self, params: &SimParameters, dt: f64) {
        self.delay_line.record(self.buffers.front().potential());
        let delayed = self.delay_line.read(params.delay_depth);
        let (current, next) = self.buffers.split();
        integrate(&self.lattice, current, delayed, params, dt, next);
        self.buffers.commit();
    }

    /// Zero both field buffers and the delay line.
    pub fn clear(&mut self) {
        self.buffers.clear();
        self.delay_line.clear();
    }
}
