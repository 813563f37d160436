// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Physics Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Delayed-feedback lattice field solver.
//!
//!   ∂φ/∂t = −∇·v
//!   ∂v/∂t = −λ ∇φ(t − τ) − ν v
//!
//! Architecture:
//!   - Lattice: rectangular index space + centred differences, inert edges
//!   - FieldState / FieldBuffers: double-buffered (φ, vx, vy) grids
//!   - DelayLine: fixed ring of past φ snapshots
//!   - integrator: forward-Euler step reading the delayed φ
//!   - FixedStepScheduler: wall-clock deltas → capped sub-steps
//!   - perturb: seeded random kicks between steps
//!   - WeaveSimulation: host-facing facade
//!
//! # Invariants
//!
//! 1. **Pre-step reads only**: every cell of step n+1 is computed from the
//!    committed step-n buffers; the scratch buffer is published by a swap.
//!
//! 2. **No future state in the delay line**: the pre-step potential is
//!    recorded before integration, so depth 0 reads that snapshot and never
//!    the potential being computed.
//!
//! 3. **Bounded steps**: no integration step exceeds `fixed_step_cap`.
//!
//! 4. **No traps on NaN/Inf**: numerical blow-up propagates silently and
//!    is reported only through `FieldStats` and `ensure_finite`.

pub mod delay_line;
pub mod field;
pub mod integrator;
pub mod lattice;
pub mod observables;
pub mod params;
pub mod perturb;
pub mod scheduler;
pub mod simulation;

pub use delay_line::DelayLine;
pub use field::{FieldBuffers, FieldState};
pub use integrator::{integrate, FieldStepper};
pub use lattice::Lattice;
pub use observables::FieldStats;
pub use params::{
    clamp_delay, SimParameters, DEFAULT_FIXED_STEP_CAP, DEFAULT_MAX_DELAY, VELOCITY_RETENTION,
};
pub use perturb::{random_kick, KickAmplitudes};
pub use scheduler::FixedStepScheduler;
pub use simulation::WeaveSimulation;
