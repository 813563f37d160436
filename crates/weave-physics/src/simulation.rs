// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave Simulation
// ─────────────────────────────────────────────────────────────────────
//! Host-facing simulation object.
//!
//! Owns the stepper, scheduler, coupling parameters, perturbation RNG,
//! and clock. Every mutating call takes `&mut self`, so steps, kicks,
//! and resets can never interleave.

use rand::rngs::StdRng;
use rand::SeedableRng;

use weave_types::{FieldSnapshot, WeaveConfig, WeaveError, WeaveResult};

use crate::delay_line::DelayLine;
use crate::field::FieldState;
use crate::integrator::FieldStepper;
use crate::lattice::Lattice;
use crate::observables::FieldStats;
use crate::params::{clamp_delay, SimParameters};
use crate::perturb::{random_kick, KickAmplitudes};
use crate::scheduler::FixedStepScheduler;

/// Delayed-feedback lattice simulation.
pub struct WeaveSimulation {
    config: WeaveConfig,
    stepper: FieldStepper,
    scheduler: FixedStepScheduler,
    params: SimParameters,
    amplitudes: KickAmplitudes,
    rng: StdRng,
    step_count: u64,
    time: f64,
}

impl WeaveSimulation {
    /// Build a zero-filled simulation from a validated configuration.
    pub fn new(config: WeaveConfig) -> WeaveResult<Self> {
        config.validate()?;
        let lattice = Lattice::from_config(&config)?;
        let scheduler = FixedStepScheduler::new(config.fixed_step_cap)?;
        let mut sim = Self {
            stepper: FieldStepper::new(lattice, config.max_delay),
            scheduler,
            params: SimParameters::from_config(&config),
            amplitudes: KickAmplitudes {
                potential: config.kick_potential_amplitude,
                velocity: config.kick_velocity_amplitude,
            },
            rng: StdRng::seed_from_u64(config.seed),
            step_count: 0,
            time: 0.0,
            config,
        };
        log::info!(
            "gradient weave initialised: {}x{} lattice, delay capacity {}, step cap {}",
            sim.config.columns,
            sim.config.rows,
            sim.config.max_delay,
            sim.config.fixed_step_cap
        );
        if sim.config.initial_kick {
            sim.kick_default();
        }
        Ok(sim)
    }

    /// Default 48×32 lattice.
    pub fn default_params() -> WeaveResult<Self> {
        Self::new(WeaveConfig::default())
    }

    pub fn config(&self) -> &WeaveConfig {
        &self.config
    }

    // ── Stepping ────────────────────────────────────────────────────

    /// Feed a wall-clock delta; runs as many capped sub-steps as needed.
    ///
    /// Returns the number of sub-steps run.
    pub fn advance(&mut self, delta_seconds: f64) -> usize {
        let Self {
            stepper,
            scheduler,
            params,
            step_count,
            time,
            ..
        } = self;
        let substeps = scheduler.advance(delta_seconds, |dt| {
            stepper.step(params, dt);
            *step_count += 1;
            *time += dt;
        });
        log::trace!("advance({delta_seconds}) ran {substeps} sub-steps");
        substeps
    }

    /// Run exactly one integration step of size `dt`, bypassing the scheduler.
    pub fn step(&mut self, dt: f64) {
        self.stepper.step(&self.params, dt);
        self.step_count += 1;
        self.time += dt;
    }

    /// Run `n_steps` steps of the full fixed-step cap.
    pub fn run_steps(&mut self, n_steps: u64) {
        let dt = self.scheduler.fixed_step_cap();
        for _ in 0..n_steps {
            self.step(dt);
        }
    }

    // ── Perturbation and control ─────────────────────────────────────

    /// Add random offsets to `count` random cells.
    pub fn kick(&mut self, count: usize) {
        let touched = random_kick(
            &mut self.rng,
            self.stepper.field_mut(),
            count,
            self.amplitudes,
        );
        log::debug!("random kick: {touched} cells at step {}", self.step_count);
    }

    /// Kick with the configured cell count.
    pub fn kick_default(&mut self) {
        self.kick(self.config.kick_count);
    }

    /// Add explicit offsets to cell (x, y). Returns `false` outside the lattice.
    pub fn perturb_cell(
        &mut self,
        x: usize,
        y: usize,
        d_potential: f64,
        d_vx: f64,
        d_vy: f64,
    ) -> bool {
        let lattice = *self.stepper.lattice();
        if !lattice.contains(x, y) {
            return false;
        }
        self.stepper
            .field_mut()
            .add_at(lattice.index(x, y), d_potential, d_vx, d_vy);
        true
    }

    /// Replace the committed field with host-supplied grids.
    ///
    /// The delay line keeps its history.
    pub fn set_field(
        &mut self,
        potential: Vec<f64>,
        velocity_x: Vec<f64>,
        velocity_y: Vec<f64>,
    ) -> WeaveResult<()> {
        let field = FieldState::from_grids(self.stepper.lattice(), potential, velocity_x, velocity_y)?;
        self.stepper.replace_field(field);
        Ok(())
    }

    /// Zero all grids and the delay line; rewind clock and accumulator.
    pub fn reset(&mut self) {
        self.stepper.clear();
        self.scheduler.reset();
        self.step_count = 0;
        self.time = 0.0;
        log::info!("reset fields");
    }

    /// Update coupling parameters. `delay_depth` is clamped to `[0, capacity − 1]`.
    pub fn set_parameters(&mut self, lambda: f64, nu: f64, delay_depth: i64) {
        let capacity = self.stepper.delay_line().capacity();
        self.params = SimParameters {
            lambda,
            nu,
            delay_depth: clamp_delay(delay_depth, capacity),
        };
        log::debug!(
            "parameters: lambda={lambda:.3} nu={nu:.3} delay={} (requested {delay_depth})",
            self.params.delay_depth
        );
    }

    pub fn parameters(&self) -> SimParameters {
        self.params
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        let l = self.stepper.lattice();
        (l.columns(), l.rows())
    }

    /// Potential at (x, y); 0.0 outside the lattice.
    pub fn potential_at(&self, x: usize, y: usize) -> f64 {
        let l = self.stepper.lattice();
        if l.contains(x, y) {
            self.field().potential()[l.index(x, y)]
        } else {
            0.0
        }
    }

    /// Velocity at (x, y); (0, 0) outside the lattice.
    pub fn velocity_at(&self, x: usize, y: usize) -> (f64, f64) {
        let l = self.stepper.lattice();
        if l.contains(x, y) {
            let i = l.index(x, y);
            let f = self.field();
            (f.velocity_x()[i], f.velocity_y()[i])
        } else {
            (0.0, 0.0)
        }
    }

    pub fn lattice(&self) -> &Lattice {
        self.stepper.lattice()
    }

    /// The committed field (read-only).
    pub fn field(&self) -> &FieldState {
        self.stepper.field()
    }

    pub fn delay_line(&self) -> &DelayLine {
        self.stepper.delay_line()
    }

    /// Committed fixed steps since construction or the last reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated time since construction or the last reset.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats::measure(self.field())
    }

    /// Owned copy of the committed field.
    pub fn snapshot(&self) -> FieldSnapshot {
        let (columns, rows) = self.dimensions();
        let f = self.field();
        FieldSnapshot {
            columns,
            rows,
            step_count: self.step_count,
            time: self.time,
            potential: f.potential().to_vec(),
            velocity_x: f.velocity_x().to_vec(),
            velocity_y: f.velocity_y().to_vec(),
        }
    }

    /// Report NaN/Inf in the committed field. Never called by the step path.
    pub fn ensure_finite(&self) -> WeaveResult<()> {
        let bad = self.field().values().filter(|v| !v.is_finite()).count();
        if bad > 0 {
            return Err(WeaveError::Numerical(format!(
                "{bad} non-finite values at step {}",
                self.step_count
            )));
        }
        Ok(())
    }
}
