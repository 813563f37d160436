// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Gradient Weave PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied: PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Gradient Weave field kernel.
//!
//! Exposes `WeaveConfig` and `WeaveSimulation` to a Python host that owns
//! the render loop.
//!
//! # FFI Safety
//!
//! - Config validated before a simulation is built (`WeaveConfig::validate()`).
//! - Rust errors → `ValueError`; stepping itself never raises.
//! - Grids cross the boundary as copies; Python never aliases Rust buffers.
//!
//! Install: `cd crates/weave-ffi && maturin develop --release`.
//!
//! Usage from Python:
//! ```python
//! from gradient_weave import WeaveConfig, WeaveSimulation
//!
//! sim = WeaveSimulation(WeaveConfig(columns=48, rows=32))
//! sim.kick()
//! sim.advance(1 / 60)
//! phi = sim.potential()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use weave_physics::WeaveSimulation;
use weave_types::{WeaveConfig, WeaveError};

fn to_py_err(e: WeaveError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PyWeaveConfig ──────────────────────────────────────────────────

/// Python-visible configuration for a Gradient Weave simulation.
#[pyclass(name = "WeaveConfig")]
#[derive(Clone)]
struct PyWeaveConfig {
    inner: WeaveConfig,
}

#[pymethods]
impl PyWeaveConfig {
    #[new]
    #[pyo3(signature = (
        columns = 48,
        rows = 32,
        extent_x = 480.0,
        extent_y = 320.0,
        lambda_ = 1.0,
        nu = 0.1,
        delay_depth = 10,
        fixed_step_cap = 0.03,
        max_delay = 60,
        kick_count = 40,
        kick_potential_amplitude = 1.0,
        kick_velocity_amplitude = 0.4,
        seed = 42,
        initial_kick = false,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        columns: usize,
        rows: usize,
        extent_x: f64,
        extent_y: f64,
        lambda_: f64,
        nu: f64,
        delay_depth: i64,
        fixed_step_cap: f64,
        max_delay: usize,
        kick_count: usize,
        kick_potential_amplitude: f64,
        kick_velocity_amplitude: f64,
        seed: u64,
        initial_kick: bool,
    ) -> PyResult<Self> {
        let config = WeaveConfig {
            columns,
            rows,
            extent_x,
            extent_y,
            lambda: lambda_,
            nu,
            delay_depth,
            fixed_step_cap,
            max_delay,
            kick_count,
            kick_potential_amplitude,
            kick_velocity_amplitude,
            seed,
            initial_kick,
        };
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string. Missing fields take their defaults.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = WeaveConfig::from_json(json).map_err(to_py_err)?;
        config.validate().map_err(to_py_err)?;
        Ok(Self { inner: config })
    }

    #[getter]
    fn columns(&self) -> usize {
        self.inner.columns
    }

    #[getter]
    fn rows(&self) -> usize {
        self.inner.rows
    }

    #[getter]
    fn fixed_step_cap(&self) -> f64 {
        self.inner.fixed_step_cap
    }

    #[getter]
    fn max_delay(&self) -> usize {
        self.inner.max_delay
    }

    fn __repr__(&self) -> String {
        format!(
            "WeaveConfig(lattice={}x{}, lambda={}, nu={}, delay={}, step_cap={})",
            self.inner.columns,
            self.inner.rows,
            self.inner.lambda,
            self.inner.nu,
            self.inner.delay_depth,
            self.inner.fixed_step_cap
        )
    }
}

// ─── PyWeaveSimulation ──────────────────────────────────────────────

/// Delayed-feedback lattice simulation exposed to Python.
#[pyclass(name = "WeaveSimulation")]
struct PyWeaveSimulation {
    inner: WeaveSimulation,
}

#[pymethods]
impl PyWeaveSimulation {
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyWeaveConfig>) -> PyResult<Self> {
        let config = config.map(|c| c.inner).unwrap_or_default();
        let inner = WeaveSimulation::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Feed a wall-clock delta in seconds. Returns sub-steps run.
    fn advance(&mut self, delta_seconds: f64) -> usize {
        self.inner.advance(delta_seconds)
    }

    /// One integration step of size `dt`, bypassing the scheduler.
    fn step(&mut self, dt: f64) {
        self.inner.step(dt);
    }

    fn run_steps(&mut self, n_steps: u64) {
        self.inner.run_steps(n_steps);
    }

    /// Random kick; `count` defaults to the configured kick count.
    #[pyo3(signature = (count = None))]
    fn kick(&mut self, count: Option<usize>) {
        match count {
            Some(n) => self.inner.kick(n),
            None => self.inner.kick_default(),
        }
    }

    #[pyo3(signature = (x, y, d_potential, d_vx = 0.0, d_vy = 0.0))]
    fn perturb_cell(&mut self, x: usize, y: usize, d_potential: f64, d_vx: f64, d_vy: f64) -> bool {
        self.inner.perturb_cell(x, y, d_potential, d_vx, d_vy)
    }

    fn set_field(
        &mut self,
        potential: Vec<f64>,
        velocity_x: Vec<f64>,
        velocity_y: Vec<f64>,
    ) -> PyResult<()> {
        self.inner
            .set_field(potential, velocity_x, velocity_y)
            .map_err(to_py_err)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn set_parameters(&mut self, lambda_: f64, nu: f64, delay_depth: i64) {
        self.inner.set_parameters(lambda_, nu, delay_depth);
    }

    /// (lambda, nu, delay_depth) after clamping.
    fn parameters(&self) -> (f64, f64, usize) {
        let p = self.inner.parameters();
        (p.lambda, p.nu, p.delay_depth)
    }

    fn potential_at(&self, x: usize, y: usize) -> f64 {
        self.inner.potential_at(x, y)
    }

    fn velocity_at(&self, x: usize, y: usize) -> (f64, f64) {
        self.inner.velocity_at(x, y)
    }

    /// (columns, rows)
    fn dimensions(&self) -> (usize, usize) {
        self.inner.dimensions()
    }

    /// Row-major copy of the potential grid.
    fn potential(&self) -> Vec<f64> {
        self.inner.field().potential().to_vec()
    }

    /// Row-major copies of (vx, vy).
    fn velocity(&self) -> (Vec<f64>, Vec<f64>) {
        let f = self.inner.field();
        (f.velocity_x().to_vec(), f.velocity_y().to_vec())
    }

    #[getter]
    fn step_count(&self) -> u64 {
        self.inner.step_count()
    }

    #[getter]
    fn time(&self) -> f64 {
        self.inner.time()
    }

    fn stats<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let s = self.inner.stats();
        let dict = PyDict::new(py);
        dict.set_item("min_potential", s.min_potential)?;
        dict.set_item("max_potential", s.max_potential)?;
        dict.set_item("mean_potential", s.mean_potential)?;
        dict.set_item("potential_mass", s.potential_mass)?;
        dict.set_item("max_abs_potential", s.max_abs_potential)?;
        dict.set_item("max_speed", s.max_speed)?;
        dict.set_item("kinetic_energy", s.kinetic_energy)?;
        dict.set_item("non_finite", s.non_finite)?;
        Ok(dict)
    }

    /// Committed field as JSON. With `bounds=(lo, hi)` every value is
    /// clamped and NaN/Inf are made render-safe first.
    #[pyo3(signature = (bounds = None))]
    fn snapshot_json(&self, bounds: Option<(f64, f64)>) -> PyResult<String> {
        let mut snapshot = self.inner.snapshot();
        if let Some((lo, hi)) = bounds {
            snapshot = snapshot.sanitized(lo, hi);
        }
        serde_json::to_string(&snapshot)
            .map_err(|e| PyValueError::new_err(format!("snapshot encode error: {e}")))
    }

    /// Raise `ValueError` if the field holds NaN/Inf.
    fn ensure_finite(&self) -> PyResult<()> {
        self.inner.ensure_finite().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let (columns, rows) = self.inner.dimensions();
        let p = self.inner.parameters();
        format!(
            "WeaveSimulation(lattice={}x{}, step={}, t={:.3}, lambda={}, nu={}, delay={})",
            columns,
            rows,
            self.inner.step_count(),
            self.inner.time(),
            p.lambda,
            p.nu,
            p.delay_depth
        )
    }
}

#[pymodule]
fn gradient_weave(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWeaveConfig>()?;
    m.add_class::<PyWeaveSimulation>()?;
    Ok(())
}
