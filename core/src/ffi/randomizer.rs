//! PyO3 wrapper for Randomizer
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::randomizer::{Randomizer as RustRandomizer, RandomizerError};

fn value_err(err: RandomizerError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for the Rust Randomizer
///
/// Reproduces `java.util.Random` bit for bit for a given seed. The wrapped
/// generator is internally synchronized, so a single instance may be shared
/// across Python threads.
///
/// # Example (from Python)
///
/// ```python
/// from randomizer_core_rs import Randomizer
///
/// rng = Randomizer(42)
/// assert rng.next_i32() == -1170105035  # same as java.util.Random(42)
/// rng.seed = 42                         # re-arm, reproduces the sequence
/// assert rng.next_i32() == -1170105035
/// ```
#[pyclass(name = "Randomizer")]
pub struct PyRandomizer {
    inner: RustRandomizer,
}

#[pymethods]
impl PyRandomizer {
    /// Create a generator.
    ///
    /// # Arguments
    ///
    /// * `seed` - Optional 64-bit seed. Omitted: seeded from the wall clock
    ///   and a process-wide uniquifier.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<i64>) -> Self {
        let inner = match seed {
            Some(seed) => RustRandomizer::with_seed(seed),
            None => RustRandomizer::new(),
        };
        PyRandomizer { inner }
    }

    /// Last assigned seed.
    #[getter]
    fn get_seed(&self) -> i64 {
        self.inner.seed()
    }

    /// Re-arm the generator; equivalent to constructing a fresh one.
    #[setter]
    fn set_seed(&self, seed: i64) {
        self.inner.set_seed(seed);
    }

    /// Uniform boolean.
    fn next_bool(&self) -> bool {
        self.inner.next_bool()
    }

    /// Uniform signed 32-bit integer (full space, negatives included).
    fn next_i32(&self) -> i32 {
        self.inner.next_i32()
    }

    /// Uniform integer in [0, bound).
    ///
    /// Raises ValueError if bound <= 0.
    fn next_i32_bounded(&self, bound: i32) -> PyResult<i32> {
        self.inner.next_i32_bounded(bound).map_err(value_err)
    }

    /// Uniform integer in [min, max).
    ///
    /// Raises ValueError if min >= max.
    fn range_i32(&self, min: i32, max: i32) -> PyResult<i32> {
        self.inner.range_i32(min, max).map_err(value_err)
    }

    /// Uniform signed 64-bit integer.
    fn next_i64(&self) -> i64 {
        self.inner.next_i64()
    }

    /// Uniform 64-bit integer in [0, bound).
    ///
    /// Raises ValueError if bound <= 0.
    fn next_i64_bounded(&self, bound: i64) -> PyResult<i64> {
        self.inner.next_i64_bounded(bound).map_err(value_err)
    }

    /// Uniform 64-bit integer in [min, max).
    ///
    /// Raises ValueError if min >= max.
    fn range_i64(&self, min: i64, max: i64) -> PyResult<i64> {
        self.inner.range_i64(min, max).map_err(value_err)
    }

    /// Uniform float in [0.0, 1.0) with a full 53-bit mantissa.
    fn next_f64(&self) -> f64 {
        self.inner.next_f64()
    }

    /// Uniform single-precision float in [0.0, 1.0).
    fn next_f32(&self) -> f32 {
        self.inner.next_f32()
    }

    /// Standard-normal deviate (mean 0, standard deviation 1).
    fn next_gaussian(&self) -> f64 {
        self.inner.next_gaussian()
    }

    /// `len` uniform bytes, as a Python bytes object.
    fn next_bytes(&self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.inner.fill_bytes(&mut buf);
        buf
    }

    /// Complete generator state as a JSON snapshot string.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.snapshot())
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("Snapshot failed: {}", e)))
    }

    /// Rebuild a generator from a JSON snapshot string.
    ///
    /// Raises ValueError on malformed JSON, a digest mismatch, or an
    /// out-of-range internal state.
    #[staticmethod]
    fn restore_json(json: &str) -> PyResult<Self> {
        let snapshot = serde_json::from_str(json)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("Malformed snapshot: {}", e)))?;
        let inner = RustRandomizer::restore(&snapshot)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(PyRandomizer { inner })
    }

    fn __repr__(&self) -> String {
        format!("Randomizer(seed={})", self.inner.seed())
    }
}
