//! Randomizer Core - Java-compatible deterministic PRNG
//!
//! Reproduces the `java.util.Random` 48-bit linear congruential generator
//! bit for bit for any given seed, behind a thread-safe, range-uniform API.
//!
//! # Architecture
//!
//! - **randomizer**: the LCG engine ([`LcgCore`]), the thread-safe facade
//!   ([`Randomizer`]), the [`UniformRandomSource`] capability trait, and
//!   digest-validated state snapshots
//! - **ffi**: optional PyO3 bindings exposing the generator to Python
//!
//! # Critical Invariants
//!
//! 1. All randomness flows through the single `next_bits` primitive
//! 2. Same seed → same sequence, for every operation mix
//! 3. A failed call (invalid bound) never advances generator state

// Module declarations
pub mod randomizer;

// Re-exports for convenience
pub use randomizer::{
    LcgCore, Randomizer, RandomizerError, RandomizerGuard, RandomizerSnapshot, SnapshotError,
    UniformRandomSource,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn randomizer_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::randomizer::PyRandomizer>()?;
    Ok(())
}
