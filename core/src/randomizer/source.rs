//! Capability trait for uniform random sources
//!
//! Callers that only need "a standard random source" take this trait
//! instead of the concrete generator, so the Java-compatible [`Randomizer`]
//! is drop-in interchangeable with any other implementation.

use super::shared::Randomizer;

/// A shared source of uniformly distributed primitives.
///
/// Implementations must be internally synchronized: all methods take
/// `&self` and may be called from any thread. The trait is object-safe, so
/// `&dyn UniformRandomSource` works at API seams.
pub trait UniformRandomSource {
    /// Uniform value over the full signed 32-bit space.
    fn next_i32(&self) -> i32;

    /// Uniform value over the full signed 64-bit space.
    fn next_i64(&self) -> i64;

    /// Uniform `f64` in `[0.0, 1.0)`.
    fn next_f64(&self) -> f64;

    /// Uniform boolean.
    fn next_bool(&self) -> bool;

    /// Fill `dest` with uniform bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

impl UniformRandomSource for Randomizer {
    fn next_i32(&self) -> i32 {
        Randomizer::next_i32(self)
    }

    fn next_i64(&self) -> i64 {
        Randomizer::next_i64(self)
    }

    fn next_f64(&self) -> f64 {
        Randomizer::next_f64(self)
    }

    fn next_bool(&self) -> bool {
        Randomizer::next_bool(self)
    }

    fn fill_bytes(&self, dest: &mut [u8]) {
        Randomizer::fill_bytes(self, dest);
    }
}
