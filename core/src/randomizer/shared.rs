//! Thread-safe facade over the LCG core
//!
//! [`Randomizer`] owns the engine behind a single mutex. Every public
//! operation acquires the lock, performs one atomic step against the seed,
//! the 48-bit state, and the Gaussian cache, and releases it before
//! returning. Concurrent callers therefore observe one serialized output
//! sequence with no interleaved partial updates.
//!
//! Multi-step sequences (read-then-write of the seed, paired draws) are
//! composed atomically on the caller's side through [`Randomizer::lock`].

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::lcg::{LcgCore, RandomizerError};

/// Seeded, thread-safe generator of uniformly distributed integers,
/// floating-point values, booleans, byte sequences, and normally
/// distributed doubles, reproducing `java.util.Random` bit for bit.
///
/// All operations take `&self`; synchronization is internal. For
/// single-owner use without locking overhead, use [`LcgCore`] directly.
///
/// # Example
/// ```
/// use randomizer_core_rs::Randomizer;
///
/// let rng = Randomizer::with_seed(42);
/// assert_eq!(rng.next_i32(), -1170105035);
/// assert_eq!(rng.next_i32(), 234785527);
/// ```
#[derive(Debug)]
pub struct Randomizer {
    core: Mutex<LcgCore>,
}

/// Exclusive handle on the generator, returned by [`Randomizer::lock`].
///
/// Derefs to [`LcgCore`], so the full operation set is available without
/// re-locking. Holding the guard makes a multi-step sequence atomic with
/// respect to all other threads.
pub struct RandomizerGuard<'a> {
    core: MutexGuard<'a, LcgCore>,
}

impl Deref for RandomizerGuard<'_> {
    type Target = LcgCore;

    fn deref(&self) -> &LcgCore {
        &self.core
    }
}

impl DerefMut for RandomizerGuard<'_> {
    fn deref_mut(&mut self) -> &mut LcgCore {
        &mut self.core
    }
}

impl Randomizer {
    /// Create a generator with a seed derived from the wall clock and a
    /// process-wide uniquifier, so instances created in the same instant
    /// still diverge.
    pub fn new() -> Self {
        Randomizer {
            core: Mutex::new(LcgCore::default()),
        }
    }

    /// Create a generator with an explicit 64-bit seed.
    pub fn with_seed(seed: i64) -> Self {
        Randomizer {
            core: Mutex::new(LcgCore::new(seed)),
        }
    }

    /// Acquire the synchronization handle.
    ///
    /// The guarded state is a plain value struct and bound validation
    /// happens before any mutation, so a panicking thread cannot leave it
    /// logically torn; poisoning is therefore absorbed rather than
    /// propagated.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::Randomizer;
    ///
    /// let rng = Randomizer::with_seed(7);
    /// // Atomic read-modify-write of the seed: no other thread can draw
    /// // between the read and the write.
    /// let mut guard = rng.lock();
    /// let current = guard.seed();
    /// guard.set_seed(current + 1);
    /// drop(guard);
    /// assert_eq!(rng.seed(), 8);
    /// ```
    pub fn lock(&self) -> RandomizerGuard<'_> {
        RandomizerGuard {
            core: self.core.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// Last assigned seed. See [`LcgCore::seed`].
    pub fn seed(&self) -> i64 {
        self.lock().seed()
    }

    /// Re-arm the generator; equivalent to replacing it with a fresh
    /// instance seeded with `seed`. See [`LcgCore::set_seed`].
    pub fn set_seed(&self, seed: i64) {
        self.lock().set_seed(seed);
    }

    /// Current 48-bit state (replay diagnostics and golden tests).
    pub fn internal_state(&self) -> u64 {
        self.lock().internal_state()
    }

    /// Uniform boolean.
    pub fn next_bool(&self) -> bool {
        self.lock().next_bool()
    }

    /// Fill `dest` with uniform bytes. See [`LcgCore::fill_bytes`].
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest);
    }

    /// Uniform value over the full signed 32-bit space.
    pub fn next_i32(&self) -> i32 {
        self.lock().next_i32()
    }

    /// Uniform value in `[0, bound)`. See [`LcgCore::next_i32_bounded`].
    pub fn next_i32_bounded(&self, bound: i32) -> Result<i32, RandomizerError> {
        self.lock().next_i32_bounded(bound)
    }

    /// Uniform value in `[min, max)`. See [`LcgCore::range_i32`].
    pub fn range_i32(&self, min: i32, max: i32) -> Result<i32, RandomizerError> {
        self.lock().range_i32(min, max)
    }

    /// Uniform value over the full signed 64-bit space.
    pub fn next_i64(&self) -> i64 {
        self.lock().next_i64()
    }

    /// Uniform value in `[0, bound)` at 64-bit width.
    pub fn next_i64_bounded(&self, bound: i64) -> Result<i64, RandomizerError> {
        self.lock().next_i64_bounded(bound)
    }

    /// Uniform value in `[min, max)` at 64-bit width.
    pub fn range_i64(&self, min: i64, max: i64) -> Result<i64, RandomizerError> {
        self.lock().range_i64(min, max)
    }

    /// Uniform `f64` in `[0.0, 1.0)` with a full 53-bit mantissa.
    pub fn next_f64(&self) -> f64 {
        self.lock().next_f64()
    }

    /// Uniform `f32` in `[0.0, 1.0)`.
    pub fn next_f32(&self) -> f32 {
        self.lock().next_f32()
    }

    /// Standard-normal deviate; the cached half of each Box-Muller pair is
    /// consumed under the same lock acquisition that produced it.
    pub fn next_gaussian(&self) -> f64 {
        self.lock().next_gaussian()
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Randomizer::new()
    }
}

impl From<LcgCore> for Randomizer {
    /// Promote a single-threaded engine to a shared generator. The engine's
    /// seed, state, and Gaussian cache carry over unchanged.
    fn from(core: LcgCore) -> Self {
        Randomizer {
            core: Mutex::new(core),
        }
    }
}
