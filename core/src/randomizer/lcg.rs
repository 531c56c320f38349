//! 48-bit linear congruential generator core
//!
//! This is the unsynchronized engine behind [`Randomizer`](crate::Randomizer).
//! It reproduces the `java.util.Random` recurrence bit for bit:
//!
//! ```text
//! state' = (state * 0x5DEECE66D + 0xB) mod 2^48
//! ```
//!
//! # Determinism
//!
//! Same seed → same sequence for every operation, including the bounded
//! and ranged generators. This is CRITICAL for:
//! - Replaying a run from a recorded seed
//! - Cross-language agreement with JVM-seeded data
//! - Testing (golden vectors generated from `java.util.Random`)
//!
//! Every derived operation is expressed through [`LcgCore::next_bits`], the
//! only place the recurrence appears. Carving bits out of the state in any
//! other way would silently change every downstream sequence.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Multiplier of the 48-bit recurrence.
const MULTIPLIER: u64 = 0x5DEECE66D;

/// Additive constant of the 48-bit recurrence.
const ADDEND: u64 = 0xB;

/// Only the low 48 bits of the state are significant.
const STATE_MASK: u64 = (1 << 48) - 1;

/// Exact scale factor mapping a 53-bit integer onto [0.0, 1.0).
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Multiplier advancing the process-wide default-seed uniquifier.
const SEED_UNIQUIFIER_MULTIPLIER: i64 = 0x106689D45497FDB5;

static SEED_UNIQUIFIER: AtomicI64 = AtomicI64::new(8682522807148012);

/// Produce a fresh default seed: the uniquifier is advanced atomically so
/// generators created in the same instant still receive distinct seeds,
/// then mixed with the wall clock.
pub(crate) fn default_seed() -> i64 {
    let mut current = SEED_UNIQUIFIER.load(Ordering::Relaxed);
    let next = loop {
        let next = current.wrapping_mul(SEED_UNIQUIFIER_MULTIPLIER);
        match SEED_UNIQUIFIER.compare_exchange_weak(
            current,
            next,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => break next,
            Err(observed) => current = observed,
        }
    };
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    next ^ now.as_nanos() as i64
}

/// Errors reported by the bounded and ranged generators.
///
/// Bounds are validated before any state mutation, so a failed call never
/// advances the generator and never touches the Gaussian cache.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomizerError {
    #[error("bound must be positive, got {bound}")]
    NonPositiveBound { bound: i64 },

    #[error("empty range: min {min} must be less than max {max}")]
    EmptyRange { min: i64, max: i64 },
}

/// Unsynchronized 48-bit LCG engine with Java-compatible output.
///
/// Use this type directly when a single owner drives all randomness (the
/// usual shape inside a deterministic simulation loop). Wrap it in
/// [`Randomizer`](crate::Randomizer) when the generator is shared across
/// threads.
///
/// # Example
/// ```
/// use randomizer_core_rs::LcgCore;
///
/// let mut rng = LcgCore::new(42);
/// assert_eq!(rng.next_i32(), -1170105035); // matches new java.util.Random(42)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LcgCore {
    /// Last seed assigned by the caller. Kept verbatim so the generator can
    /// be re-armed to reproduce a sequence; it is not derivable from the
    /// internal state.
    seed: i64,

    /// Current 48-bit state, always `< 2^48`.
    internal_seed: u64,

    /// True when `cached_gaussian` holds the second half of a Box-Muller pair.
    has_cached_gaussian: bool,

    /// Second deviate of the most recent accepted pair.
    cached_gaussian: f64,
}

impl LcgCore {
    /// Create a new engine from an explicit 64-bit seed.
    ///
    /// The internal state is initialized to `(seed XOR 0x5DEECE66D) mod 2^48`,
    /// exactly as `new java.util.Random(seed)`.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::LcgCore;
    ///
    /// let rng = LcgCore::new(42);
    /// assert_eq!(rng.internal_state(), 0x5DEECE647);
    /// ```
    pub fn new(seed: i64) -> Self {
        let mut core = LcgCore {
            seed: 0,
            internal_seed: 0,
            has_cached_gaussian: false,
            cached_gaussian: 0.0,
        };
        core.set_seed(seed);
        core
    }

    /// Last seed assigned via [`LcgCore::new`] or [`LcgCore::set_seed`].
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Re-arm the generator. Equivalent to constructing a fresh engine with
    /// `seed`: the internal state is recomputed and the Gaussian cache is
    /// cleared, so the subsequent output sequence is identical to a new
    /// instance's.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::LcgCore;
    ///
    /// let mut rng = LcgCore::new(1);
    /// rng.next_i64();
    /// rng.set_seed(42);
    /// assert_eq!(rng.next_i32(), LcgCore::new(42).next_i32());
    /// ```
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = seed;
        self.internal_seed = (seed as u64 ^ MULTIPLIER) & STATE_MASK;
        self.has_cached_gaussian = false;
    }

    /// Current 48-bit state (for replay diagnostics and golden tests).
    pub fn internal_state(&self) -> u64 {
        self.internal_seed
    }

    pub(crate) fn gaussian_cache(&self) -> (bool, f64) {
        (self.has_cached_gaussian, self.cached_gaussian)
    }

    pub(crate) fn from_parts(
        seed: i64,
        internal_seed: u64,
        has_cached_gaussian: bool,
        cached_gaussian: f64,
    ) -> Self {
        LcgCore {
            seed,
            internal_seed,
            has_cached_gaussian,
            cached_gaussian,
        }
    }

    /// Advance the state once and return its top `bits` bits, `1 <= bits <= 32`.
    ///
    /// This is the primitive every other operation is built on. The shift is
    /// performed on the unsigned representation: an arithmetic shift would
    /// sign-extend and corrupt the carved value.
    pub fn next_bits(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits), "bits must be in 1..=32");
        self.internal_seed = self
            .internal_seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & STATE_MASK;
        (self.internal_seed >> (48 - bits)) as i32
    }

    /// Uniform value over the full signed 32-bit space.
    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Power-of-two bounds take a single multiply of a 31-bit draw, which is
    /// exactly uniform. Other bounds use rejection sampling: a plain modulo
    /// would skew toward small values whenever `bound` does not evenly divide
    /// `2^31`.
    ///
    /// # Errors
    /// [`RandomizerError::NonPositiveBound`] if `bound <= 0`; the generator
    /// state is untouched in that case.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::LcgCore;
    ///
    /// let mut rng = LcgCore::new(42);
    /// assert_eq!(rng.next_i32_bounded(100).unwrap(), 30);
    /// assert!(rng.next_i32_bounded(0).is_err());
    /// ```
    pub fn next_i32_bounded(&mut self, bound: i32) -> Result<i32, RandomizerError> {
        if bound <= 0 {
            return Err(RandomizerError::NonPositiveBound {
                bound: i64::from(bound),
            });
        }
        let m = bound - 1;
        if bound & m == 0 {
            return Ok(((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as i32);
        }
        loop {
            let bits = self.next_bits(31);
            let candidate = bits % bound;
            // Reject draws from the incomplete top interval of the 31-bit
            // space; the wrap of bits - candidate + m is the overflow signal.
            if bits.wrapping_sub(candidate).wrapping_add(m) >= 0 {
                return Ok(candidate);
            }
        }
    }

    /// Uniform value in `[min, max)`.
    ///
    /// Power-of-two spans mask a raw 32-bit draw; other spans use rejection
    /// sampling on a 31-bit draw (sign bit discarded). A span wider than
    /// `i32` (e.g. the full representable range) falls back to rejecting
    /// full-width draws until one lands inside.
    ///
    /// # Errors
    /// [`RandomizerError::EmptyRange`] if `min >= max`.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::LcgCore;
    ///
    /// let mut rng = LcgCore::new(42);
    /// let v = rng.range_i32(-50, 50).unwrap();
    /// assert!((-50..50).contains(&v));
    /// ```
    pub fn range_i32(&mut self, min: i32, max: i32) -> Result<i32, RandomizerError> {
        if min >= max {
            return Err(RandomizerError::EmptyRange {
                min: i64::from(min),
                max: i64::from(max),
            });
        }
        let range = max.wrapping_sub(min);
        if range > 0 {
            let m = range - 1;
            let value = if range & m == 0 {
                self.next_bits(32) & m
            } else {
                loop {
                    let u = ((self.next_bits(32) as u32) >> 1) as i32;
                    let candidate = u % range;
                    if u.wrapping_add(m).wrapping_sub(candidate) >= 0 {
                        break candidate;
                    }
                }
            };
            Ok(min.wrapping_add(value))
        } else {
            // max - min overflowed i32: the span covers most of the width,
            // so plain rejection terminates almost immediately.
            loop {
                let r = self.next_bits(32);
                if r >= min && r < max {
                    return Ok(r);
                }
            }
        }
    }

    /// Uniform value over the full signed 64-bit space, from two chained
    /// 32-bit draws (high half first, low half sign-extended, as Java).
    pub fn next_i64(&mut self) -> i64 {
        let high = i64::from(self.next_bits(32)) << 32;
        high.wrapping_add(i64::from(self.next_bits(32)))
    }

    /// Uniform value in `[0, bound)` at 64-bit width.
    ///
    /// Rejection sampling operates on 63-bit non-negative draws (top bit
    /// discarded); power-of-two bounds mask a full draw directly.
    ///
    /// # Errors
    /// [`RandomizerError::NonPositiveBound`] if `bound <= 0`.
    pub fn next_i64_bounded(&mut self, bound: i64) -> Result<i64, RandomizerError> {
        if bound <= 0 {
            return Err(RandomizerError::NonPositiveBound { bound });
        }
        let m = bound - 1;
        if bound & m == 0 {
            return Ok(self.next_i64() & m);
        }
        loop {
            let u = ((self.next_i64() as u64) >> 1) as i64;
            let candidate = u % bound;
            if u.wrapping_add(m).wrapping_sub(candidate) >= 0 {
                return Ok(candidate);
            }
        }
    }

    /// Uniform value in `[min, max)` at 64-bit width.
    ///
    /// # Errors
    /// [`RandomizerError::EmptyRange`] if `min >= max`.
    pub fn range_i64(&mut self, min: i64, max: i64) -> Result<i64, RandomizerError> {
        if min >= max {
            return Err(RandomizerError::EmptyRange { min, max });
        }
        let range = max.wrapping_sub(min);
        if range > 0 {
            let m = range - 1;
            let value = if range & m == 0 {
                self.next_i64() & m
            } else {
                loop {
                    let u = ((self.next_i64() as u64) >> 1) as i64;
                    let candidate = u % range;
                    if u.wrapping_add(m).wrapping_sub(candidate) >= 0 {
                        break candidate;
                    }
                }
            };
            Ok(min.wrapping_add(value))
        } else {
            loop {
                let r = self.next_i64();
                if r >= min && r < max {
                    return Ok(r);
                }
            }
        }
    }

    /// Uniform `f64` in `[0.0, 1.0)` with a full 53-bit mantissa, assembled
    /// from a 26-bit and a 27-bit draw.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::LcgCore;
    ///
    /// let mut rng = LcgCore::new(12345);
    /// let p = rng.next_f64();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next_bits(26)) << 27;
        let low = i64::from(self.next_bits(27));
        (high + low) as f64 * DOUBLE_UNIT
    }

    /// Uniform `f32` in `[0.0, 1.0)` from a single 24-bit draw.
    pub fn next_f32(&mut self) -> f32 {
        self.next_bits(24) as f32 / (1 << 24) as f32
    }

    /// Uniform boolean from a single-bit draw.
    pub fn next_bool(&mut self) -> bool {
        self.next_bits(1) != 0
    }

    /// Standard-normal deviate (mean 0, standard deviation 1) by the polar
    /// Box-Muller method.
    ///
    /// Accepted pairs yield two independent deviates; the second is cached
    /// and served on the next call, so the logarithm and square root are
    /// amortized over two outputs. Pairs landing outside the unit disk
    /// (or exactly at its center) are redrawn.
    pub fn next_gaussian(&mut self) -> f64 {
        if self.has_cached_gaussian {
            self.has_cached_gaussian = false;
            return self.cached_gaussian;
        }
        loop {
            let v1 = 2.0 * self.next_f64() - 1.0;
            let v2 = 2.0 * self.next_f64() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let norm = (-2.0 * s.ln() / s).sqrt();
                self.cached_gaussian = v2 * norm;
                self.has_cached_gaussian = true;
                return v1 * norm;
            }
        }
    }

    /// Fill `dest` with uniform bytes: one 32-bit draw per 4-byte chunk,
    /// emitted least-significant first. A trailing chunk shorter than 4
    /// bytes takes the low bytes of one final draw; an empty slice draws
    /// nothing.
    ///
    /// # Example
    /// ```
    /// use randomizer_core_rs::LcgCore;
    ///
    /// let mut rng = LcgCore::new(1234);
    /// let mut buf = [0u8; 4];
    /// rng.fill_bytes(&mut buf);
    /// assert_eq!(buf, [168, 104, 134, 165]);
    /// ```
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let draw = self.next_i32().to_le_bytes();
            chunk.copy_from_slice(&draw[..chunk.len()]);
        }
    }
}

impl Default for LcgCore {
    /// Engine seeded from the wall clock and the process-wide uniquifier.
    fn default() -> Self {
        LcgCore::new(default_seed())
    }
}
