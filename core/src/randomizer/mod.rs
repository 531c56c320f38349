//! Deterministic Java-compatible random number generation
//!
//! A 48-bit linear congruential generator reproducing `java.util.Random`
//! bit for bit, behind a thread-safe facade with a richer range-uniform
//! API. CRITICAL: all derived operations go through the single
//! [`LcgCore::next_bits`] primitive; that is what keeps sequences
//! reproducible across languages.

mod lcg;
mod shared;
mod snapshot;
mod source;

pub use lcg::{LcgCore, RandomizerError};
pub use shared::{Randomizer, RandomizerGuard};
pub use snapshot::{RandomizerSnapshot, SnapshotError};
pub use source::UniformRandomSource;
