//! Snapshot - save/restore generator state
//!
//! Captures everything needed to resume a generator at an arbitrary point:
//! the user-visible seed, the 48-bit internal state, and the Gaussian
//! cache. The lock itself is never serialized; restore always builds a
//! fresh one.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the exact sequence of
//!   the captured one.
//! - **Integrity**: the SHA-256 digest over the state fields is validated
//!   on restore; edited or truncated snapshots are rejected.
//! - **State range**: `internal_seed` must fit in 48 bits or the snapshot
//!   is rejected.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::lcg::LcgCore;
use super::shared::Randomizer;

/// Errors that can occur when restoring a snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot digest mismatch: state fields were altered after capture")]
    DigestMismatch,

    #[error("internal seed {internal_seed:#x} exceeds the 48-bit state range")]
    CorruptState { internal_seed: u64 },
}

/// Serializable capture of complete generator state.
///
/// # Example
/// ```
/// use randomizer_core_rs::{Randomizer, RandomizerSnapshot};
///
/// let rng = Randomizer::with_seed(42);
/// rng.next_i64();
///
/// let snapshot = rng.snapshot();
/// let json = serde_json::to_string(&snapshot).unwrap();
///
/// let parsed: RandomizerSnapshot = serde_json::from_str(&json).unwrap();
/// let restored = Randomizer::restore(&parsed).unwrap();
/// assert_eq!(restored.next_i32(), rng.next_i32());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomizerSnapshot {
    /// Last assigned user-visible seed.
    pub seed: i64,

    /// 48-bit internal state at capture time.
    pub internal_seed: u64,

    /// Whether a second Box-Muller deviate was pending.
    pub has_cached_gaussian: bool,

    /// The pending deviate (meaningful only when the flag is set).
    pub cached_gaussian: f64,

    /// SHA-256 hex digest over the four state fields.
    pub state_digest: String,
}

/// Compute the integrity digest over the state fields.
fn state_digest(
    seed: i64,
    internal_seed: u64,
    has_cached_gaussian: bool,
    cached_gaussian: f64,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(internal_seed.to_le_bytes());
    hasher.update([u8::from(has_cached_gaussian)]);
    hasher.update(cached_gaussian.to_le_bytes());
    format!("{:x}", hasher.finalize())
}

impl RandomizerSnapshot {
    pub(crate) fn capture(core: &LcgCore) -> Self {
        let (has_cached_gaussian, cached_gaussian) = core.gaussian_cache();
        RandomizerSnapshot {
            seed: core.seed(),
            internal_seed: core.internal_state(),
            has_cached_gaussian,
            cached_gaussian,
            state_digest: state_digest(
                core.seed(),
                core.internal_state(),
                has_cached_gaussian,
                cached_gaussian,
            ),
        }
    }

    /// Validate integrity and state invariants.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.internal_seed > (1 << 48) - 1 {
            return Err(SnapshotError::CorruptState {
                internal_seed: self.internal_seed,
            });
        }
        let expected = state_digest(
            self.seed,
            self.internal_seed,
            self.has_cached_gaussian,
            self.cached_gaussian,
        );
        if self.state_digest != expected {
            return Err(SnapshotError::DigestMismatch);
        }
        Ok(())
    }
}

impl Randomizer {
    /// Capture the complete generator state as one atomic read.
    pub fn snapshot(&self) -> RandomizerSnapshot {
        RandomizerSnapshot::capture(&self.lock())
    }

    /// Rebuild a generator from a snapshot, on a fresh lock.
    ///
    /// # Errors
    /// [`SnapshotError::DigestMismatch`] if the state fields do not match
    /// the recorded digest; [`SnapshotError::CorruptState`] if the internal
    /// seed does not fit in 48 bits.
    pub fn restore(snapshot: &RandomizerSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(Randomizer::from(LcgCore::from_parts(
            snapshot.seed,
            snapshot.internal_seed,
            snapshot.has_cached_gaussian,
            snapshot.cached_gaussian,
        )))
    }
}
