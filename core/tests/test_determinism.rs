//! Tests for deterministic generation
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce the same
//! sequence for any fixed mix of operations.

use randomizer_core_rs::{LcgCore, Randomizer};
use std::sync::Arc;
use std::thread;

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = LcgCore::new(12345);
    let mut rng2 = LcgCore::new(12345);

    for i in 0..1000 {
        assert_eq!(
            rng1.next_i64(),
            rng2.next_i64(),
            "determinism broken at iteration {}",
            i
        );
    }
}

#[test]
fn test_same_seed_same_sequence_mixed_operations() {
    let mut rng1 = LcgCore::new(777);
    let mut rng2 = LcgCore::new(777);

    for _ in 0..200 {
        assert_eq!(rng1.next_i32(), rng2.next_i32());
        assert_eq!(rng1.next_f64(), rng2.next_f64());
        assert_eq!(rng1.next_bool(), rng2.next_bool());
        assert_eq!(rng1.next_gaussian(), rng2.next_gaussian());
        assert_eq!(
            rng1.next_i32_bounded(37).unwrap(),
            rng2.next_i32_bounded(37).unwrap()
        );
        assert_eq!(
            rng1.range_i64(-5000, 9000).unwrap(),
            rng2.range_i64(-5000, 9000).unwrap()
        );

        let mut buf1 = [0u8; 7];
        let mut buf2 = [0u8; 7];
        rng1.fill_bytes(&mut buf1);
        rng2.fill_bytes(&mut buf2);
        assert_eq!(buf1, buf2);
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let mut rng1 = LcgCore::new(12345);
    let mut rng2 = LcgCore::new(54321);

    assert_ne!(
        rng1.next_i64(),
        rng2.next_i64(),
        "different seeds should produce different values"
    );
}

#[test]
fn test_seed_reset_mid_sequence() {
    let mut warm = LcgCore::new(1);
    for _ in 0..100 {
        warm.next_gaussian();
        warm.next_i64();
    }

    // Re-arming must reproduce a fresh generator's sequence exactly.
    warm.set_seed(42);
    let mut fresh = LcgCore::new(42);
    for _ in 0..100 {
        assert_eq!(warm.next_i32(), fresh.next_i32());
        assert_eq!(warm.next_gaussian(), fresh.next_gaussian());
    }
}

#[test]
fn test_seed_reset_clears_gaussian_cache() {
    let mut rng = LcgCore::new(2021);
    rng.next_gaussian(); // cache now holds the pair's second half

    rng.set_seed(2021);
    let mut fresh = LcgCore::new(2021);
    // If the cache survived the reset, the first value would be the stale
    // cached deviate instead of a newly drawn pair.
    assert_eq!(rng.next_gaussian(), fresh.next_gaussian());
    assert_eq!(rng.next_gaussian(), fresh.next_gaussian());
}

#[test]
fn test_produces_diverse_values() {
    let mut rng = LcgCore::new(12345);
    let values: std::collections::HashSet<i64> = (0..100).map(|_| rng.next_i64()).collect();
    assert!(
        values.len() > 90,
        "not diverse enough: only {} unique values out of 100",
        values.len()
    );
}

#[test]
fn test_concurrent_mixed_draws_advance_state_consistently() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 100;

    let rng = Arc::new(Randomizer::with_seed(31337));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let rng = Arc::clone(&rng);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    // One primitive draw per call keeps the accounting simple.
                    rng.next_i32();
                    rng.next_bool();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Linearizability: the state advanced exactly once per draw, so a
    // single-threaded replay of the same draw count lands on the same state.
    let mut replay = LcgCore::new(31337);
    for _ in 0..THREADS * ROUNDS * 2 {
        replay.next_bits(32);
    }
    assert_eq!(rng.internal_state(), replay.internal_state());
}

#[test]
fn test_guarded_sequence_is_contiguous() {
    let rng = Arc::new(Randomizer::with_seed(55));

    // A thread hammering the generator must not interleave with a guarded
    // two-draw sequence.
    let contender = {
        let rng = Arc::clone(&rng);
        thread::spawn(move || {
            for _ in 0..1000 {
                rng.next_i64();
            }
        })
    };

    let (before, a, b) = {
        let mut guard = rng.lock();
        let before = guard.internal_state();
        let a = guard.next_i32();
        let b = guard.next_i32();
        (before, a, b)
    };
    contender.join().unwrap();

    // Every state the generator visits lies on one linear trajectory from
    // the seed, so single-step replay reaches the observed pre-state; from
    // there the two guarded draws must be adjacent.
    let mut core = LcgCore::new(55);
    let mut steps = 0u32;
    while core.internal_state() != before {
        core.next_bits(32);
        steps += 1;
        assert!(steps <= 10_000, "pre-state not reachable by replay");
    }
    assert_eq!(a, core.next_i32());
    assert_eq!(b, core.next_i32());
}
