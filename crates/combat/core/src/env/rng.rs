//! RNG oracle for combat rolls.
//!
//! The encounter never reaches for a global generator: every roll goes through
//! an injected [`RngCore`] via the [`RngOracle`] extension trait. Seeding the
//! generator with [`seeded`] makes a whole encounter reproducible.
//!
//! # Determinism
//!
//! Given the same seed, the same rosters and the same sequence of queued
//! actions, an encounter produces the same log (character ids aside, which
//! are random UUIDs assigned at creation).

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used when the caller does not inject one.
pub type CombatRng = ChaCha8Rng;

/// Returns a reproducible generator for the given seed.
pub fn seeded(seed: u64) -> CombatRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Returns a generator seeded from operating system entropy.
pub fn from_entropy() -> CombatRng {
    ChaCha8Rng::from_entropy()
}

/// Roll primitives used by combat resolution.
///
/// Implemented for every [`RngCore`], so any `rand` generator can drive an
/// encounter.
pub trait RngOracle {
    /// Uniform real value in `[0, upper)`.
    ///
    /// Returns `0.0` when `upper` is not strictly positive.
    fn roll_below(&mut self, upper: f64) -> f64;

    /// Uniform integer in `[min, max]` inclusive.
    ///
    /// Returns `min` when the range is empty or a single value.
    fn roll_range(&mut self, min: i32, max: i32) -> i32;

    /// Uniform index in `[0, len)`.
    ///
    /// Returns `0` for `len <= 1`; callers never pass an empty slice length.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn flip(&mut self) -> bool {
        self.pick_index(2) == 0
    }
}

impl<R: RngCore + ?Sized> RngOracle for R {
    fn roll_below(&mut self, upper: f64) -> f64 {
        if !upper.is_finite() || upper <= 0.0 {
            return 0.0;
        }
        self.gen_range(0.0..upper)
    }

    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}
