//! Seeded deterministic RNG.
//!
//! `Xoshiro256StarStar` is used instead of `rand::rngs::StdRng` because its
//! `serde1`-featured `Serialize`/`Deserialize` impl round-trips the RNG
//! state byte-for-byte through [`crate::game::snapshot::Snapshot`], which
//! `StdRng` does not guarantee across `rand` versions.

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

/// A single source of randomness carried on [`crate::game::Game`]. Every
/// draw made by the turn executor goes through this type, in a fixed call
/// order, so that replays given the same seed and the same orders are
/// byte-identical.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameRng {
    inner: Xoshiro256StarStar,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Draw a uniform integer in `0..n`. Panics if `n == 0`.
    pub fn uniform_int(&mut self, n: u32) -> u32 {
        assert!(n > 0, "uniform_int called with n == 0");
        self.inner.gen_range(0..n)
    }

    /// Draw a uniform float in `0.0..1.0`.
    pub fn percent(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
