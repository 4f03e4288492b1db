//! Deterministic random number generation for dice and AI sampling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice and AI decisions
//! - **Forkable**: Independent branches, e.g. one stream per bot
//! - **Injectable**: Everything that consumes randomness takes a
//!   `RandomSource`, so tests can substitute a scripted source
//!
//! ```
//! use backgammon_engine::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let die = rng.roll_die();
//! assert!((1..=6).contains(&die));
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(), die);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Source of the randomness the engine consumes.
///
/// Dice rolls, opponent-roll sampling in the lookahead and low-skill noise
/// all go through this trait and nowhere else.
pub trait RandomSource {
    /// A uniform die value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// A uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a named context (a bot id, a game id).
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random u32, used for short identifiers.
    pub fn next_u32(&mut self) -> u32 {
        self.inner.gen()
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
