//! Random number generation for Monte Carlo simulation.
//!
//! [`PathRng`] wraps the standard library of the `rand` ecosystem
//! (`StdRng` seeded explicitly, `rand_distr::StandardNormal` for the
//! Gaussian draws) behind the small surface the simulation kernel
//! needs. The generator is always an explicitly passed dependency of
//! the simulation functions, never constructed inside them, so tests
//! can pin a seed while production callers draw one from entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Seeded source of standard-normal variates.
///
/// # Examples
/// ```
/// use gbm_kernel::rng::PathRng;
///
/// let mut rng = PathRng::from_seed(42);
/// let z = rng.gen_normal();
/// assert!(z.is_finite());
///
/// // Same seed, same sequence
/// let mut other = PathRng::from_seed(42);
/// assert_eq!(other.gen_normal(), z);
/// ```
#[derive(Debug, Clone)]
pub struct PathRng {
    rng: StdRng,
    seed: u64,
}

impl PathRng {
    /// Creates a generator from an explicit seed.
    ///
    /// Two generators built from the same seed produce identical draw
    /// sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from operating-system entropy.
    ///
    /// The drawn seed is retained and queryable via [`seed`](Self::seed)
    /// so a run can still be reported and replayed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed this generator was constructed with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one standard-normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Fills `buffer` with independent standard-normal variates.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.rng.sample(StandardNormal);
        }
    }
}
