//! Batch generation of discretised GBM trajectories.
//!
//! Paths are stored in one flat row-major buffer
//! (`values[path * (n_steps + 1) + step]`) rather than nested vectors,
//! keeping the whole set in a single allocation.

use gbm_models::GbmParams;

use super::config::SimConfig;
use crate::rng::PathRng;

/// A batch of simulated price trajectories.
///
/// Each of the `n_paths` trajectories holds `n_steps + 1` points; point
/// 0 of every trajectory is exactly the initial spot. The set is
/// immutable after generation and owned by the caller.
///
/// # Examples
/// ```
/// use gbm_kernel::{generate_paths, PathRng, SimConfig};
/// use gbm_models::GbmParams;
///
/// let params = GbmParams::default();
/// let config = SimConfig::builder().n_paths(5).n_steps(50).build().unwrap();
/// let mut rng = PathRng::from_seed(42);
///
/// let paths = generate_paths(&mut rng, params, &config);
/// assert_eq!(paths.n_paths(), 5);
/// assert_eq!(paths.path(0).len(), 51);
/// assert_eq!(paths.path(0)[0], params.spot);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathSet {
    values: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
}

impl PathSet {
    /// Number of trajectories in the set.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per trajectory.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Points per trajectory (`n_steps + 1`, including the spot).
    #[inline]
    pub fn points_per_path(&self) -> usize {
        self.n_steps + 1
    }

    /// Returns one trajectory as a slice of prices.
    ///
    /// # Panics
    /// Panics if `index >= n_paths()`.
    #[inline]
    pub fn path(&self, index: usize) -> &[f64] {
        let stride = self.points_per_path();
        &self.values[index * stride..(index + 1) * stride]
    }

    /// Iterates over the trajectories in order.
    pub fn iter_paths(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.points_per_path())
    }
}

/// Generates a batch of independent GBM trajectories.
///
/// The horizon is split into `n_steps` equal intervals of size
/// `dt = T / n_steps`. Each path evolves from the spot through the
/// exact log-space transition, one fresh standard-normal draw per step,
/// so the sampling carries no discretisation bias at any step count.
///
/// Pure function of the parameters and the generator state: the caller
/// owns the [`PathRng`] and decides between a pinned seed and entropy.
pub fn generate_paths(rng: &mut PathRng, params: GbmParams, config: &SimConfig) -> PathSet {
    let n_paths = config.n_paths();
    let n_steps = config.n_steps();
    let dt = params.maturity / n_steps as f64;

    let mut values = Vec::with_capacity(n_paths * (n_steps + 1));
    let mut shocks = vec![0.0; n_steps];

    for _ in 0..n_paths {
        rng.fill_normal(&mut shocks);

        let mut price = params.spot;
        values.push(price);
        for &z in &shocks {
            price = params.step(price, dt, z);
            values.push(price);
        }
    }

    PathSet {
        values,
        n_paths,
        n_steps,
    }
}
