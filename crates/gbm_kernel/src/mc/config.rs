//! Simulation configuration.
//!
//! [`SimConfig`] carries the discretisation settings for path
//! generation plus an optional seed. Construction goes through the
//! builder, which validates the counts, so a `SimConfig` in hand is
//! always well-formed.

use super::error::ConfigError;

/// Default path count, matching the visualisation driver.
const DEFAULT_N_PATHS: usize = 5;

/// Default step count over the horizon.
const DEFAULT_N_STEPS: usize = 50;

/// Validated simulation settings.
///
/// # Examples
/// ```
/// use gbm_kernel::SimConfig;
///
/// let config = SimConfig::builder()
///     .n_paths(1_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 1_000);
/// assert_eq!(config.seed(), Some(42));
///
/// // Zero counts are rejected
/// assert!(SimConfig::builder().n_steps(0).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl SimConfig {
    /// Starts a builder with the default settings (5 paths, 50 steps,
    /// no seed).
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Number of independent trajectories to simulate.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps per trajectory (each path holds
    /// `n_steps + 1` points including the initial spot).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Optional seed for reproducible simulation.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_N_PATHS,
            n_steps: DEFAULT_N_STEPS,
            seed: None,
        }
    }
}

/// Builder for [`SimConfig`].
#[derive(Clone, Debug)]
pub struct SimConfigBuilder {
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
}

impl Default for SimConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_N_PATHS,
            n_steps: DEFAULT_N_STEPS,
            seed: None,
        }
    }
}

impl SimConfigBuilder {
    /// Sets the number of trajectories.
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the number of time steps.
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Sets the seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the settings and produces the configuration.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroPaths`] if the path count is zero
    /// - [`ConfigError::ZeroSteps`] if the step count is zero
    pub fn build(self) -> Result<SimConfig, ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::ZeroPaths);
        }
        if self.n_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(SimConfig {
            n_paths: self.n_paths,
            n_steps: self.n_steps,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimConfig::builder().build().unwrap();
        assert_eq!(config.n_paths(), 5);
        assert_eq!(config.n_steps(), 50);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = SimConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_builder_rejects_zero_paths() {
        assert_eq!(
            SimConfig::builder().n_paths(0).build(),
            Err(ConfigError::ZeroPaths)
        );
    }

    #[test]
    fn test_builder_rejects_zero_steps() {
        assert_eq!(
            SimConfig::builder().n_steps(0).build(),
            Err(ConfigError::ZeroSteps)
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.n_paths() >= 1);
        assert!(config.n_steps() >= 1);
    }
}
