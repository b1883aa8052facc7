//! Colony configuration.

use crate::error::ValidationError;

/// Configuration for an ant colony.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::new(20, 0.8)
///     .with_deposit_constant(100.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.ant_count, 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants, which is also the batch size: pheromones are
    /// reinforced and evaporated once every `ant_count` evaluations.
    pub ant_count: usize,

    /// Multiplier applied to every pheromone entry once per batch.
    ///
    /// Accepted range is `[0.0, 1.0]`. `1.0` disables decay; `0.0` wipes
    /// the whole store, after which construction falls back to uniform
    /// sampling.
    pub evaporation_rate: f64,

    /// Deposit constant `K`: an ant with fitness `f` deposits `K / f` on
    /// every edge of its path.
    pub deposit_constant: f64,

    /// Lower bound of the random initial pheromone (inclusive, > 0).
    pub min_initial_pheromone: f64,

    /// Upper bound of the random initial pheromone (exclusive).
    pub max_initial_pheromone: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Construct the paths of one batch in parallel.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to a sequential run with the same seed.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 10,
            evaporation_rate: 0.9,
            deposit_constant: 1.0,
            min_initial_pheromone: 1e-3,
            max_initial_pheromone: 1.0,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    /// Creates a configuration with the given ant count and evaporation rate.
    pub fn new(ant_count: usize, evaporation_rate: f64) -> Self {
        Self {
            ant_count,
            evaporation_rate,
            ..Self::default()
        }
    }

    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_deposit_constant(mut self, k: f64) -> Self {
        self.deposit_constant = k;
        self
    }

    /// Sets the range `[min, max)` the initial pheromones are drawn from.
    pub fn with_initial_pheromone(mut self, min: f64, max: f64) -> Self {
        self.min_initial_pheromone = min;
        self.max_initial_pheromone = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ant_count == 0 {
            return Err(ValidationError::ZeroAnts);
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(ValidationError::EvaporationRateOutOfRange(
                self.evaporation_rate,
            ));
        }
        if !self.deposit_constant.is_finite() || self.deposit_constant <= 0.0 {
            return Err(ValidationError::NonPositiveDepositConstant(
                self.deposit_constant,
            ));
        }
        let (min, max) = (self.min_initial_pheromone, self.max_initial_pheromone);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(ValidationError::InvalidPheromoneRange { min, max });
        }
        Ok(())
    }
}
