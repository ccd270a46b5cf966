//! Solver configuration.
//!
//! [`QueensConfig`] holds all parameters that control the evolutionary loop.

use super::error::QueensError;

/// Fitness above which the solver stops, unless configured otherwise.
pub const DEFAULT_STOP_THRESHOLD: f64 = 0.999;

/// Configuration for the N-Queens genetic solver.
///
/// # Defaults
///
/// ```
/// use queens_ga::queens::QueensConfig;
///
/// let config = QueensConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.chromosome_size, 8);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::queens::QueensConfig;
///
/// let config = QueensConfig::new(12)
///     .with_population_size(200)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values verbatim. Out-of-range values are reported by
/// [`validate`](Self::validate), never clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensConfig {
    /// Number of individuals per generation. Must be at least 3.
    pub population_size: usize,

    /// Board size N (chromosome length). Must be at least 4.
    pub chromosome_size: usize,

    /// Probability that a child receives one point mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// The loop stops once any individual's fitness exceeds this value,
    /// or any individual has zero attacks. Must be within `(0, 1]`.
    pub stop_threshold: f64,

    /// Whether to evaluate and breed individuals in parallel using rayon.
    ///
    /// Ignored when the `parallel` feature is disabled. Results do not
    /// depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional cap on the number of generations.
    ///
    /// `None` (the default) searches until convergence.
    pub max_generations: Option<usize>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so a run may overshoot by
    /// one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            chromosome_size: 8,
            mutation_rate: 0.05,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
            parallel: true,
            seed: None,
            max_generations: None,
            time_limit_ms: None,
        }
    }
}

impl QueensConfig {
    /// Default configuration for an `n`×`n` board.
    pub fn new(chromosome_size: usize) -> Self {
        Self {
            chromosome_size,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the board size.
    pub fn with_chromosome_size(mut self, n: usize) -> Self {
        self.chromosome_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the stop threshold.
    pub fn with_stop_threshold(mut self, threshold: f64) -> Self {
        self.stop_threshold = threshold;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first invalid parameter found, in field order.
    pub fn validate(&self) -> Result<(), QueensError> {
        if self.population_size < 3 {
            return Err(QueensError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.chromosome_size < 4 {
            return Err(QueensError::BoardTooSmall {
                size: self.chromosome_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(QueensError::MutationRateOutOfRange {
                rate: self.mutation_rate,
            });
        }
        if !(self.stop_threshold > 0.0 && self.stop_threshold <= 1.0) {
            return Err(QueensError::StopThresholdOutOfRange {
                threshold: self.stop_threshold,
            });
        }
        if self.max_generations == Some(0) {
            return Err(QueensError::ZeroGenerationLimit);
        }
        if self.time_limit_ms == Some(0) {
            return Err(QueensError::ZeroTimeLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueensConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.chromosome_size, 8);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.stop_threshold - 0.999).abs() < 1e-10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.max_generations.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = QueensConfig::new(10)
            .with_population_size(120)
            .with_mutation_rate(0.2)
            .with_stop_threshold(0.95)
            .with_parallel(false)
            .with_seed(7)
            .with_max_generations(1000)
            .with_time_limit_ms(500);

        assert_eq!(config.chromosome_size, 10);
        assert_eq!(config.population_size, 120);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!((config.stop_threshold - 0.95).abs() < 1e-10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_generations, Some(1000));
        assert_eq!(config.time_limit_ms, Some(500));
    }

    #[test]
    fn test_rates_are_not_clamped() {
        let config = QueensConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.5).abs() < 1e-10);
        assert_eq!(
            config.validate(),
            Err(QueensError::MutationRateOutOfRange { rate: 1.5 })
        );
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = QueensConfig::default().with_population_size(2);
        assert_eq!(
            config.validate(),
            Err(QueensError::PopulationTooSmall { size: 2 })
        );
        assert!(QueensConfig::default().with_population_size(3).validate().is_ok());
    }

    #[test]
    fn test_validate_board_too_small() {
        let config = QueensConfig::new(3).with_population_size(10);
        assert_eq!(config.validate(), Err(QueensError::BoardTooSmall { size: 3 }));
        assert!(QueensConfig::new(4).validate().is_ok());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        assert!(QueensConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(QueensConfig::default().with_mutation_rate(1.0).validate().is_ok());
        assert!(QueensConfig::default().with_mutation_rate(-0.01).validate().is_err());
        assert!(QueensConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_stop_threshold_bounds() {
        assert!(QueensConfig::default().with_stop_threshold(1.0).validate().is_ok());
        assert!(QueensConfig::default().with_stop_threshold(0.5).validate().is_ok());
        assert!(QueensConfig::default().with_stop_threshold(0.0).validate().is_err());
        assert!(QueensConfig::default().with_stop_threshold(1.01).validate().is_err());
        assert!(QueensConfig::default()
            .with_stop_threshold(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_limits() {
        assert_eq!(
            QueensConfig::default().with_max_generations(0).validate(),
            Err(QueensError::ZeroGenerationLimit)
        );
        assert_eq!(
            QueensConfig::default().with_time_limit_ms(0).validate(),
            Err(QueensError::ZeroTimeLimit)
        );
        assert!(QueensConfig::default().with_time_limit_ms(1).validate().is_ok());
    }
}
