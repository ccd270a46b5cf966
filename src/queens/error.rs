//! Solver errors.

use super::runner::Termination;
use thiserror::Error;

/// Errors returned by the N-Queens solver.
///
/// All variants except [`NotConverged`](QueensError::NotConverged) describe
/// invalid parameters and are raised before any population is created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueensError {
    /// Fewer than three individuals leaves crossover without peers.
    #[error("population_size must be at least 3, got {size}")]
    PopulationTooSmall { size: usize },

    /// Boards smaller than 4×4 (other than the trivial 1×1) have no solution.
    #[error("chromosome_size must be at least 4, got {size}")]
    BoardTooSmall { size: usize },

    #[error("mutation_rate must be within [0, 1], got {rate}")]
    MutationRateOutOfRange { rate: f64 },

    #[error("stop_threshold must be within (0, 1], got {threshold}")]
    StopThresholdOutOfRange { threshold: f64 },

    #[error("max_generations must be positive or None")]
    ZeroGenerationLimit,

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,

    /// A generation cap, time limit, or cancellation stopped the run before
    /// the stop threshold was reached.
    #[error("search stopped after {generations} generations without converging ({termination:?})")]
    NotConverged {
        generations: usize,
        termination: Termination,
    },
}

impl QueensError {
    /// Returns `true` for the invalid-parameter family of errors.
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(self, QueensError::NotConverged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_classification() {
        assert!(QueensError::PopulationTooSmall { size: 2 }.is_invalid_parameter());
        assert!(QueensError::BoardTooSmall { size: 3 }.is_invalid_parameter());
        assert!(QueensError::MutationRateOutOfRange { rate: 1.5 }.is_invalid_parameter());
        assert!(QueensError::ZeroTimeLimit.is_invalid_parameter());
        assert!(!QueensError::NotConverged {
            generations: 10,
            termination: Termination::GenerationLimit,
        }
        .is_invalid_parameter());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            QueensError::PopulationTooSmall { size: 2 }.to_string(),
            "population_size must be at least 3, got 2"
        );
        assert_eq!(
            QueensError::BoardTooSmall { size: 3 }.to_string(),
            "chromosome_size must be at least 4, got 3"
        );
    }
}
