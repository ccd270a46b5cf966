//! Evolutionary loop execution.
//!
//! [`QueensRunner`] orchestrates the search:
//! initialization → evaluation → (reproduction → evaluation)* → solution.
//!
//! The loop runs until some individual's fitness exceeds the stop
//! threshold or some individual has no attacking pairs. There is no
//! generation cap unless one is configured.

use super::config::{QueensConfig, DEFAULT_STOP_THRESHOLD};
use super::error::QueensError;
use super::evaluation::{attack_count, best_individual, evaluate_population};
use super::reproduction::reproduce;
use super::types::{Chromosome, Population};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Why the evolutionary loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// An individual exceeded the stop threshold or has zero attacks.
    Converged,
    /// `max_generations` was reached.
    GenerationLimit,
    /// `time_limit_ms` elapsed.
    TimeLimit,
    /// The cancellation flag was set.
    Cancelled,
}

/// Result of a solver run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensResult {
    /// The first individual of the final population with fitness exactly
    /// `1.0`, or the best individual when none has it.
    pub solution: Chromosome,

    /// Fitness of `solution`.
    pub fitness: f64,

    /// Attacking pairs in `solution`.
    pub attacks: usize,

    /// Number of reproduction rounds executed.
    pub generations: usize,

    /// Why the loop stopped.
    pub termination: Termination,

    /// Best fitness of the initial population and after every generation.
    pub fitness_history: Vec<f64>,
}

impl QueensResult {
    /// Returns `true` if no pair of queens in `solution` attacks.
    pub fn is_solution(&self) -> bool {
        self.attacks == 0
    }
}

/// Executes the N-Queens evolutionary loop.
///
/// # Usage
///
/// ```
/// use queens_ga::queens::{QueensConfig, QueensRunner};
///
/// let config = QueensConfig::new(6).with_population_size(40).with_seed(42);
/// let result = QueensRunner::run(&config).unwrap();
/// assert!(result.is_solution());
/// ```
pub struct QueensRunner;

impl QueensRunner {
    /// Runs the solver.
    ///
    /// Fails only if the configuration is invalid. With no generation or
    /// time limit configured, this may run indefinitely.
    pub fn run(config: &QueensConfig) -> Result<QueensResult, QueensError> {
        Self::run_with_cancel(config, None)
    }

    /// Runs the solver with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search
    /// stops at the start of the next generation and returns the best
    /// individual found in the current population.
    pub fn run_with_cancel(
        config: &QueensConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<QueensResult, QueensError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!(
            "queens: n={} population={} mutation_rate={} stop_threshold={} seed={}",
            config.chromosome_size,
            config.population_size,
            config.mutation_rate,
            config.stop_threshold,
            seed
        );

        let start = Instant::now();

        let mut population =
            Population::random(config.population_size, config.chromosome_size, &mut rng);
        let mut fitness = evaluate_population(&population, config.parallel);

        let mut fitness_history = Vec::new();
        fitness_history.push(max_fitness(&fitness));

        let mut generations = 0usize;
        let termination = loop {
            if has_converged(&fitness, config.stop_threshold) {
                break Termination::Converged;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }
            if config.max_generations.is_some_and(|max| generations >= max) {
                break Termination::GenerationLimit;
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    break Termination::TimeLimit;
                }
            }

            population = reproduce(
                &population,
                config.mutation_rate,
                Some(&fitness),
                config.parallel,
                &mut rng,
            );
            fitness = evaluate_population(&population, config.parallel);
            generations += 1;

            let best = max_fitness(&fitness);
            fitness_history.push(best);
            trace!("queens: generation {generations} best fitness {best:.6}");
        };

        let index = select_solution(&fitness);
        let solution = population.chromosomes()[index].clone();
        let attacks = attack_count(&solution);

        match termination {
            Termination::Converged if attacks == 0 => {
                info!("queens: solved n={} after {generations} generations", solution.len());
            }
            Termination::Converged => {
                warn!(
                    "queens: threshold {} reached without an exact solution, returning best individual ({attacks} attacks)",
                    config.stop_threshold
                );
            }
            other => {
                warn!("queens: stopped after {generations} generations ({other:?}) with {attacks} attacks");
            }
        }

        Ok(QueensResult {
            fitness: fitness[index],
            solution,
            attacks,
            generations,
            termination,
            fitness_history,
        })
    }
}

/// Solves the N-Queens problem and returns a solution chromosome.
///
/// Runs until some individual's fitness exceeds `stop_threshold` (or an
/// exact solution appears). Returns the first exact solution of the final
/// population, or its best individual if none is exact (possible only for
/// thresholds below the fitness of a one-attack board).
///
/// # Errors
/// Returns an invalid-parameter error when `pop_size < 3`,
/// `chrom_size < 4`, `mutation_rate` is outside `[0, 1]`, or
/// `stop_threshold` is outside `(0, 1]`.
///
/// # Examples
///
/// ```
/// use queens_ga::queens::{fitness, solve};
///
/// // Unbounded search; 5 queens converges within a few generations.
/// let board = solve(30, 5, 0.1, 0.999).unwrap();
/// assert_eq!(board.len(), 5);
/// assert_eq!(fitness(&board), 1.0);
/// ```
pub fn solve(
    pop_size: usize,
    chrom_size: usize,
    mutation_rate: f64,
    stop_threshold: f64,
) -> Result<Chromosome, QueensError> {
    let config = QueensConfig::new(chrom_size)
        .with_population_size(pop_size)
        .with_mutation_rate(mutation_rate)
        .with_stop_threshold(stop_threshold);
    solve_with_config(&config)
}

/// [`solve`] with the default stop threshold of `0.999`.
pub fn solve_with_defaults(
    pop_size: usize,
    chrom_size: usize,
    mutation_rate: f64,
) -> Result<Chromosome, QueensError> {
    solve(pop_size, chrom_size, mutation_rate, DEFAULT_STOP_THRESHOLD)
}

/// Runs the solver with a full configuration and returns the chromosome.
///
/// # Errors
/// Invalid parameters, or [`QueensError::NotConverged`] when a configured
/// generation or time limit ended the search first.
pub fn solve_with_config(config: &QueensConfig) -> Result<Chromosome, QueensError> {
    let result = QueensRunner::run(config)?;
    match result.termination {
        Termination::Converged => Ok(result.solution),
        termination => Err(QueensError::NotConverged {
            generations: result.generations,
            termination,
        }),
    }
}

/// Stop test: any fitness above the threshold, or any exact solution.
fn has_converged(fitness: &[f64], threshold: f64) -> bool {
    fitness.iter().any(|&f| f > threshold || f == 1.0)
}

/// First exact solution, else the best individual.
fn select_solution(fitness: &[f64]) -> usize {
    fitness
        .iter()
        .position(|&f| f == 1.0)
        .or_else(|| best_individual(fitness).map(|(i, _)| i))
        .unwrap_or(0)
}

fn max_fitness(fitness: &[f64]) -> f64 {
    best_individual(fitness).map_or(f64::NEG_INFINITY, |(_, f)| f)
}

// ============================================================================
// Tests
// ============================================================================
