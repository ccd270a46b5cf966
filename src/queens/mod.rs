//! Genetic-algorithm solver for the N-Queens problem.
//!
//! A board is encoded as a [`Chromosome`]: one gene per column holding the
//! 1-based row of that column's queen. The solver evolves a fixed-size
//! [`Population`] of such boards until one of them has no attacking pairs.
//!
//! # Generation
//!
//! 1. **Evaluation** ([`evaluate_population`]): fitness `1 - 2·A/(N·(N-1))`
//!    where `A` counts queen pairs sharing a row or diagonal.
//! 2. **Selection** ([`selection_weights`], [`ParentSampler`]):
//!    fitness-proportionate, with replacement, two parents per child.
//! 3. **Crossover** ([`single_point_crossover`]): point uniform in `[1, N-1]`.
//! 4. **Mutation** ([`point_mutation`]): with probability `mutation_rate`,
//!    one gene replaced by a uniform row.
//!
//! The whole population is replaced each generation (no elitism).
//!
//! # Key Types
//!
//! - [`QueensConfig`]: Algorithm parameters
//! - [`QueensRunner`]: Executes the evolutionary loop
//! - [`QueensResult`]: Solution and run statistics
//! - [`solve`]: One-call entry point returning the solution board
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
mod evaluation;
mod reproduction;
mod runner;
mod types;

pub use config::{QueensConfig, DEFAULT_STOP_THRESHOLD};
pub use error::QueensError;
pub use evaluation::{
    attack_count, best_individual, evaluate_population, fitness, fitness_from_attacks,
};
pub use reproduction::{
    breed, point_mutation, reproduce, selection_weights, single_point_crossover, ParentSampler,
};
pub use runner::{
    solve, solve_with_config, solve_with_defaults, QueensResult, QueensRunner, Termination,
};
pub use types::{Chromosome, Population};
