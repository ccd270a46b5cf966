//! Genetic-algorithm search for N-Queens placements.
//!
//! Finds a placement of N non-attacking queens on an N×N board by
//! evolving a population of candidate boards:
//!
//! - **Population**: fixed-size set of chromosomes, one row per column.
//! - **Fitness**: normalized count of attacking queen pairs.
//! - **Reproduction**: fitness-proportionate selection, single-point
//!   crossover, and point mutation.
//! - **Driver**: repeats evaluation and reproduction until a board with
//!   no attacks appears.
//!
//! ```
//! use queens_ga::queens::{attack_count, solve_with_config, QueensConfig};
//!
//! let config = QueensConfig::new(6)
//!     .with_population_size(40)
//!     .with_mutation_rate(0.1)
//!     .with_seed(42)
//!     .with_max_generations(100_000);
//! let board = solve_with_config(&config).unwrap();
//! assert_eq!(attack_count(&board), 0);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): evaluate and breed individuals on the rayon
//!   thread pool. Seeded runs give the same result with or without it.
//! - `serde`: `Serialize`/`Deserialize` for configuration and results.
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod queens;
