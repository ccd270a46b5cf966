//! Attack counting and fitness evaluation.
//!
//! Two queens attack each other when they share a row or a diagonal.
//! Columns are distinct by construction, so only rows and diagonals are
//! checked. Fitness normalizes the attack count against the number of
//! queen pairs:
//!
//! ```text
//! fitness = 1 - 2·A / (N·(N-1))
//! ```
//!
//! A board with no attacks scores exactly `1.0`. At most `N·(N-1)/2` pairs
//! can attack, so the worst board scores `0.0` and fitness stays within
//! `[0, 1]`.

use super::types::{Chromosome, Population};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts the unordered pairs of queens that attack each other.
///
/// # Complexity
/// O(N²)
///
/// # Examples
///
/// ```
/// use queens_ga::queens::{attack_count, Chromosome};
///
/// assert_eq!(attack_count(&Chromosome::new(vec![2, 4, 1, 3])), 0);
/// assert_eq!(attack_count(&Chromosome::new(vec![1, 1, 1, 1])), 6);
/// ```
pub fn attack_count(chromosome: &Chromosome) -> usize {
    let genes = chromosome.genes();
    let n = genes.len();
    let mut attacks = 0;

    for i in 0..n.saturating_sub(1) {
        let row_i = genes[i];
        for (offset, &row_j) in genes[i + 1..].iter().enumerate() {
            let distance = offset + 1;
            if row_i == row_j || row_i.abs_diff(row_j) == distance {
                attacks += 1;
            }
        }
    }
    attacks
}

/// Maps an attack count on an `n`-column board to a normalized fitness.
///
/// Boards with fewer than two columns have no pairs and score `1.0`.
pub fn fitness_from_attacks(attacks: usize, n: usize) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let pairs = (n * (n - 1)) as f64;
    1.0 - 2.0 * attacks as f64 / pairs
}

/// Fitness of a single chromosome.
///
/// Exactly `1.0` if and only if no pair of queens attacks.
pub fn fitness(chromosome: &Chromosome) -> f64 {
    fitness_from_attacks(attack_count(chromosome), chromosome.len())
}

/// Evaluates every member of the population, returning the fitness vector
/// in population order.
///
/// When `parallel` is set (and the `parallel` feature is enabled) the
/// evaluation runs on the rayon thread pool. The result is identical in
/// both modes.
pub fn evaluate_population(population: &Population, parallel: bool) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population.chromosomes().par_iter().map(fitness).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(fitness).collect()
}

/// Index and value of the highest fitness. Ties resolve to the first index.
///
/// Returns `None` for an empty vector or one containing only NaN.
pub fn best_individual(fitness: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &f) in fitness.iter().enumerate() {
        match best {
            Some((_, current)) if f <= current => {}
            _ if f.is_nan() => {}
            _ => best = Some((i, f)),
        }
    }
    best
}
