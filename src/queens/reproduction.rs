//! Reproduction: fitness-proportionate selection, single-point crossover,
//! and point mutation.
//!
//! [`reproduce`] replaces the whole population in one step:
//!
//! 1. Fitness is turned into selection weights ([`selection_weights`]).
//! 2. `2·P` parent indices are sampled with replacement ([`ParentSampler`]).
//! 3. Each child takes genes `[0, point)` from its first parent and
//!    `[point, N)` from its second, with `point` uniform in `[1, N-1]`.
//! 4. With probability `mutation_rate`, one gene of the child is replaced
//!    by a uniform value in `[1, N]`.
//!
//! # RNG partitioning
//!
//! Parent indices and one `u64` seed per child are drawn sequentially from
//! the caller's RNG. Each child is then built with its own [`StdRng`]
//! seeded from that value, so children can be built on any thread without
//! sharing RNG state and the output does not depend on `parallel`.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel, one-point crossover)

use super::evaluation::evaluate_population;
use super::types::{Chromosome, Population};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Converts a fitness vector into selection probabilities.
///
/// Fitness from [`fitness`](super::fitness) is never negative.
/// Vectors built by callers may be, so negative and NaN values are
/// clamped to `0` before normalizing. If nothing positive remains (every
/// board scoring `0.0`), every individual gets the same weight.
///
/// The returned weights sum to `1.0` (up to rounding).
///
/// # Examples
///
/// ```
/// use queens_ga::queens::selection_weights;
///
/// let w = selection_weights(&[0.5, -0.25, 1.5]);
/// assert_eq!(w, vec![0.25, 0.0, 0.75]);
/// ```
pub fn selection_weights(fitness: &[f64]) -> Vec<f64> {
    let clamped: Vec<f64> = fitness
        .iter()
        .map(|&f| if f > 0.0 { f } else { 0.0 })
        .collect();
    let total: f64 = clamped.iter().sum();

    if total > 0.0 && total.is_finite() {
        clamped.into_iter().map(|w| w / total).collect()
    } else {
        let n = fitness.len().max(1) as f64;
        vec![1.0 / n; fitness.len()]
    }
}

/// Weighted index sampler (roulette wheel).
///
/// Builds a cumulative weight table once, then draws each index in
/// O(log P) by binary search. Individuals with zero weight are never drawn.
#[derive(Debug, Clone)]
pub struct ParentSampler {
    cumulative: Vec<f64>,
}

impl ParentSampler {
    /// Builds a sampler from non-negative weights.
    ///
    /// Weights need not be normalized.
    ///
    /// # Panics
    /// Panics if `weights` is empty.
    pub fn new(weights: &[f64]) -> Self {
        assert!(!weights.is_empty(), "cannot sample from empty population");

        let mut total = 0.0;
        let cumulative = weights
            .iter()
            .map(|&w| {
                total += w.max(0.0);
                total
            })
            .collect();
        Self { cumulative }
    }

    /// Draws one index.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let n = self.cumulative.len();
        let total = self.cumulative[n - 1];
        if total <= 0.0 {
            return rng.random_range(0..n);
        }

        let threshold = rng.random::<f64>() * total;
        let idx = self.cumulative.partition_point(|&c| c <= threshold);
        idx.min(n - 1) // floating-point fallback
    }

    /// Draws `count` indices independently, with replacement.
    pub fn sample_many<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<usize> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Single-point crossover.
///
/// The child takes `parent1[..point]` followed by `parent2[point..]`.
///
/// # Panics
/// Panics if the parents differ in length or `point` is not within
/// `[1, N-1]`.
pub fn single_point_crossover(parent1: &[usize], parent2: &[usize], point: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        point >= 1 && point < n,
        "crossover point {point} must lie within [1, {}]",
        n.saturating_sub(1)
    );

    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Point mutation: overwrites one random gene with a random row in
/// `[1, N]`.
///
/// Returns the mutated position. The new value may equal the old one.
///
/// # Panics
/// Panics if `genes` is empty.
pub fn point_mutation<R: Rng>(genes: &mut [usize], rng: &mut R) -> usize {
    let n = genes.len();
    let position = rng.random_range(0..n);
    genes[position] = rng.random_range(1..=n);
    position
}

/// Builds one child from two parents: crossover, then mutation with
/// probability `mutation_rate`.
///
/// # Panics
/// Panics if the parents are shorter than two genes or differ in length.
pub fn breed<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    mutation_rate: f64,
    rng: &mut R,
) -> Chromosome {
    let n = parent1.len();
    let point = rng.random_range(1..n);
    let mut genes = single_point_crossover(parent1.genes(), parent2.genes(), point);

    if rng.random::<f64>() < mutation_rate {
        point_mutation(&mut genes, rng);
    }
    Chromosome::new(genes)
}

/// Produces the next generation.
///
/// `fitness` may carry the already computed fitness vector of
/// `population`; when `None` it is computed here. The returned population
/// has the same size and board size as the input. The caller recomputes
/// fitness for it.
///
/// `mutation_rate` is expected within `[0, 1]`; the solver validates it
/// before calling.
///
/// # Panics
/// Panics if `population` is empty, its board size is below 2, or
/// `fitness` has a different length than the population.
pub fn reproduce<R: Rng>(
    population: &Population,
    mutation_rate: f64,
    fitness: Option<&[f64]>,
    parallel: bool,
    rng: &mut R,
) -> Population {
    let pop_size = population.len();

    let computed;
    let fitness: &[f64] = match fitness {
        Some(f) => f,
        None => {
            computed = evaluate_population(population, parallel);
            computed.as_slice()
        }
    };
    assert_eq!(
        fitness.len(),
        pop_size,
        "fitness vector must match population size"
    );

    let sampler = ParentSampler::new(&selection_weights(fitness));
    let parents = sampler.sample_many(2 * pop_size, rng);
    let seeds: Vec<u64> = (0..pop_size).map(|_| rng.random()).collect();

    let chromosomes = population.chromosomes();
    let build_child = |i: usize| {
        let mut child_rng = StdRng::seed_from_u64(seeds[i]);
        breed(
            &chromosomes[parents[2 * i]],
            &chromosomes[parents[2 * i + 1]],
            mutation_rate,
            &mut child_rng,
        )
    };

    #[cfg(feature = "parallel")]
    let children: Vec<Chromosome> = if parallel {
        (0..pop_size).into_par_iter().map(build_child).collect()
    } else {
        (0..pop_size).map(build_child).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let children: Vec<Chromosome> = {
        let _ = parallel;
        (0..pop_size).map(build_child).collect()
    };

    Population::from_chromosomes(children)
}
