//! Chromosome and population representation.
//!
//! A [`Chromosome`] encodes one board: position `i` is a column and the
//! value stored there is the 1-based row of the queen in that column.
//! A [`Population`] is a fixed-size, ordered collection of chromosomes that
//! all share the same board size.

use rand::Rng;
use std::fmt;

/// One candidate board configuration.
///
/// Genes are 1-based rows in `[1, N]`. Rows may repeat; repeated rows are
/// attacking queens, which the fitness function penalizes.
///
/// # Examples
///
/// ```
/// use queens_ga::queens::Chromosome;
///
/// let c = Chromosome::new(vec![2, 4, 1, 3]);
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.genes(), &[2, 4, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome whose genes are drawn uniformly from `[1, n]`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let genes = (0..n).map(|_| rng.random_range(1..=n)).collect();
        Self { genes }
    }

    /// The gene values (rows), one per column.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Board size N.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` for a zero-length chromosome.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns `true` if every gene lies in `[1, N]`.
    pub fn is_within_bounds(&self) -> bool {
        let n = self.genes.len();
        self.genes.iter().all(|&g| (1..=n).contains(&g))
    }

    /// Consumes the chromosome and returns its genes.
    pub fn into_genes(self) -> Vec<usize> {
        self.genes
    }
}

impl From<Vec<usize>> for Chromosome {
    fn from(genes: Vec<usize>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, g) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, "]")
    }
}

/// A generation of candidate boards.
///
/// Individuals are fully replaced each generation; nothing survives into
/// the next population except through reproduction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    chromosome_size: usize,
}

impl Population {
    /// Creates `population_size` random chromosomes of length
    /// `chromosome_size`, every gene uniform over `[1, chromosome_size]`.
    pub fn random<R: Rng>(population_size: usize, chromosome_size: usize, rng: &mut R) -> Self {
        let chromosomes = (0..population_size)
            .map(|_| Chromosome::random(chromosome_size, rng))
            .collect();
        Self {
            chromosomes,
            chromosome_size,
        }
    }

    /// Builds a population from existing chromosomes.
    ///
    /// # Panics
    /// Panics if the chromosomes do not all have the same length.
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        let chromosome_size = chromosomes.first().map_or(0, Chromosome::len);
        assert!(
            chromosomes.iter().all(|c| c.len() == chromosome_size),
            "all chromosomes must have the same length"
        );
        Self {
            chromosomes,
            chromosome_size,
        }
    }

    /// Number of individuals P.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Returns `true` if the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Board size N shared by every chromosome.
    pub fn chromosome_size(&self) -> usize {
        self.chromosome_size
    }

    /// The individuals, in order.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Individual at `index`.
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    /// Iterates over the individuals.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// Consumes the population and returns its chromosomes.
    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_population_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = Population::random(30, 8, &mut rng);

        assert_eq!(pop.len(), 30);
        assert_eq!(pop.chromosome_size(), 8);
        for c in &pop {
            assert_eq!(c.len(), 8);
            assert!(c.is_within_bounds(), "gene out of range: {c}");
        }
    }

    #[test]
    fn test_random_genes_cover_full_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let pop = Population::random(200, 6, &mut rng);

        let mut seen = [false; 7];
        for c in &pop {
            for &g in c.genes() {
                seen[g] = true;
            }
        }
        assert!(!seen[0], "gene value 0 must never be produced");
        assert!(seen[1..].iter().all(|&s| s), "expected every row 1..=6: {seen:?}");
    }

    #[test]
    fn test_seeded_population_is_reproducible() {
        let a = Population::random(10, 8, &mut StdRng::seed_from_u64(99));
        let b = Population::random(10, 8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_within_bounds() {
        assert!(Chromosome::new(vec![1, 4, 2, 3]).is_within_bounds());
        assert!(!Chromosome::new(vec![0, 4, 2, 3]).is_within_bounds());
        assert!(!Chromosome::new(vec![1, 5, 2, 3]).is_within_bounds());
    }

    #[test]
    fn test_display() {
        let c = Chromosome::new(vec![2, 4, 1, 3]);
        assert_eq!(c.to_string(), "[2, 4, 1, 3]");
    }

    #[test]
    #[should_panic(expected = "all chromosomes must have the same length")]
    fn test_ragged_population_panics() {
        Population::from_chromosomes(vec![
            Chromosome::new(vec![1, 2, 3, 4]),
            Chromosome::new(vec![1, 2, 3]),
        ]);
    }
}
