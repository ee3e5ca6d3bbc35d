//! Synthetic workloads for benchmarking.
//!
//! A [`PairStream`] is a seeded sequence of id pairs over `0..element_count`.
//! The same stream feeds the union-find benchmarks directly and the graph
//! benchmarks as an edge list, so both families see identical inputs.

use joinery_core::{Graph, JoineryError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic workload generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested element count was zero.
    #[error("element count must be greater than zero")]
    ZeroElements,
}

/// Configuration for a random pair stream.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Size of the id universe.
    pub element_count: usize,
    /// Number of pairs to draw.
    pub pair_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A sequence of id pairs over `0..element_count`.
///
/// # Examples
///
/// ```
/// use joinery_benches::source::{PairStream, SyntheticConfig};
///
/// let config = SyntheticConfig { element_count: 8, pair_count: 12, seed: 7 };
/// let stream = PairStream::generate(&config).expect("valid config");
/// assert_eq!(stream.pairs().len(), 12);
/// let graph = stream.graph().expect("pairs stay in range");
/// assert_eq!(graph.edge_count(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairStream {
    element_count: usize,
    pairs: Vec<(usize, usize)>,
}

impl PairStream {
    /// Draws `pair_count` uniformly random pairs from a seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroElements`] if `element_count` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.element_count == 0 {
            return Err(SyntheticError::ZeroElements);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pairs = (0..config.pair_count)
            .map(|_| {
                (
                    rng.gen_range(0..config.element_count),
                    rng.gen_range(0..config.element_count),
                )
            })
            .collect();
        Ok(Self {
            element_count: config.element_count,
            pairs,
        })
    }

    /// The chain `0 - 1 - ... - (element_count - 1)`, the worst case for
    /// unbalanced forests and for recursion depth.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroElements`] if `element_count` is zero.
    pub fn chain(element_count: usize) -> Result<Self, SyntheticError> {
        if element_count == 0 {
            return Err(SyntheticError::ZeroElements);
        }
        let pairs = (1..element_count).map(|v| (v - 1, v)).collect();
        Ok(Self {
            element_count,
            pairs,
        })
    }

    /// Size of the id universe.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.element_count
    }

    /// The pairs in generation order.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Builds a graph over `0..element_count` with one edge per pair.
    ///
    /// # Errors
    ///
    /// Returns [`JoineryError::VertexOutOfRange`] if a pair escapes the
    /// universe.
    pub fn graph(&self) -> Result<Graph, JoineryError> {
        let mut graph = Graph::new(self.element_count);
        for &(v, w) in &self.pairs {
            graph.try_add_edge(v, w)?;
        }
        Ok(graph)
    }
}
