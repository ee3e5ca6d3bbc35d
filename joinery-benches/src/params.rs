//! Benchmark parameter types rendered into Criterion benchmark ids.

use std::fmt;

use joinery_core::UnionFindVariant;

/// Parameters for a union-find benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct UnionFindBenchParams {
    /// Union-find variant under test.
    pub variant: UnionFindVariant,
    /// Size of the element universe.
    pub element_count: usize,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.variant, self.element_count)
    }
}

/// Parameters for a graph traversal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},E={}", self.vertex_count, self.edge_count)
    }
}
