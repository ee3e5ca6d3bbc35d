//! Shared test utilities for `joinery-core`.

use joinery_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// A vertex count together with an undirected edge list over it.
///
/// Used both for graphs and for union-find pair streams, where the vertex
/// count is the universe size.
#[derive(Clone, Debug)]
pub(crate) struct EdgeListFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize)>,
}

impl EdgeListFixture {
    pub(crate) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
    }
}

/// Generates edge lists with up to `max_vertices` vertices and `max_edges`
/// edges. Self-loops and duplicate edges are allowed.
pub(crate) fn edge_list_strategy(
    max_vertices: usize,
    max_edges: usize,
) -> impl Strategy<Value = EdgeListFixture> {
    (1..=max_vertices).prop_flat_map(move |vertex_count| {
        prop::collection::vec((0..vertex_count, 0..vertex_count), 0..=max_edges).prop_map(
            move |edges| EdgeListFixture {
                vertex_count,
                edges,
            },
        )
    })
}

/// Builds a seeded random multigraph with exactly `edge_count` edges.
pub(crate) fn random_fixture(seed: u64, vertex_count: usize, edge_count: usize) -> EdgeListFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let edges = (0..edge_count)
        .map(|_| (rng.gen_range(0..vertex_count), rng.gen_range(0..vertex_count)))
        .collect();
    EdgeListFixture {
        vertex_count,
        edges,
    }
}

/// Path `0 - 1 - ... - (n - 1)`.
pub(crate) fn path_graph(vertex_count: usize) -> Graph {
    Graph::from_edges(vertex_count, (1..vertex_count).map(|v| (v - 1, v)))
}

/// Simple cycle over `n >= 3` vertices.
pub(crate) fn cycle_graph(vertex_count: usize) -> Graph {
    let mut graph = path_graph(vertex_count);
    graph.add_edge(vertex_count - 1, 0);
    graph
}

/// All-pairs shortest edge counts by Floyd-Warshall; `None` means unreachable.
pub(crate) fn distance_matrix(fixture: &EdgeListFixture) -> Vec<Vec<Option<usize>>> {
    let n = fixture.vertex_count;
    let mut dist = vec![vec![None; n]; n];
    for (v, row) in dist.iter_mut().enumerate() {
        row[v] = Some(0);
    }
    for &(v, w) in &fixture.edges {
        if v != w {
            dist[v][w] = Some(1);
            dist[w][v] = Some(1);
        }
    }
    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(kj) = dist[k][j] else { continue };
                let through = ik + kj;
                if dist[i][j].is_none_or(|current| through < current) {
                    dist[i][j] = Some(through);
                }
            }
        }
    }
    dist
}
