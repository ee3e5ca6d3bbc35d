//! Breadth-first path discovery.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::Graph;

use super::PathTree;

/// Breadth-first search paths from a single source.
///
/// Vertices are discovered in order of distance, so every recorded path is a
/// shortest path in edge count.
///
/// # Examples
/// ```
/// use joinery_core::{BreadthFirstPaths, Graph, Paths};
///
/// let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
/// let paths = BreadthFirstPaths::new(&graph, 0);
/// assert_eq!(paths.path_to(4), Some(vec![4, 3, 2, 1, 0]));
/// assert_eq!(paths.distance_to(4), Some(4));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BreadthFirstPaths {
    tree: PathTree,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Searches `graph` from `source`.
    ///
    /// # Panics
    /// Panics when `source >= graph.vertex_count()`.
    #[must_use]
    #[instrument(
        name = "graph.bfs_paths",
        level = "debug",
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn new(graph: &Graph, source: usize) -> Self {
        let mut tree = PathTree::new(graph.vertex_count(), source);
        let mut dist_to = vec![None; graph.vertex_count()];
        dist_to[source] = Some(0);

        let mut queue = VecDeque::from([(source, 0_usize)]);
        while let Some((vertex, distance)) = queue.pop_front() {
            for &next in graph.adj(vertex) {
                if tree.is_marked(next) {
                    continue;
                }
                tree.mark(next, vertex);
                dist_to[next] = Some(distance + 1);
                queue.push_back((next, distance + 1));
            }
        }
        debug!(reached = tree.reachable_count(), "breadth-first search completed");
        Self { tree, dist_to }
    }

    /// Number of edges on the shortest path from the source to `v`, or
    /// `None` when `v` was not reached.
    ///
    /// # Panics
    /// Panics when `v` is outside the searched graph.
    #[must_use]
    pub fn distance_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }
}

impl_paths!(BreadthFirstPaths);
