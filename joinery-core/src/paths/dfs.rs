//! Depth-first path discovery.

use tracing::{debug, instrument};

use crate::Graph;

use super::PathTree;

/// How [`DepthFirstPaths`] walks the graph.
///
/// Both strategies visit adjacency lists in the same order and descend only
/// into neighbours that are unvisited when reached, so they build identical
/// predecessor trees.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum DfsStrategy {
    /// Explicit stack of frames; depth is bounded only by memory.
    #[default]
    Iterative,
    /// Call-stack recursion. Deep path-like graphs can overflow the stack,
    /// so keep this to small inputs.
    Recursive,
}

/// Depth-first search paths from a single source.
///
/// # Examples
/// ```
/// use joinery_core::{DepthFirstPaths, Graph, Paths};
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
/// let paths = DepthFirstPaths::new(&graph, 0);
/// assert_eq!(paths.path_to(2), Some(vec![2, 1, 0]));
/// assert_eq!(paths.path_to(3), None);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepthFirstPaths {
    tree: PathTree,
    strategy: DfsStrategy,
}

impl DepthFirstPaths {
    /// Searches `graph` from `source` with the iterative strategy.
    ///
    /// # Panics
    /// Panics when `source >= graph.vertex_count()`.
    #[must_use]
    pub fn new(graph: &Graph, source: usize) -> Self {
        Self::with_strategy(graph, source, DfsStrategy::Iterative)
    }

    /// Searches `graph` from `source` with the given strategy.
    ///
    /// # Panics
    /// Panics when `source >= graph.vertex_count()`.
    #[must_use]
    #[instrument(
        name = "graph.dfs_paths",
        level = "debug",
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn with_strategy(graph: &Graph, source: usize, strategy: DfsStrategy) -> Self {
        let mut tree = PathTree::new(graph.vertex_count(), source);
        match strategy {
            DfsStrategy::Iterative => search_iterative(&mut tree, graph),
            DfsStrategy::Recursive => search_recursive(&mut tree, graph, source),
        }
        debug!(reached = tree.reachable_count(), "depth-first search completed");
        Self { tree, strategy }
    }

    /// Strategy the search ran with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> DfsStrategy { self.strategy }
}

impl_paths!(DepthFirstPaths);

/// A vertex on the explicit stack and the next adjacency slot to examine.
struct Frame {
    vertex: usize,
    cursor: usize,
}

fn search_iterative(tree: &mut PathTree, graph: &Graph) {
    let mut stack = vec![Frame {
        vertex: tree.source,
        cursor: 0,
    }];
    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        let pending = &graph.adj(vertex)[frame.cursor..];
        match pending.iter().position(|&w| !tree.is_marked(w)) {
            Some(offset) => {
                let next = pending[offset];
                frame.cursor += offset + 1;
                tree.mark(next, vertex);
                stack.push(Frame {
                    vertex: next,
                    cursor: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }
}

fn search_recursive(tree: &mut PathTree, graph: &Graph, vertex: usize) {
    for &next in graph.adj(vertex) {
        if !tree.is_marked(next) {
            tree.mark(next, vertex);
            search_recursive(tree, graph, next);
        }
    }
}
