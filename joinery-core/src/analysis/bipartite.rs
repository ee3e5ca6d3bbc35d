//! Two-colouring test.

use tracing::{debug, instrument};

use crate::Graph;

/// Reports whether a [`Graph`] is bipartite.
///
/// Every component's lowest vertex starts on side `false` and each newly
/// discovered vertex takes the side opposite to the vertex it was reached
/// from. An edge between two vertices on the same side, a self-loop
/// included, rules the graph out for good.
///
/// # Examples
/// ```
/// use joinery_core::{Bipartite, Graph};
///
/// let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// assert!(Bipartite::new(&square).is_bipartite());
///
/// let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
/// assert!(!Bipartite::new(&triangle).is_bipartite());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bipartite {
    color: Vec<bool>,
    is_bipartite: bool,
}

impl Bipartite {
    /// Attempts to two-colour every component of `graph`.
    #[must_use]
    #[instrument(
        name = "graph.bipartite",
        level = "debug",
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn new(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut marked = vec![false; vertex_count];
        let mut color = vec![false; vertex_count];
        let mut is_bipartite = true;
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..vertex_count {
            if marked[start] {
                continue;
            }
            marked[start] = true;
            stack.push((start, 0));

            while let Some((vertex, cursor)) = stack.last_mut() {
                let vertex = *vertex;
                let Some(&next) = graph.adj(vertex).get(*cursor) else {
                    stack.pop();
                    continue;
                };
                *cursor += 1;

                if !marked[next] {
                    marked[next] = true;
                    color[next] = !color[vertex];
                    stack.push((next, 0));
                } else if color[next] == color[vertex] {
                    is_bipartite = false;
                }
            }
        }

        debug!(is_bipartite, "bipartite check completed");
        Self {
            color,
            is_bipartite,
        }
    }

    /// Returns `true` when no edge joins two vertices of the same side.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_bipartite(&self) -> bool { self.is_bipartite }

    /// Side of `v` in the two-colouring, or `None` when the graph is not
    /// bipartite.
    ///
    /// # Panics
    /// Panics when `v` is outside the graph.
    #[must_use]
    pub fn color(&self, v: usize) -> Option<bool> {
        self.is_bipartite.then(|| self.color[v])
    }
}
