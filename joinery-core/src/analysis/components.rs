//! Connected-component labelling.

use tracing::{debug, instrument};

use crate::Graph;

/// Connected components of a [`Graph`].
///
/// Components are numbered `0..count()` in order of their lowest vertex id.
///
/// # Examples
/// ```
/// use joinery_core::{ConnectedComponents, Graph};
///
/// let graph = Graph::from_edges(5, [(0, 1), (3, 4)]);
/// let components = ConnectedComponents::new(&graph);
/// assert_eq!(components.count(), 3);
/// assert!(components.connected(3, 4));
/// assert_eq!(components.id(2), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    sizes: Vec<usize>,
}

impl ConnectedComponents {
    /// Labels every vertex of `graph` with its component.
    #[must_use]
    #[instrument(
        name = "graph.components",
        level = "debug",
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn new(graph: &Graph) -> Self {
        let vertex_count = graph.vertex_count();
        let mut marked = vec![false; vertex_count];
        let mut id = vec![0; vertex_count];
        let mut sizes = Vec::new();
        let mut stack = Vec::new();

        for start in 0..vertex_count {
            if marked[start] {
                continue;
            }
            let component = sizes.len();
            let mut size = 0;
            marked[start] = true;
            stack.push(start);
            while let Some(vertex) = stack.pop() {
                id[vertex] = component;
                size += 1;
                for &next in graph.adj(vertex) {
                    if !marked[next] {
                        marked[next] = true;
                        stack.push(next);
                    }
                }
            }
            sizes.push(size);
        }

        debug!(components = sizes.len(), "component labelling completed");
        Self { id, sizes }
    }

    /// Number of connected components.
    #[must_use]
    #[rustfmt::skip]
    pub fn count(&self) -> usize { self.sizes.len() }

    /// Component label of `v`.
    ///
    /// # Panics
    /// Panics when `v` is outside the graph.
    #[must_use]
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Returns `true` when a path joins `v` and `w`.
    ///
    /// # Panics
    /// Panics when either vertex is outside the graph.
    #[must_use]
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Number of vertices in component `component`.
    ///
    /// # Panics
    /// Panics when `component >= count()`.
    #[must_use]
    pub fn size(&self, component: usize) -> usize {
        self.sizes[component]
    }

    /// Vertices of every component in ascending order, indexed by label.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = self
            .sizes
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect();
        for (vertex, &component) in self.id.iter().enumerate() {
            groups[component].push(vertex);
        }
        groups
    }
}
