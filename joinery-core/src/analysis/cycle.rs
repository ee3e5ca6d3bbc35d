//! Cycle detection for undirected multigraphs.

use tracing::{debug, instrument};

use crate::Graph;

/// Reports whether a [`Graph`] contains a cycle.
///
/// A depth-first search remembers the vertex each vertex was discovered from.
/// Meeting an already visited neighbour closes a cycle unless that neighbour
/// is the parent reached back over the tree edge. Only one adjacency entry of
/// the parent is excused, so a second parallel edge to the parent counts as a
/// cycle, as does any self-loop.
///
/// # Examples
/// ```
/// use joinery_core::{Cycle, Graph};
///
/// let tree = Graph::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
/// assert!(!Cycle::new(&tree).has_cycle());
///
/// let looped = Graph::from_edges(2, [(0, 1), (1, 1)]);
/// assert!(Cycle::new(&looped).has_cycle());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cycle {
    has_cycle: bool,
}

struct Frame {
    vertex: usize,
    parent: Option<usize>,
    cursor: usize,
    parent_edge_seen: bool,
}

impl Frame {
    const fn new(vertex: usize, parent: Option<usize>) -> Self {
        Self {
            vertex,
            parent,
            cursor: 0,
            parent_edge_seen: false,
        }
    }
}

impl Cycle {
    /// Searches every component of `graph` for a cycle.
    #[must_use]
    #[instrument(
        name = "graph.cycle",
        level = "debug",
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn new(graph: &Graph) -> Self {
        let has_cycle = find_cycle(graph);
        debug!(has_cycle, "cycle detection completed");
        Self { has_cycle }
    }

    /// Returns `true` when the graph contains at least one cycle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn has_cycle(&self) -> bool { self.has_cycle }
}

fn find_cycle(graph: &Graph) -> bool {
    let mut marked = vec![false; graph.vertex_count()];
    let mut stack = Vec::new();

    for start in 0..graph.vertex_count() {
        if marked[start] {
            continue;
        }
        marked[start] = true;
        stack.push(Frame::new(start, None));

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = graph.adj(frame.vertex).get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if !marked[next] {
                marked[next] = true;
                let vertex = frame.vertex;
                stack.push(Frame::new(next, Some(vertex)));
            } else if frame.parent == Some(next) && !frame.parent_edge_seen {
                frame.parent_edge_seen = true;
            } else {
                return true;
            }
        }
    }
    false
}
