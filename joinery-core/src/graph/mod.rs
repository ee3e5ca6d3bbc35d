//! Undirected multigraph stored as adjacency lists.


use std::fmt;

use crate::error::{JoineryError, Result};

/// An undirected multigraph over the vertices `0..vertex_count()`.
///
/// Every edge `v - w` is stored twice, once in each endpoint's adjacency list,
/// and counted once. Self-loops and parallel edges are legal; a self-loop
/// `v - v` therefore contributes two entries to `v`'s list. Neighbours are
/// kept in insertion order, which fixes the visiting order of every traversal
/// built on top of the graph.
///
/// # Examples
/// ```
/// use joinery_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1);
/// graph.add_edge(0, 2);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adj(0), &[1, 2]);
/// assert_eq!(graph.adj(2), &[0]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices and inserts `edges` in
    /// order.
    ///
    /// # Panics
    /// Panics when an edge references a vertex `>= vertex_count`.
    #[must_use]
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v, w) in edges {
            graph.add_edge(v, w);
        }
        graph
    }

    /// Number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adj.len() }

    /// Number of edges inserted so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Inserts the undirected edge `v - w`.
    ///
    /// # Panics
    /// Panics when either endpoint is `>= vertex_count()`.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edge_count += 1;
    }

    /// Checked form of [`Graph::add_edge`]. The graph is left untouched on
    /// failure.
    ///
    /// # Errors
    /// Returns [`JoineryError::VertexOutOfRange`] when either endpoint is
    /// outside the graph.
    pub fn try_add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.add_edge(v, w);
        Ok(())
    }

    /// Neighbours of `v` in insertion order.
    ///
    /// # Panics
    /// Panics when `v >= vertex_count()`.
    #[must_use]
    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Number of adjacency entries of `v`; a self-loop counts twice.
    ///
    /// # Panics
    /// Panics when `v >= vertex_count()`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Largest vertex degree, or `0` for a graph without vertices.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Average vertex degree `2E / V` rounded down, or `None` without
    /// vertices.
    #[must_use]
    pub fn average_degree(&self) -> Option<usize> {
        (2 * self.edge_count).checked_div(self.vertex_count())
    }

    /// Number of self-loop edges.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        let entries: usize = self
            .adj
            .iter()
            .enumerate()
            .map(|(v, neighbours)| neighbours.iter().filter(|&&w| w == v).count())
            .sum();
        entries / 2
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(JoineryError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

/// Renders a diagnostic dump: a `graph: V: <v> E: <e>` header followed by one
/// `<vertex>: <neighbours>` line per vertex.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph: V: {} E: {}", self.vertex_count(), self.edge_count)?;
        for (v, neighbours) in self.adj.iter().enumerate() {
            write!(f, "\n{v}:")?;
            for w in neighbours {
                write!(f, " {w}")?;
            }
        }
        Ok(())
    }
}
