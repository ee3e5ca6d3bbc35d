//! Single-source path discovery over a [`Graph`](crate::Graph).
//!
//! Both engines record, for every vertex they reach, the vertex it was
//! discovered from. Walking those predecessor links from a reached vertex
//! always ends at the source, so a path can be rebuilt on demand.
//!
//! Paths are returned destination first: `v, edge_to(v), ..., source`.

macro_rules! impl_paths {
    ($ty:ty) => {
        impl $crate::paths::Paths for $ty {
            fn source(&self) -> usize {
                self.tree.source
            }

            fn has_path_to(&self, v: usize) -> bool {
                self.tree.is_marked(v)
            }

            fn edge_to(&self, v: usize) -> Option<usize> {
                self.tree.edge_to[v]
            }

            fn path_to(&self, v: usize) -> Option<Vec<usize>> {
                self.tree.path_to(v)
            }

            fn reachable_count(&self) -> usize {
                self.tree.reachable_count()
            }
        }
    };
}

mod bfs;
mod dfs;

#[cfg(test)]
mod property;

pub use self::{
    bfs::BreadthFirstPaths,
    dfs::{DepthFirstPaths, DfsStrategy},
};

/// Query interface shared by the path engines.
///
/// Vertex arguments must be below the vertex count of the searched graph;
/// anything else panics.
pub trait Paths {
    /// Vertex the search started from.
    fn source(&self) -> usize;

    /// Returns `true` when `v` is reachable from the source.
    fn has_path_to(&self, v: usize) -> bool;

    /// Vertex `v` was discovered from, or `None` for the source and for
    /// unreached vertices.
    fn edge_to(&self, v: usize) -> Option<usize>;

    /// Path from `v` back to the source, destination first, or `None` when
    /// `v` was not reached. The path to the source itself is `[source]`.
    fn path_to(&self, v: usize) -> Option<Vec<usize>>;

    /// Number of vertices reached, the source included.
    fn reachable_count(&self) -> usize;
}

/// Visited set and predecessor links recorded by a search.
#[derive(Clone, Debug, Eq, PartialEq)]
struct PathTree {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
}

impl PathTree {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut marked = vec![false; vertex_count];
        marked[source] = true;
        Self {
            source,
            marked,
            edge_to: vec![None; vertex_count],
        }
    }

    fn is_marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    fn mark(&mut self, v: usize, from: usize) {
        self.marked[v] = true;
        self.edge_to[v] = Some(from);
    }

    fn reachable_count(&self) -> usize {
        self.marked.iter().filter(|&&marked| marked).count()
    }

    fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.marked[v] {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(previous) = self.edge_to[current] {
            path.push(previous);
            current = previous;
        }
        debug_assert_eq!(current, self.source, "predecessor chain must end at the source");
        Some(path)
    }
}
