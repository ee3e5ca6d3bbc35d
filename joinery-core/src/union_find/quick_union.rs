//! Lazy union-find: a parent forest without balancing.

use super::UnionFind;

/// Quick-union union-find with path halving.
///
/// Each element points at a parent and roots point at themselves. `find`
/// redirects every node it visits to its grandparent, which flattens the
/// forest over time, but an adversarial union order can still build a chain
/// of height `len - 1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickUnion {
    parent: Vec<usize>,
    count: usize,
}

impl QuickUnion {
    /// Creates `len` singleton classes.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            count: len,
        }
    }

    /// Hangs the root `child` under the root `parent` and records the merge.
    ///
    /// Both arguments must be distinct roots.
    pub(super) fn link(&mut self, child: usize, parent: usize) {
        debug_assert_eq!(self.parent[child], child, "child must be a root");
        debug_assert_eq!(self.parent[parent], parent, "parent must be a root");
        debug_assert_ne!(child, parent, "linking a root to itself");
        self.parent[child] = parent;
        self.count -= 1;
    }

    /// Number of parent hops from `element` to its root, without compressing.
    #[cfg(test)]
    pub(super) fn depth(&self, element: usize) -> usize {
        let mut node = element;
        let mut hops = 0;
        while self.parent[node] != node {
            node = self.parent[node];
            hops += 1;
        }
        hops
    }
}

impl UnionFind for QuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, element: usize) -> usize {
        let mut node = element;
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let p_root = self.find(p);
        let q_root = self.find(q);
        if p_root == q_root {
            return false;
        }
        self.link(p_root, q_root);
        true
    }
}
