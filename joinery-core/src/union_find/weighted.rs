//! Size-balanced union-find built on top of [`QuickUnion`].

use super::{QuickUnion, UnionFind};

/// Weighted quick-union with path halving.
///
/// Wraps a [`QuickUnion`] forest and tracks the size of every root's tree.
/// The smaller tree is always hung under the larger one, so no tree grows
/// taller than `log2(len) + 1` levels. On equal sizes the root of `q` goes
/// under the root of `p`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightedQuickUnion {
    forest: QuickUnion,
    size: Vec<usize>,
}

impl WeightedQuickUnion {
    /// Creates `len` singleton classes.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            forest: QuickUnion::new(len),
            size: vec![1; len],
        }
    }

    /// Number of elements in the class containing `element`.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    pub fn component_size(&mut self, element: usize) -> usize {
        let root = self.forest.find(element);
        self.size[root]
    }

    #[cfg(test)]
    pub(super) fn depth(&self, element: usize) -> usize {
        self.forest.depth(element)
    }
}

impl UnionFind for WeightedQuickUnion {
    fn len(&self) -> usize {
        self.forest.len()
    }

    fn count(&self) -> usize {
        self.forest.count()
    }

    fn find(&mut self, element: usize) -> usize {
        self.forest.find(element)
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let p_root = self.forest.find(p);
        let q_root = self.forest.find(q);
        if p_root == q_root {
            return false;
        }
        let (small, large) = if self.size[p_root] < self.size[q_root] {
            (p_root, q_root)
        } else {
            (q_root, p_root)
        };
        self.forest.link(small, large);
        self.size[large] += self.size[small];
        true
    }
}
