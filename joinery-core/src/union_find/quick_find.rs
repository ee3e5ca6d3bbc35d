//! Eager union-find: every element stores its class id directly.

use super::UnionFind;

/// Quick-find union-find.
///
/// `connected` is two array reads; `union` rewrites every element of the
/// absorbed class, so it costs a full scan of the universe.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickFind {
    ids: Vec<usize>,
    count: usize,
}

impl QuickFind {
    /// Creates `len` singleton classes.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            ids: (0..len).collect(),
            count: len,
        }
    }
}

impl UnionFind for QuickFind {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, element: usize) -> usize {
        self.ids[element]
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        let absorbed = self.ids[p];
        let survivor = self.ids[q];
        if absorbed == survivor {
            return false;
        }
        for id in &mut self.ids {
            if *id == absorbed {
                *id = survivor;
            }
        }
        self.count -= 1;
        true
    }

    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.ids[p] == self.ids[q]
    }
}
