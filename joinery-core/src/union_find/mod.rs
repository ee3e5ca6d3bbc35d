//! Disjoint-set union-find over a fixed universe of `0..len` elements.
//!
//! Three strategies share the [`UnionFind`] contract and trade merge cost
//! against query cost:
//!
//! | Variant                  | `union`        | `find`            |
//! |--------------------------|----------------|-------------------|
//! | [`QuickFind`]            | O(N) scan      | O(1)              |
//! | [`QuickUnion`]           | tree height    | tree height, O(N) |
//! | [`WeightedQuickUnion`]   | O(log N)       | O(log N)          |
//!
//! All three produce the same partition for the same sequence of unions.
//! [`DisjointSet`] picks one at construction time from a
//! [`UnionFindVariant`].

mod quick_find;
mod quick_union;
mod weighted;

#[cfg(test)]
mod property;

use std::{collections::HashMap, fmt};

use tracing::{debug, instrument};

use crate::error::{JoineryError, Result};

pub use self::{quick_find::QuickFind, quick_union::QuickUnion, weighted::WeightedQuickUnion};

/// Dynamic connectivity over the elements `0..len()`.
///
/// Element ids passed to the unchecked methods must be below [`len`]; anything
/// else panics. Use [`try_union`] and [`try_connected`] when ids come from
/// untrusted input.
///
/// [`len`]: UnionFind::len
/// [`try_union`]: UnionFind::try_union
/// [`try_connected`]: UnionFind::try_connected
pub trait UnionFind {
    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Returns `true` when the universe has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint classes.
    fn count(&self) -> usize;

    /// Returns an identifier for the class containing `element`.
    ///
    /// The identifier is only meaningful until the next successful union.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    fn find(&mut self, element: usize) -> usize;

    /// Merges the classes containing `p` and `q`.
    ///
    /// Returns `true` when two distinct classes were merged and `false` when
    /// `p` and `q` were already connected, in which case nothing changes.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    fn union(&mut self, p: usize, q: usize) -> bool;

    /// Reports whether `p` and `q` belong to the same class.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Checked form of [`UnionFind::union`].
    ///
    /// # Errors
    /// Returns [`JoineryError::ElementOutOfRange`] when either id is outside
    /// the universe.
    fn try_union(&mut self, p: usize, q: usize) -> Result<bool> {
        check_element(p, self.len())?;
        check_element(q, self.len())?;
        Ok(self.union(p, q))
    }

    /// Checked form of [`UnionFind::connected`].
    ///
    /// # Errors
    /// Returns [`JoineryError::ElementOutOfRange`] when either id is outside
    /// the universe.
    fn try_connected(&mut self, p: usize, q: usize) -> Result<bool> {
        check_element(p, self.len())?;
        check_element(q, self.len())?;
        Ok(self.connected(p, q))
    }

    /// Unions every pair that is not already connected and returns how many
    /// pairs merged two classes.
    ///
    /// The final partition does not depend on the order of the pairs; the
    /// shape of the lazy variants' trees does.
    ///
    /// # Panics
    /// Panics when a pair contains an out-of-range id.
    fn union_pairs<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (usize, usize)>,
        Self: Sized,
    {
        let mut merged = 0;
        for (p, q) in pairs {
            if self.connected(p, q) {
                continue;
            }
            self.union(p, q);
            merged += 1;
        }
        merged
    }

    /// Groups every element by class.
    ///
    /// Classes are ordered by their smallest member and members are listed in
    /// ascending order.
    fn components(&mut self) -> Vec<Vec<usize>> {
        let mut slots: HashMap<usize, usize> = HashMap::with_capacity(self.count());
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.count());
        for element in 0..self.len() {
            let root = self.find(element);
            let slot = *slots.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(element);
        }
        groups
    }
}

fn check_element(element: usize, len: usize) -> Result<()> {
    if element < len {
        Ok(())
    } else {
        Err(JoineryError::ElementOutOfRange { element, len })
    }
}

/// Strategy used by a [`DisjointSet`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum UnionFindVariant {
    /// Eager representation with constant-time queries and linear unions.
    QuickFind,
    /// Lazy parent forest with path halving but no balancing.
    QuickUnion,
    /// Size-balanced parent forest with path halving.
    #[default]
    WeightedQuickUnion,
}

impl UnionFindVariant {
    /// Every variant, cheapest queries first.
    pub const ALL: [Self; 3] = [Self::QuickFind, Self::QuickUnion, Self::WeightedQuickUnion];

    /// Short identifier used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickFind => "quick-find",
            Self::QuickUnion => "quick-union",
            Self::WeightedQuickUnion => "weighted-quick-union",
        }
    }
}

impl fmt::Display for UnionFindVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A union-find whose strategy is chosen by the caller at construction time.
///
/// # Examples
/// ```
/// use joinery_core::{DisjointSet, UnionFind, UnionFindVariant};
///
/// let mut set = DisjointSet::from_pairs(
///     UnionFindVariant::WeightedQuickUnion,
///     10,
///     [(4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (8, 9)],
/// );
/// assert_eq!(set.count(), 5);
/// assert!(set.connected(3, 9));
/// assert!(!set.connected(1, 5));
/// ```
#[derive(Clone, Debug)]
pub enum DisjointSet {
    /// Eager strategy.
    QuickFind(QuickFind),
    /// Lazy strategy.
    QuickUnion(QuickUnion),
    /// Weighted lazy strategy.
    WeightedQuickUnion(WeightedQuickUnion),
}

impl DisjointSet {
    /// Creates `len` singleton classes using `variant`.
    #[must_use]
    pub fn new(variant: UnionFindVariant, len: usize) -> Self {
        match variant {
            UnionFindVariant::QuickFind => Self::QuickFind(QuickFind::new(len)),
            UnionFindVariant::QuickUnion => Self::QuickUnion(QuickUnion::new(len)),
            UnionFindVariant::WeightedQuickUnion => {
                Self::WeightedQuickUnion(WeightedQuickUnion::new(len))
            }
        }
    }

    /// Creates `len` singleton classes and unions every pair of `pairs` that
    /// is not already connected.
    ///
    /// # Panics
    /// Panics when a pair contains an id `>= len`.
    #[instrument(
        name = "union_find.from_pairs",
        level = "debug",
        skip(pairs),
        fields(variant = %variant, len = len),
    )]
    pub fn from_pairs<I>(variant: UnionFindVariant, len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = Self::new(variant, len);
        let merged = set.union_pairs(pairs);
        debug!(merged, components = set.count(), "union-find batch applied");
        set
    }

    /// Returns the strategy backing this set.
    #[must_use]
    pub const fn variant(&self) -> UnionFindVariant {
        match self {
            Self::QuickFind(_) => UnionFindVariant::QuickFind,
            Self::QuickUnion(_) => UnionFindVariant::QuickUnion,
            Self::WeightedQuickUnion(_) => UnionFindVariant::WeightedQuickUnion,
        }
    }
}

macro_rules! dispatch {
    ($set:expr, $inner:ident => $body:expr) => {
        match $set {
            DisjointSet::QuickFind($inner) => $body,
            DisjointSet::QuickUnion($inner) => $body,
            DisjointSet::WeightedQuickUnion($inner) => $body,
        }
    };
}

impl UnionFind for DisjointSet {
    fn len(&self) -> usize {
        dispatch!(self, inner => inner.len())
    }

    fn count(&self) -> usize {
        dispatch!(self, inner => inner.count())
    }

    fn find(&mut self, element: usize) -> usize {
        dispatch!(self, inner => inner.find(element))
    }

    fn union(&mut self, p: usize, q: usize) -> bool {
        dispatch!(self, inner => inner.union(p, q))
    }

    fn connected(&mut self, p: usize, q: usize) -> bool {
        dispatch!(self, inner => inner.connected(p, q))
    }
}
